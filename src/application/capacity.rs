// Capacity check - does the request fit the canvas before anything is drawn
use crate::application::metrics::wrap_text;
use crate::domain::section::Section;
use crate::domain::style::RenderStyle;

/// Capacity weight of one section.
pub fn section_extent(section: &Section, style: &RenderStyle) -> i32 {
    match section {
        Section::Text(text) => {
            let lines = wrap_text(&text.value, style.max_chars_per_line()).len() as i32;
            lines * style.text_line_weight
        }
        Section::Gauge(_) => style.gauge_weight,
    }
}

/// Total weight of all sections with a spacer between each pair.
pub fn required_space<'a, I>(sections: I, style: &RenderStyle) -> i32
where
    I: IntoIterator<Item = &'a Section>,
{
    let mut space = 0;
    for section in sections {
        space += section_extent(section, style) + style.spacer;
    }
    space - style.spacer
}

/// Vertical budget left once the title, footer and edge padding are reserved.
pub fn free_space(style: &RenderStyle) -> i32 {
    style.height
        - (style.title_size + style.spacer)
        - (style.footer_size + 2 * style.spacer)
        - 2 * style.v_spacer
}

pub fn fits<'a, I>(sections: I, style: &RenderStyle) -> bool
where
    I: IntoIterator<Item = &'a Section>,
{
    free_space(style) > required_space(sections, style)
}
