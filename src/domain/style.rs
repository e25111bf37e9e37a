// Render style - immutable layout constants shared by every render
use super::color::Color;

/// The font a text run is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Section,
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub width: i32,
    pub height: i32,
    pub title_size: i32,
    pub section_size: i32,
    pub footer_size: i32,
    /// Monospace glyph width at `section_size`.
    pub glyph_width: i32,
    /// Padding between stacked rows.
    pub spacer: i32,
    /// Padding away from the top and bottom canvas edges.
    pub v_spacer: i32,
    /// Padding away from the left and right canvas edges.
    pub h_spacer: i32,
    pub text_color: Color,
    pub gauge_line_color: Color,
    pub gauge_line_width: u32,
    pub gauge_value_stroke: u32,
    /// Capacity weight of one wrapped text line.
    pub text_line_weight: i32,
    /// Capacity weight of a gauge, independent of its content.
    pub gauge_weight: i32,
    pub jpeg_quality: u8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 480,
            height: 234,
            title_size: 20,
            section_size: 16,
            footer_size: 10,
            glyph_width: 10,
            spacer: 10,
            v_spacer: 5,
            h_spacer: 5,
            text_color: Color::WHITE,
            gauge_line_color: Color::GRAY,
            gauge_line_width: 5,
            gauge_value_stroke: 2,
            text_line_weight: 1,
            gauge_weight: 2,
            jpeg_quality: 85,
        }
    }
}

impl RenderStyle {
    pub fn font_size(&self, font: FontRole) -> i32 {
        match font {
            FontRole::Title => self.title_size,
            FontRole::Section => self.section_size,
            FontRole::Footer => self.footer_size,
        }
    }

    /// Characters per wrapped line: the canvas width in glyphs, minus the
    /// glyphs eaten by both horizontal margins (rounded up).
    pub fn max_chars_per_line(&self) -> usize {
        let glyph = self.glyph_width.max(1);
        let margins = (2 * self.h_spacer + glyph - 1) / glyph;
        (self.width / glyph - margins).max(1) as usize
    }

    /// Pixel length of the gauge bar (90% of the canvas).
    pub fn gauge_width(&self) -> i32 {
        self.width * 9 / 10
    }

    /// Left edge of the gauge bar (5% of the canvas).
    pub fn gauge_offset(&self) -> i32 {
        self.width / 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_derived_constants() {
        let style = RenderStyle::default();
        assert_eq!(style.max_chars_per_line(), 47);
        assert_eq!(style.gauge_width(), 432);
        assert_eq!(style.gauge_offset(), 24);
    }

    #[test]
    fn test_derived_constants_scale_with_canvas() {
        let style = RenderStyle {
            width: 800,
            height: 480,
            ..RenderStyle::default()
        };
        assert_eq!(style.max_chars_per_line(), 79);
        assert_eq!(style.gauge_width(), 720);
        assert_eq!(style.gauge_offset(), 40);
    }

    #[test]
    fn test_font_size_by_role() {
        let style = RenderStyle::default();
        assert_eq!(style.font_size(FontRole::Title), 20);
        assert_eq!(style.font_size(FontRole::Section), 16);
        assert_eq!(style.font_size(FontRole::Footer), 10);
    }
}
