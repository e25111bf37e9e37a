// Text rows - wrapped body text, the title and the footer
use crate::application::cursor::LayoutCursor;
use crate::application::metrics::wrap_text;
use crate::domain::color::Color;
use crate::domain::instruction::{Anchor, Position, RenderInstruction};
use crate::domain::style::{FontRole, RenderStyle};
use chrono::NaiveDateTime;

/// One left-aligned text instruction per wrapped line. The title gets an
/// extra `v_spacer` of clearance above its first line.
pub fn render_text(
    cursor: &mut LayoutCursor,
    text: &str,
    color: Color,
    font: FontRole,
    style: &RenderStyle,
) -> Vec<RenderInstruction> {
    if font == FontRole::Title {
        cursor.clear(style.v_spacer);
    }

    wrap_text(text, style.max_chars_per_line())
        .into_iter()
        .map(|line| {
            let instruction = RenderInstruction::Text {
                at: Position::new(style.h_spacer, cursor.y()),
                text: line,
                color,
                font,
                anchor: Anchor::LeftTop,
                stroke: None,
            };
            cursor.advance(style.font_size(font));
            instruction
        })
        .collect()
}

/// Generation timestamp pinned to the bottom-right corner; independent of
/// the cursor.
pub fn render_footer(generated_at: NaiveDateTime, style: &RenderStyle) -> RenderInstruction {
    RenderInstruction::Text {
        at: Position::new(style.width - style.h_spacer, style.height - style.v_spacer),
        text: format!("Generated at: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        color: style.text_color,
        font: FontRole::Footer,
        anchor: Anchor::RightBaseline,
        stroke: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn positions(instructions: &[RenderInstruction]) -> Vec<(i32, i32)> {
        instructions
            .iter()
            .map(|i| match i {
                RenderInstruction::Text { at, .. } => (at.x, at.y),
                other => panic!("unexpected instruction {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_body_text_lines_advance_cursor() {
        let style = RenderStyle::default();
        let mut cursor = LayoutCursor::new(style.spacer);
        let long = "word ".repeat(20);

        let instructions = render_text(&mut cursor, &long, Color::WHITE, FontRole::Section, &style);

        // 20 words at 9 per line
        assert_eq!(positions(&instructions), vec![(5, 0), (5, 26), (5, 52)]);
        assert_eq!(cursor.y(), 78);
    }

    #[test]
    fn test_title_gets_clearance() {
        let style = RenderStyle::default();
        let mut cursor = LayoutCursor::new(style.spacer);

        let instructions = render_text(&mut cursor, "Weather", Color::WHITE, FontRole::Title, &style);

        assert_eq!(positions(&instructions), vec![(5, 5)]);
        assert_eq!(instructions[0].text(), Some("Weather"));
        assert_eq!(cursor.y(), 35);
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let style = RenderStyle::default();
        let mut cursor = LayoutCursor::new(style.spacer);
        assert!(render_text(&mut cursor, "  ", Color::WHITE, FontRole::Section, &style).is_empty());
        assert_eq!(cursor.y(), 0);
    }

    #[test]
    fn test_footer_is_anchored_bottom_right() {
        let style = RenderStyle::default();
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();

        let footer = render_footer(at, &style);

        assert_eq!(
            footer,
            RenderInstruction::Text {
                at: Position::new(475, 229),
                text: "Generated at: 2024-03-09 07:05:00".to_string(),
                color: Color::WHITE,
                font: FontRole::Footer,
                anchor: Anchor::RightBaseline,
                stroke: None,
            }
        );
    }
}
