// Gauge rows - colored range bar, calibration labels and a value needle
//
// Layout of one gauge, top to bottom:
//   label row: mark labels and the value label, centered on their offsets
//   bar row:   one colored segment per mark, plus the value needle
use crate::application::cursor::LayoutCursor;
use crate::application::metrics::{format_number, number_half_width};
use crate::domain::color::Color;
use crate::domain::error::LayoutError;
use crate::domain::instruction::{Anchor, Position, RenderInstruction, Stroke};
use crate::domain::section::GaugeSection;
use crate::domain::style::{FontRole, RenderStyle};

/// Labels placed so far within a single gauge.
#[derive(Debug)]
struct LabelPlacements {
    placed: Vec<(f64, i32)>,
    glyph_width: i32,
}

impl LabelPlacements {
    fn new(glyph_width: i32) -> Self {
        Self {
            placed: Vec::new(),
            glyph_width,
        }
    }

    fn half_width(&self, number: f64) -> i32 {
        number_half_width(number, self.glyph_width)
    }

    /// Only the most recently placed label is considered, and only in the
    /// left-to-right direction.
    fn collides_with_last(&self, mark: f64, offset: i32) -> bool {
        match self.placed.last() {
            Some(&(last_mark, last_offset)) => {
                offset - self.half_width(mark) < last_offset + self.half_width(last_mark)
            }
            None => false,
        }
    }

    fn place(&mut self, mark: f64, offset: i32) {
        self.placed.push((mark, offset));
    }

    /// Checks the value label against its nearest placed neighbors on each
    /// side. Suppressed marks never block it.
    fn value_collides(&self, value: f64, offset: i32) -> bool {
        if self.placed.iter().any(|&(mark, _)| mark == value) {
            return true;
        }
        let width = self.half_width(value);

        let below = self
            .placed
            .iter()
            .filter(|(mark, _)| *mark < value)
            .max_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(&(mark, mark_offset)) = below {
            if offset - width < mark_offset + self.half_width(mark) {
                return true;
            }
        }

        let above = self
            .placed
            .iter()
            .filter(|(mark, _)| *mark > value)
            .min_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(&(mark, mark_offset)) = above {
            if mark_offset - self.half_width(mark) < offset + width {
                return true;
            }
        }

        false
    }
}

/// Horizontal pixel offset of `value` on a bar spanning `lo..=hi`.
///
/// Floors the scaled distance before adding the margin, so existing
/// renders stay pixel-identical; do not round.
pub fn gauge_offset(value: f64, lo: f64, hi: f64, style: &RenderStyle) -> i32 {
    ((value - lo) * f64::from(style.gauge_width()) / (hi - lo)).floor() as i32 + style.gauge_offset()
}

pub fn render_gauge(
    cursor: &mut LayoutCursor,
    gauge: &GaugeSection,
    style: &RenderStyle,
) -> Result<Vec<RenderInstruction>, LayoutError> {
    let mut sorted = gauge.marks.clone();
    sorted.sort_by(f64::total_cmp);
    if sorted != gauge.marks {
        tracing::warn!(marks = ?gauge.marks, "gauge marks were unsorted");
    }

    let (lo, hi) = match sorted.as_slice() {
        [lo, .., hi] if lo < hi => (*lo, *hi),
        _ => {
            return Err(LayoutError::DegenerateGaugeRange {
                marks: gauge.marks.clone(),
            });
        }
    };

    if gauge.colors.len() + 1 != gauge.marks.len() {
        tracing::warn!(
            marks = gauge.marks.len(),
            colors = gauge.colors.len(),
            "gauge should have one color fewer than marks"
        );
    }

    let label_y = cursor.y();
    let bar_top = label_y + style.section_size + style.spacer;
    let bar_bottom = bar_top + style.section_size;

    let mut labels = LabelPlacements::new(style.glyph_width);
    let mut instructions = Vec::new();
    let mut segment_start = style.gauge_offset();

    // Colors keep request order; the leading mark takes the text color.
    let colors = std::iter::once(style.text_color).chain(gauge.colors.iter().copied());
    for (&mark, color) in sorted.iter().zip(colors) {
        let offset = gauge_offset(mark, lo, hi, style);

        if !labels.collides_with_last(mark, offset) {
            instructions.push(label(mark, offset, label_y, color, None));
            labels.place(mark, offset);
        } else {
            tracing::debug!(mark, offset, "gauge label suppressed");
        }

        instructions.push(RenderInstruction::Rectangle {
            from: Position::new(segment_start, bar_top),
            to: Position::new(offset, bar_bottom),
            fill: color,
        });
        segment_start = offset;
    }

    let offset = gauge_offset(gauge.value, lo, hi, style);
    if !labels.value_collides(gauge.value, offset) {
        let stroke = Stroke {
            width: style.gauge_value_stroke,
            color: style.gauge_line_color,
        };
        instructions.push(label(gauge.value, offset, label_y, style.text_color, Some(stroke)));
    }
    instructions.push(RenderInstruction::Line {
        from: Position::new(offset, bar_top),
        to: Position::new(offset, bar_bottom),
        color: style.gauge_line_color,
        width: style.gauge_line_width,
    });

    cursor.advance(2 * style.section_size + style.spacer);
    Ok(instructions)
}

fn label(number: f64, offset: i32, y: i32, color: Color, stroke: Option<Stroke>) -> RenderInstruction {
    RenderInstruction::Text {
        at: Position::new(offset, y),
        text: format_number(number),
        color,
        font: FontRole::Section,
        anchor: Anchor::MiddleTop,
        stroke,
    }
}
