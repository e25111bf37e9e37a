// Composition driver - title, sections and footer for one request
use crate::application::capacity::fits;
use crate::application::cursor::LayoutCursor;
use crate::application::gauge_renderer::render_gauge;
use crate::application::text_renderer::{render_footer, render_text};
use crate::domain::error::{LayoutError, SectionError};
use crate::domain::instruction::RenderInstruction;
use crate::domain::section::{DashboardRequest, Section};
use crate::domain::style::{FontRole, RenderStyle};
use chrono::NaiveDateTime;

/// A section left out of the image, by its index in the request.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSection {
    pub index: usize,
    pub error: SectionError,
}

/// The finished layout of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub instructions: Vec<RenderInstruction>,
    pub skipped: Vec<SkippedSection>,
}

/// Lays out a request as an ordered list of draw instructions.
///
/// All or nothing: the capacity check runs before anything is laid out,
/// and any `LayoutError` discards the partial layout. Malformed sections
/// are skipped and reported in `Composition::skipped`.
pub fn compose(
    request: &DashboardRequest,
    style: &RenderStyle,
    generated_at: NaiveDateTime,
) -> Result<Composition, LayoutError> {
    let parsed: Vec<Result<Section, SectionError>> =
        request.sections.iter().map(Section::parse).collect();

    if !fits(parsed.iter().filter_map(|s| s.as_ref().ok()), style) {
        tracing::warn!(
            module = %request.module,
            sections = request.sections.len(),
            "sections do not fit the canvas"
        );
        return Err(LayoutError::CapacityExceeded {
            sections: request.sections.len(),
        });
    }

    let mut cursor = LayoutCursor::new(style.spacer);
    let mut instructions = render_text(
        &mut cursor,
        &request.title,
        style.text_color,
        FontRole::Title,
        style,
    );
    let mut skipped = Vec::new();

    for (index, section) in parsed.into_iter().enumerate() {
        match section {
            Ok(Section::Text(text)) => {
                instructions.extend(render_text(
                    &mut cursor,
                    &text.value,
                    text.color,
                    FontRole::Section,
                    style,
                ));
            }
            Ok(Section::Gauge(gauge)) => {
                let gauge_instructions = render_gauge(&mut cursor, &gauge, style).map_err(|e| {
                    tracing::error!(module = %request.module, index, error = %e, "gauge cannot be drawn");
                    e
                })?;
                instructions.extend(gauge_instructions);
            }
            Err(error) => {
                match &error {
                    SectionError::UnknownType(_) | SectionError::NotAnObject => tracing::warn!(
                        module = %request.module,
                        index,
                        error = %error,
                        "could not determine type of section, skipping"
                    ),
                    _ => tracing::warn!(
                        module = %request.module,
                        index,
                        key = error.key().unwrap_or_default(),
                        error = %error,
                        "section is malformed, skipping"
                    ),
                }
                skipped.push(SkippedSection { index, error });
            }
        }
    }

    instructions.push(render_footer(generated_at, style));
    tracing::debug!(
        module = %request.module,
        instructions = instructions.len(),
        bottom = cursor.y(),
        "composed dashboard"
    );

    Ok(Composition {
        instructions,
        skipped,
    })
}
