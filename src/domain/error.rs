// Domain errors for section parsing and layout
use thiserror::Error;

/// A section that cannot be rendered. Recoverable: the section is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("section is not an object")]
    NotAnObject,
    #[error("section has no 'type'")]
    MissingType,
    #[error("unknown section type '{0}'")]
    UnknownType(String),
    #[error("missing key '{0}'")]
    MissingField(&'static str),
    #[error("key '{key}' must be {expected}")]
    InvalidField {
        key: &'static str,
        expected: &'static str,
    },
}

impl SectionError {
    /// The offending key, if the error is about a specific field.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            SectionError::MissingType => Some("type"),
            SectionError::MissingField(key) | SectionError::InvalidField { key, .. } => Some(key),
            SectionError::NotAnObject | SectionError::UnknownType(_) => None,
        }
    }
}

/// A module name that cannot be used as an image file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid module name '{0}': must be a non-empty name without path separators")]
pub struct InvalidModule(pub String);

/// A render that cannot be completed. Nothing is drawn when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error(
        "You have too many ({sections}) sections to render. Try picking fewer sections to send."
    )]
    CapacityExceeded { sections: usize },
    #[error("gauge marks {marks:?} do not span a range")]
    DegenerateGaugeRange { marks: Vec<f64> },
}
