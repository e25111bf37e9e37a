// Domain layer - Section model, render style and layout output types
pub mod color;
pub mod error;
pub mod instruction;
pub mod section;
pub mod style;
