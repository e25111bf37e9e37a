// Render instructions - the ordered output of a layout pass
use super::color::Color;
use super::style::FontRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which point of a text run `Position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    MiddleTop,
    RightBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub width: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    Text {
        at: Position,
        text: String,
        color: Color,
        font: FontRole,
        anchor: Anchor,
        stroke: Option<Stroke>,
    },
    /// Filled rectangle; both corners are inclusive.
    Rectangle {
        from: Position,
        to: Position,
        fill: Color,
    },
    Line {
        from: Position,
        to: Position,
        color: Color,
        width: u32,
    },
}

#[cfg(test)]
impl RenderInstruction {
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderInstruction::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
