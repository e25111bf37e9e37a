// Layout cursor - the vertical write position of one render

/// Owns the vertical position for a single render. Nothing else moves `y`,
/// and it only ever moves down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    y: i32,
    spacer: i32,
}

impl LayoutCursor {
    pub fn new(spacer: i32) -> Self {
        Self { y: 0, spacer }
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Move past an element of height `delta`, plus the row spacer.
    pub fn advance(&mut self, delta: i32) -> i32 {
        self.y += delta.max(0) + self.spacer;
        self.y
    }

    /// Add clearance without a row spacer (e.g. above the title).
    pub fn clear(&mut self, clearance: i32) -> i32 {
        self.y += clearance.max(0);
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_spacer() {
        let mut cursor = LayoutCursor::new(10);
        assert_eq!(cursor.advance(16), 26);
        assert_eq!(cursor.advance(16), 52);
        assert_eq!(cursor.y(), 52);
    }

    #[test]
    fn test_never_moves_backward() {
        let mut cursor = LayoutCursor::new(10);
        cursor.clear(5);
        assert_eq!(cursor.advance(-100), 15);
        assert_eq!(cursor.clear(-3), 15);
    }
}
