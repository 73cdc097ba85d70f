use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location span within a single-line expression.
///
/// Columns are 1-based, inclusive, and counted in characters rather than
/// bytes, since the operator glyphs are multi-byte in UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a single-column span.
    pub fn point(col: u32) -> Self {
        Self::new(col, col)
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Number of columns covered.
    pub fn width(self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {}", self.start)
    }
}
