//! Source location tracking: byte spans and resolved locations.

use serde::Serialize;

/// Half-open byte range `[pos, end)` into the original source text.
///
/// Spans are plain data; `Ast::validate` reports any node whose span is
/// inverted (`pos > end`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    pub pos: u32,
    pub end: u32,
}

impl Span {
    pub const EMPTY: Span = Span { pos: 0, end: 0 };

    pub fn new(pos: u32, end: u32) -> Span {
        Span { pos, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.end
    }
}

/// A node position resolved against its enclosing program: the program's
/// filename label plus the node's own 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub filename: String,
    pub line: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}
