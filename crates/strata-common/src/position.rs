//! Line/column source locations attached to diagnostics.
//!
//! Locations are totally ordered so that an error report can list its
//! diagnostics in source order: first by file, then by start position,
//! then by end position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    // 1-based
    pub line: u32,
    // 1-based
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source range within a named file.
///
/// Field order matters: the derived `Ord` compares `file`, then `start`,
/// then `end`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SrcLocation {
    pub file: String,
    pub start: Position,
    pub end: Position,
}

impl SrcLocation {
    pub fn new(file: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }

    /// A zero-width location at `line:column`.
    pub fn point(file: impl Into<String>, line: u32, column: u32) -> Self {
        let at = Position::new(line, column);
        Self::new(file, at, at)
    }

    /// Extended rendering used in diagnostics (`file:line:column`).
    pub fn extloc(&self) -> String {
        format!("{}:{}", self.file, self.start)
    }
}

impl fmt::Display for SrcLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.start)
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod tests;
