//! Source locations.
//!
//! The notation is line oriented, so positions are tracked as 1-based
//! line/column pairs rather than byte spans.

use std::fmt;

/// A 1-based line/column position in the decoded source.
///
/// Columns count characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location used for generated nodes (injected `head`, `meta`).
    pub const GENERATED: Location = Location { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// Location of the first column of `line`.
    #[inline]
    pub const fn line_start(line: u32) -> Self {
        Location { line, column: 1 }
    }

    /// Same line, column shifted right by `offset` characters.
    #[inline]
    #[must_use]
    pub fn offset(self, offset: usize) -> Self {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        Location {
            line: self.line,
            column: self.column.saturating_add(offset),
        }
    }

    /// Returns `true` for locations of nodes that have no source text.
    #[inline]
    pub const fn is_generated(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Location;
    crate::static_assert_size!(Location, 8);
}
