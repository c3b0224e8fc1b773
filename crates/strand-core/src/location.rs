use std::fmt;

use serde::Serialize;

/// A point in the source text.
///
/// `offset` is a byte offset into the source text, also for token streams
/// where it comes from the token's own location. `line` and `column` start
/// at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Location after consuming `byte` at this location.
    pub fn step(self, byte: u8) -> Self {
        if byte == b'\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
