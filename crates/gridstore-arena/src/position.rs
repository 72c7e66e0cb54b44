//! Arena positions.

use std::fmt;

/// Index of a value slot within an [`Arena`](crate::Arena).
///
/// Positions are assigned in append order starting at 0 and stay valid for
/// the arena's lifetime. They are stored as `i32` inside cell entries, so an
/// arena holds at most `i32::MAX` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct ArenaPos(i32);

impl ArenaPos {
    /// Rebuild a position from the raw value stored in an index entry.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw value stored in index entries.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The position as a `Vec` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ArenaPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
