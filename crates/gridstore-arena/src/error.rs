//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::position::ArenaPos;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A position that was never handed out by `append`.
    InvalidPosition {
        /// The position that was requested.
        position: ArenaPos,
        /// Number of slots in the arena.
        len: usize,
    },
    /// A capacity hint larger than the number of addressable positions.
    CapacityExceeded {
        /// Number of slots requested.
        requested: usize,
        /// Maximum number of slots an arena can address.
        max: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { position, len } => {
                write!(f, "invalid arena position {position}: arena holds {len} values")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} slots, max {max}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
