//! Error types for cell addressing.
//!
//! The storage engine trusts its callers to stay inside the grid; these
//! errors are produced only by the checked constructors on
//! [`CellAddress`](crate::CellAddress) and [`CellRange`](crate::CellRange),
//! which callers use at their own API boundary.

use std::error::Error;
use std::fmt;

/// A row, column or rectangle that does not fit the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// Row outside `[0, MAX_ROWS)`.
    RowOutOfBounds {
        /// The offending row.
        row: i32,
        /// Exclusive upper bound.
        max: i32,
    },
    /// Column outside `[0, MAX_COLUMNS)`.
    ColumnOutOfBounds {
        /// The offending column.
        col: i32,
        /// Exclusive upper bound.
        max: i32,
    },
    /// A rectangle whose start lies after its end on some axis.
    Inverted {
        /// Which axis is inverted (`"row"` or `"column"`).
        axis: &'static str,
        /// Start coordinate on that axis.
        from: i32,
        /// End coordinate on that axis.
        to: i32,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfBounds { row, max } => {
                write!(f, "row {row} out of bounds: expected 0..{max}")
            }
            Self::ColumnOutOfBounds { col, max } => {
                write!(f, "column {col} out of bounds: expected 0..{max}")
            }
            Self::Inverted { axis, from, to } => {
                write!(f, "inverted {axis} range: {from} > {to}")
            }
        }
    }
}

impl Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = RangeError::RowOutOfBounds { row: -1, max: 10 };
        assert_eq!(e.to_string(), "row -1 out of bounds: expected 0..10");
        let e = RangeError::Inverted {
            axis: "column",
            from: 5,
            to: 2,
        };
        assert_eq!(e.to_string(), "inverted column range: 5 > 2");
    }
}
