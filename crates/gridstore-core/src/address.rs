//! Cell addresses and rectangular ranges.

use std::fmt;

use crate::error::RangeError;
use crate::limits::{MAX_COLUMNS, MAX_ROWS};

/// A single cell coordinate.
///
/// Ordering is row-major: by row, then by column. Row 0 and column 0 are
/// valid coordinates but are not grid content; they never contribute to a
/// store's used range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row, `0..MAX_ROWS`.
    pub row: i32,
    /// Column, `0..MAX_COLUMNS`.
    pub col: i32,
}

impl CellAddress {
    /// Create an address without bounds checking.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create an address, rejecting coordinates outside the grid.
    pub fn checked(row: i32, col: i32) -> Result<Self, RangeError> {
        check_row(row)?;
        check_col(col)?;
        Ok(Self { row, col })
    }

    /// Whether this address lies in row 0 or column 0.
    pub fn is_metadata_slot(&self) -> bool {
        self.row == 0 || self.col == 0
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

impl From<(i32, i32)> for CellAddress {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// An inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First row (inclusive).
    pub from_row: i32,
    /// First column (inclusive).
    pub from_col: i32,
    /// Last row (inclusive).
    pub to_row: i32,
    /// Last column (inclusive).
    pub to_col: i32,
}

impl CellRange {
    /// Create a rectangle without validation.
    pub const fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// The whole grid, including the row 0 / column 0 slots.
    pub const fn whole() -> Self {
        Self::new(0, 0, MAX_ROWS - 1, MAX_COLUMNS - 1)
    }

    /// Create a rectangle, rejecting out-of-grid corners and inverted axes.
    pub fn checked(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Result<Self, RangeError> {
        check_row(from_row)?;
        check_row(to_row)?;
        check_col(from_col)?;
        check_col(to_col)?;
        if from_row > to_row {
            return Err(RangeError::Inverted {
                axis: "row",
                from: from_row,
                to: to_row,
            });
        }
        if from_col > to_col {
            return Err(RangeError::Inverted {
                axis: "column",
                from: from_col,
                to: to_col,
            });
        }
        Ok(Self::new(from_row, from_col, to_row, to_col))
    }

    /// Whether `(row, col)` lies inside the rectangle.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.from_row && row <= self.to_row && col >= self.from_col && col <= self.to_col
    }

    /// Number of rows covered; zero for an inverted range.
    pub fn row_count(&self) -> i32 {
        (self.to_row - self.from_row + 1).max(0)
    }

    /// Number of columns covered; zero for an inverted range.
    pub fn col_count(&self) -> i32 {
        (self.to_col - self.from_col + 1).max(0)
    }

    /// Whether the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.col_count() == 0
    }

    /// Top-left corner.
    pub fn start(&self) -> CellAddress {
        CellAddress::new(self.from_row, self.from_col)
    }

    /// Bottom-right corner.
    pub fn end(&self) -> CellAddress {
        CellAddress::new(self.to_row, self.to_col)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start(), self.end())
    }
}

fn check_row(row: i32) -> Result<(), RangeError> {
    if (0..MAX_ROWS).contains(&row) {
        Ok(())
    } else {
        Err(RangeError::RowOutOfBounds { row, max: MAX_ROWS })
    }
}

fn check_col(col: i32) -> Result<(), RangeError> {
    if (0..MAX_COLUMNS).contains(&col) {
        Ok(())
    } else {
        Err(RangeError::ColumnOutOfBounds {
            col,
            max: MAX_COLUMNS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn address_orders_row_major() {
        let mut cells = vec![
            CellAddress::new(2, 1),
            CellAddress::new(1, 5),
            CellAddress::new(1, 2),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellAddress::new(1, 2),
                CellAddress::new(1, 5),
                CellAddress::new(2, 1)
            ]
        );
    }

    #[test]
    fn checked_address_rejects_out_of_grid() {
        assert!(CellAddress::checked(0, 0).is_ok());
        assert!(CellAddress::checked(MAX_ROWS - 1, MAX_COLUMNS - 1).is_ok());
        assert_eq!(
            CellAddress::checked(MAX_ROWS, 1),
            Err(RangeError::RowOutOfBounds {
                row: MAX_ROWS,
                max: MAX_ROWS
            })
        );
        assert!(matches!(
            CellAddress::checked(1, -1),
            Err(RangeError::ColumnOutOfBounds { col: -1, .. })
        ));
    }

    #[test]
    fn metadata_slots() {
        assert!(CellAddress::new(0, 4).is_metadata_slot());
        assert!(CellAddress::new(4, 0).is_metadata_slot());
        assert!(!CellAddress::new(4, 4).is_metadata_slot());
    }

    #[test]
    fn checked_range_rejects_inverted_axes() {
        assert!(matches!(
            CellRange::checked(5, 1, 4, 1),
            Err(RangeError::Inverted { axis: "row", .. })
        ));
        assert!(matches!(
            CellRange::checked(1, 3, 1, 2),
            Err(RangeError::Inverted { axis: "column", .. })
        ));
    }

    #[test]
    fn range_counts_and_display() {
        let r = CellRange::new(2, 3, 4, 3);
        assert_eq!(r.row_count(), 3);
        assert_eq!(r.col_count(), 1);
        assert!(!r.is_empty());
        assert_eq!(r.to_string(), "R2C3:R4C3");
        assert!(CellRange::new(4, 1, 2, 1).is_empty());
    }

    proptest! {
        #[test]
        fn contains_matches_bounds(
            row in 0i32..100,
            col in 0i32..100,
            fr in 0i32..50,
            fc in 0i32..50,
            h in 0i32..50,
            w in 0i32..50,
        ) {
            let r = CellRange::new(fr, fc, fr + h, fc + w);
            let expected = row >= fr && row <= fr + h && col >= fc && col <= fc + w;
            prop_assert_eq!(r.contains(row, col), expected);
        }
    }
}
