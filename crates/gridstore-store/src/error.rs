//! Layout errors reported by [`CellStore::validate`](crate::CellStore::validate).

use std::error::Error;
use std::fmt;

/// A broken index invariant.
///
/// These never occur through the public API; `validate()` exists so tests
/// and debug builds can check the layout after arbitrary edit sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Column numbers are not strictly ascending.
    ColumnsOutOfOrder {
        /// Position of the offending column.
        position: usize,
        /// Its number.
        number: i16,
        /// Number of the column before it.
        previous: i16,
    },
    /// A column with no pages.
    EmptyColumn {
        /// The column number.
        column: i16,
    },
    /// A page with no entries.
    EmptyPage {
        /// The column number.
        column: i16,
        /// Position of the page within the column.
        page: usize,
    },
    /// Entries within a page are not strictly ascending.
    EntriesOutOfOrder {
        /// The column number.
        column: i16,
        /// Position of the page within the column.
        page: usize,
        /// Index of the offending entry.
        entry: usize,
    },
    /// A page holds more entries than the cap.
    PageOverflow {
        /// The column number.
        column: i16,
        /// Position of the page within the column.
        page: usize,
        /// Number of entries found.
        len: usize,
    },
    /// A page's first row is not after the previous page's last row.
    PagesOverlap {
        /// The column number.
        column: i16,
        /// Position of the later page.
        page: usize,
    },
    /// A page offset outside `0..PAGE_SIZE`, a negative local row, or a
    /// local row past the settled span.
    BadLocalRow {
        /// The column number.
        column: i16,
        /// Position of the page within the column.
        page: usize,
    },
    /// A populated row below zero.
    NegativeRow {
        /// The column number.
        column: i16,
        /// The offending row.
        row: i32,
    },
    /// An entry points past the end of the arena.
    DanglingPosition {
        /// The column number.
        column: i16,
        /// The row of the entry.
        row: i32,
        /// The raw arena position.
        position: i32,
    },
    /// Two entries point at the same arena slot.
    SharedPosition {
        /// The raw arena position.
        position: i32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnsOutOfOrder {
                position,
                number,
                previous,
            } => write!(
                f,
                "column {number} at position {position} does not follow column {previous}"
            ),
            Self::EmptyColumn { column } => write!(f, "column {column} has no pages"),
            Self::EmptyPage { column, page } => {
                write!(f, "column {column} page {page} has no entries")
            }
            Self::EntriesOutOfOrder {
                column,
                page,
                entry,
            } => write!(
                f,
                "column {column} page {page} entry {entry} is not after its predecessor"
            ),
            Self::PageOverflow { column, page, len } => {
                write!(f, "column {column} page {page} holds {len} entries")
            }
            Self::PagesOverlap { column, page } => {
                write!(f, "column {column} page {page} overlaps the page before it")
            }
            Self::BadLocalRow { column, page } => {
                write!(f, "column {column} page {page} has an out-of-range local row")
            }
            Self::NegativeRow { column, row } => {
                write!(f, "column {column} holds negative row {row}")
            }
            Self::DanglingPosition {
                column,
                row,
                position,
            } => write!(
                f,
                "cell R{row}C{column} references arena position #{position} past the end"
            ),
            Self::SharedPosition { position } => {
                write!(f, "arena position #{position} is referenced twice")
            }
        }
    }
}

impl Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_cell() {
        let err = LayoutError::DanglingPosition {
            column: 3,
            row: 10,
            position: 99,
        };
        assert_eq!(
            err.to_string(),
            "cell R10C3 references arena position #99 past the end"
        );
    }
}
