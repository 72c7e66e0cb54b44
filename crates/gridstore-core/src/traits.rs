//! Core abstraction traits for cell access.
//!
//! Every cell container in the workspace (the paged store, the reference
//! model used in tests) implements these, so consumers and test helpers can
//! be written once against the trait rather than a concrete store.

use crate::address::CellRange;

/// Read-only access to a sparse grid of `T`.
pub trait CellRead<T> {
    /// The value at `(row, col)`, or `None` if the cell was never set.
    fn get(&self, row: i32, col: i32) -> Option<&T>;

    /// Whether `(row, col)` holds a value.
    fn exists(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of populated cells.
    fn len(&self) -> usize;

    /// Whether no cell is populated.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of populated cells, ignoring row 0 and column 0.
    ///
    /// Returns `None` when no cell outside row 0 / column 0 is populated.
    fn dimension(&self) -> Option<CellRange>;

    /// Call `f(row, col, value)` for every populated cell, rows ascending
    /// and columns ascending within a row.
    fn for_each_cell(&self, f: &mut dyn FnMut(i32, i32, &T));
}

/// Mutating access to a sparse grid of `T`.
pub trait CellWrite<T> {
    /// Store `value` at `(row, col)`, overwriting any previous value.
    fn set(&mut self, row: i32, col: i32, value: T);

    /// Insert `rows` rows at `from_row`, or `cols` columns at `from_col`.
    ///
    /// Exactly one of `rows` and `cols` is expected to be non-zero.
    fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32);

    /// Remove the cells of a `rows` x `cols` rectangle at
    /// `(from_row, from_col)`. With `shift`, cells after the rectangle move
    /// back to close the gap; without it they stay where they are.
    fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool);
}
