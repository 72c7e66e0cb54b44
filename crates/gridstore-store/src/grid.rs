//! A cell store bundled with its row and column metadata tables.

use gridstore_core::limits::{MAX_COLUMNS, MAX_ROWS};
use gridstore_core::CellRange;

use crate::axis::AxisTable;
use crate::store::CellStore;

/// Cells of type `T` plus per-row metadata `R` and per-column metadata `C`.
///
/// Structural edits go through the grid so all three containers shift
/// together.
#[derive(Clone, Debug)]
pub struct CellGrid<T, R = (), C = ()> {
    cells: CellStore<T>,
    rows: AxisTable<R>,
    cols: AxisTable<C>,
}

impl<T, R, C> Default for CellGrid<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R, C> CellGrid<T, R, C> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: CellStore::new(),
            rows: AxisTable::new(),
            cols: AxisTable::new(),
        }
    }

    /// Build a grid around an existing store.
    pub fn from_store(cells: CellStore<T>) -> Self {
        Self {
            cells,
            rows: AxisTable::new(),
            cols: AxisTable::new(),
        }
    }

    /// The cell store.
    pub fn store(&self) -> &CellStore<T> {
        &self.cells
    }

    /// Mutable cell store. Structural edits made through it bypass the
    /// metadata tables.
    pub fn store_mut(&mut self) -> &mut CellStore<T> {
        &mut self.cells
    }

    /// Row metadata.
    pub fn row_meta(&self) -> &AxisTable<R> {
        &self.rows
    }

    /// Mutable row metadata.
    pub fn row_meta_mut(&mut self) -> &mut AxisTable<R> {
        &mut self.rows
    }

    /// Column metadata.
    pub fn col_meta(&self) -> &AxisTable<C> {
        &self.cols
    }

    /// Mutable column metadata.
    pub fn col_meta_mut(&mut self) -> &mut AxisTable<C> {
        &mut self.cols
    }

    /// The value at `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Option<&T> {
        self.cells.get(row, col)
    }

    /// Store `value` at `(row, col)`.
    pub fn set(&mut self, row: i32, col: i32, value: T) -> Option<T> {
        self.cells.set(row, col, value)
    }

    /// Bounding box of the cells; metadata never contributes.
    pub fn dimension(&self) -> Option<CellRange> {
        self.cells.dimension()
    }

    /// Insert rows or columns in the cells and the matching table.
    pub fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        self.cells.insert(from_row, from_col, rows, cols);
        if cols > 0 {
            self.cols.insert(from_col, cols);
        } else if rows > 0 {
            self.rows.insert(from_row, rows);
        }
    }

    /// Delete a rectangle of cells. A rectangle spanning every row also
    /// deletes column metadata; one spanning every column also deletes row
    /// metadata.
    pub fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        self.cells.delete(from_row, from_col, rows, cols, shift);
        if rows <= 0 || cols <= 0 {
            return;
        }
        if from_row == 0 && rows >= MAX_ROWS {
            self.cols.delete(from_col, cols, shift);
        }
        if from_col == 0 && cols >= MAX_COLUMNS {
            self.rows.delete(from_row, rows, shift);
        }
    }

    /// Insert `rows` rows at `from_row`.
    pub fn insert_rows(&mut self, from_row: i32, rows: i32) {
        self.insert(from_row, 0, rows, 0);
    }

    /// Insert `cols` columns at `from_col`.
    pub fn insert_columns(&mut self, from_col: i32, cols: i32) {
        self.insert(0, from_col, 0, cols);
    }

    /// Delete `rows` whole rows at `from_row`.
    pub fn delete_rows(&mut self, from_row: i32, rows: i32) {
        self.delete(from_row, 0, rows, MAX_COLUMNS, true);
    }

    /// Delete `cols` whole columns at `from_col`.
    pub fn delete_columns(&mut self, from_col: i32, cols: i32) {
        self.delete(0, from_col, MAX_ROWS, cols, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct RowStyle {
        height: f32,
    }

    #[test]
    fn metadata_shifts_with_cells() {
        let mut grid: CellGrid<&str, RowStyle, u16> = CellGrid::new();
        grid.set(4, 2, "x");
        grid.row_meta_mut().set(4, RowStyle { height: 20.0 });
        grid.col_meta_mut().set(2, 120);

        grid.insert_rows(1, 3);
        grid.insert_columns(2, 1);
        assert_eq!(grid.get(7, 3), Some(&"x"));
        assert_eq!(grid.row_meta().get(7), Some(&RowStyle { height: 20.0 }));
        assert_eq!(grid.col_meta().get(3), Some(&120));

        grid.delete_rows(0, 2);
        grid.delete_columns(1, 1);
        assert_eq!(grid.get(5, 2), Some(&"x"));
        assert_eq!(grid.row_meta().get(5).map(|s| s.height), Some(20.0));
        assert_eq!(grid.col_meta().get(2), Some(&120));
    }

    #[test]
    fn metadata_never_affects_dimension() {
        let mut grid: CellGrid<i32, u8, u8> = CellGrid::new();
        grid.row_meta_mut().set(900, 1);
        grid.col_meta_mut().set(900, 1);
        assert_eq!(grid.dimension(), None);
        grid.set(3, 3, 1);
        assert_eq!(grid.dimension(), Some(CellRange::new(3, 3, 3, 3)));
    }

    #[test]
    fn partial_delete_leaves_metadata() {
        let mut grid: CellGrid<i32, u8, u8> = CellGrid::new();
        grid.row_meta_mut().set(5, 1);
        grid.col_meta_mut().set(5, 1);
        grid.delete(0, 0, 10, 10, true);
        assert_eq!(grid.row_meta().get(5), Some(&1));
        assert_eq!(grid.col_meta().get(5), Some(&1));
    }
}
