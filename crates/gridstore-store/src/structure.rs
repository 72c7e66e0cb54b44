//! Structural edits: row and column insert/delete.
//!
//! Column shifts only renumber [`ColumnIndex`](crate::ColumnIndex)es. Row
//! shifts go through every affected column's pages, moving whole pages by
//! base and rewriting entries only inside the page that straddles the edit.

use gridstore_core::limits::{MAX_COLUMNS, MAX_ROWS};
use log::debug;

use crate::store::CellStore;

impl<T> CellStore<T> {
    /// Insert `rows` rows at `from_row`, or `cols` columns at `from_col`.
    ///
    /// A column insert (`cols > 0`) renumbers every column `>= from_col`.
    /// Otherwise a row insert moves every cell with `row >= from_row` down
    /// by `rows` in every column; `from_col` is not consulted.
    pub fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        if cols > 0 {
            let start = match self.column_position(from_col) {
                Ok(i) | Err(i) => i,
            };
            for column in &mut self.columns[start..] {
                column.shift_number(cols);
            }
            debug!(
                "insert columns from_col={from_col} cols={cols} shifted={}",
                self.columns.len() - start
            );
        } else if rows > 0 {
            for column in &mut self.columns {
                column.insert_rows(from_row, rows);
            }
            debug!(
                "insert rows from_row={from_row} rows={rows} columns={}",
                self.columns.len()
            );
        }
        self.reset_hints();
    }

    /// Remove the cells of the `rows` x `cols` rectangle at
    /// `(from_row, from_col)`.
    ///
    /// With `shift`, the gap closes: for a rectangle spanning every row the
    /// columns after it move left, otherwise cells below it move up within
    /// its columns. Without `shift`, nothing outside the rectangle moves.
    pub fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        if rows <= 0 || cols <= 0 {
            return;
        }
        if from_row == 0 && rows >= MAX_ROWS {
            self.delete_whole_columns(from_col, cols, shift);
            return;
        }
        let to_col = from_col.saturating_add(cols);
        let start = match self.column_position(from_col) {
            Ok(i) | Err(i) => i,
        };
        let mut touched = 0;
        for column in &mut self.columns[start..] {
            if i32::from(column.number()) >= to_col {
                break;
            }
            column.delete_rows(from_row, rows, shift);
            touched += 1;
        }
        let before = self.columns.len();
        self.columns.retain(|column| !column.is_empty());
        debug!(
            "delete rows from_row={from_row} rows={rows} from_col={from_col} cols={cols} \
             shift={shift} columns={touched} removed_columns={}",
            before - self.columns.len()
        );
        self.reset_hints();
    }

    fn delete_whole_columns(&mut self, from_col: i32, cols: i32, shift: bool) {
        let to_col = from_col.saturating_add(cols);
        let lo = match self.column_position(from_col) {
            Ok(i) | Err(i) => i,
        };
        let hi = lo + self.columns[lo..].partition_point(|c| i32::from(c.number()) < to_col);
        self.columns.drain(lo..hi);
        if shift {
            for column in &mut self.columns[lo..] {
                column.shift_number(-cols);
            }
        }
        debug!(
            "delete columns from_col={from_col} cols={cols} shift={shift} removed_columns={}",
            hi - lo
        );
        self.reset_hints();
    }

    /// Vacate the rectangle without moving anything else.
    pub fn clear(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        self.delete(from_row, from_col, rows, cols, false);
    }

    /// Insert `rows` empty rows at `from_row`.
    pub fn insert_rows(&mut self, from_row: i32, rows: i32) {
        self.insert(from_row, 0, rows, 0);
    }

    /// Insert `cols` empty columns at `from_col`.
    pub fn insert_columns(&mut self, from_col: i32, cols: i32) {
        self.insert(0, from_col, 0, cols);
    }

    /// Delete `rows` whole rows at `from_row`, moving later rows up.
    pub fn delete_rows(&mut self, from_row: i32, rows: i32) {
        self.delete(from_row, 0, rows, MAX_COLUMNS, true);
    }

    /// Delete `cols` whole columns at `from_col`, moving later columns left.
    pub fn delete_columns(&mut self, from_col: i32, cols: i32) {
        self.delete(0, from_col, MAX_ROWS, cols, true);
    }
}
