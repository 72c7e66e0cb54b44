//! Per-cell flag store.

use gridstore_core::CellFlags;

use crate::store::CellStore;

/// Boolean cell flags kept in their own [`CellStore`].
///
/// Clearing a flag on a cell that has none does not create the cell.
#[derive(Clone, Debug, Default)]
pub struct FlagStore {
    cells: CellStore<CellFlags>,
}

impl FlagStore {
    /// Create an empty flag store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn `flags` on or off at `(row, col)`.
    pub fn set_flag(&mut self, row: i32, col: i32, value: bool, flags: CellFlags) {
        if let Some(current) = self.cells.get_mut(row, col) {
            current.set(flags, value);
        } else if value {
            self.cells.set(row, col, flags);
        }
    }

    /// Whether every flag in `flags` is set at `(row, col)`.
    pub fn get_flag(&self, row: i32, col: i32, flags: CellFlags) -> bool {
        self.cells
            .get(row, col)
            .is_some_and(|current| current.contains(flags))
    }

    /// All flags at `(row, col)`.
    pub fn flags(&self, row: i32, col: i32) -> CellFlags {
        self.cells.get(row, col).copied().unwrap_or_default()
    }

    /// See [`CellStore::insert`].
    pub fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        self.cells.insert(from_row, from_col, rows, cols);
    }

    /// See [`CellStore::delete`].
    pub fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        self.cells.delete(from_row, from_col, rows, cols, shift);
    }

    /// The underlying store.
    pub fn inner(&self) -> &CellStore<CellFlags> {
        &self.cells
    }

    /// Mutable access to the underlying store.
    pub fn inner_mut(&mut self) -> &mut CellStore<CellFlags> {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_flags() {
        let mut flags = FlagStore::new();
        flags.set_flag(2, 3, true, CellFlags::RICH_TEXT);
        flags.set_flag(2, 3, true, CellFlags::ARRAY_FORMULA);
        assert!(flags.get_flag(2, 3, CellFlags::RICH_TEXT));
        assert!(flags.get_flag(2, 3, CellFlags::RICH_TEXT | CellFlags::ARRAY_FORMULA));
        assert!(!flags.get_flag(2, 3, CellFlags::DATA_TABLE));

        flags.set_flag(2, 3, false, CellFlags::RICH_TEXT);
        assert!(!flags.get_flag(2, 3, CellFlags::RICH_TEXT));
        assert_eq!(flags.flags(2, 3), CellFlags::ARRAY_FORMULA);
    }

    #[test]
    fn clearing_absent_cell_creates_nothing() {
        let mut flags = FlagStore::new();
        flags.set_flag(7, 7, false, CellFlags::SHARED_FORMULA);
        assert!(flags.inner().is_empty());
        assert!(flags.flags(7, 7).is_empty());
    }

    #[test]
    fn flags_follow_structural_edits() {
        let mut flags = FlagStore::new();
        flags.set_flag(10, 2, true, CellFlags::DATA_TABLE);
        flags.insert(5, 0, 3, 0);
        assert!(flags.get_flag(13, 2, CellFlags::DATA_TABLE));
        flags.delete(0, 1, gridstore_core::MAX_ROWS, 1, true);
        assert!(flags.get_flag(13, 1, CellFlags::DATA_TABLE));
    }
}
