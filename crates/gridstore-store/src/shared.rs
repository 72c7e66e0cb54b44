//! A cell store behind one store-wide lock.
//!
//! [`SharedCellStore`] serializes every structural mutation through a single
//! `parking_lot::RwLock` around the whole column array. Point reads share
//! the read side. Enumeration borrows a read guard via [`read()`], so a
//! [`CellsEnumerator`](crate::CellsEnumerator) can never observe a store
//! mid-edit.
//!
//! [`read()`]: SharedCellStore::read

use gridstore_arena::{Arena, ArenaPos};
use gridstore_core::CellRange;
use log::warn;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{ConfigError, StoreConfig};
use crate::store::CellStore;

/// Thread-safe wrapper around a [`CellStore`].
#[derive(Debug, Default)]
pub struct SharedCellStore<T> {
    inner: RwLock<CellStore<T>>,
}

impl<T> SharedCellStore<T> {
    /// Create an empty shared store.
    pub fn new() -> Self {
        Self::from_store(CellStore::new())
    }

    /// Create an empty shared store with the given allocation hints.
    pub fn with_config(config: StoreConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_store(CellStore::with_config(config)?))
    }

    /// Wrap an existing store.
    pub fn from_store(store: CellStore<T>) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Take the store back out.
    pub fn into_inner(self) -> CellStore<T> {
        self.inner.into_inner()
    }

    /// Hold the read lock; the guard dereferences to the store.
    pub fn read(&self) -> RwLockReadGuard<'_, CellStore<T>> {
        self.inner.read()
    }

    /// Hold the write lock; the guard dereferences to the store.
    pub fn write(&self) -> RwLockWriteGuard<'_, CellStore<T>> {
        self.inner.write()
    }

    /// A copy of the value at `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().get(row, col).cloned()
    }

    /// Whether `(row, col)` holds a value.
    pub fn exists(&self, row: i32, col: i32) -> bool {
        self.inner.read().exists(row, col)
    }

    /// Store `value` at `(row, col)`, returning the value it replaced.
    pub fn set(&self, row: i32, col: i32, value: T) -> Option<T> {
        self.inner.write().set(row, col, value)
    }

    /// See [`CellStore::set_value_special`].
    pub fn set_value_special<F>(&self, row: i32, col: i32, updater: F)
    where
        T: Default,
        F: FnOnce(&mut Arena<T>, ArenaPos),
    {
        self.inner.write().set_value_special(row, col, updater);
    }

    /// See [`CellStore::set_range_special`]. An inverted range is logged
    /// and ignored.
    pub fn set_range_special<F>(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32, updater: F)
    where
        T: Default,
        F: FnMut(&mut Arena<T>, ArenaPos, i32, i32),
    {
        if from_row > to_row || from_col > to_col {
            warn!(
                "ignoring inverted range rows={from_row}..={to_row} cols={from_col}..={to_col}"
            );
            return;
        }
        self.inner
            .write()
            .set_range_special(from_row, from_col, to_row, to_col, updater);
    }

    /// See [`CellStore::insert`].
    pub fn insert(&self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        self.inner.write().insert(from_row, from_col, rows, cols);
    }

    /// See [`CellStore::delete`].
    pub fn delete(&self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        self.inner
            .write()
            .delete(from_row, from_col, rows, cols, shift);
    }

    /// See [`CellStore::clear`].
    pub fn clear(&self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        self.inner.write().clear(from_row, from_col, rows, cols);
    }

    /// Bounding box of populated cells, ignoring row 0 and column 0.
    pub fn dimension(&self) -> Option<CellRange> {
        self.inner.read().dimension()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// A deep copy of the store, taken under the read lock.
    pub fn snapshot(&self) -> CellStore<T>
    where
        T: Clone,
    {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ops_round_trip() {
        let shared = SharedCellStore::new();
        assert_eq!(shared.set(3, 3, 30), None);
        assert_eq!(shared.set(3, 3, 31), Some(30));
        assert_eq!(shared.get(3, 3), Some(31));
        assert!(shared.exists(3, 3));
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn enumerate_under_read_guard() {
        let shared = SharedCellStore::new();
        shared.set(1, 1, 'a');
        shared.set(2, 1, 'b');
        let guard = shared.read();
        let values: String = guard.cells().map(|(_, _, v)| *v).collect();
        assert_eq!(values, "ab");
    }

    #[test]
    fn inverted_range_is_ignored() {
        let shared: SharedCellStore<u8> = SharedCellStore::new();
        shared.set_range_special(9, 1, 1, 1, |_, _, _, _| panic!("must not run"));
        assert!(shared.is_empty());
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedCellStore::new();
        shared.set(1, 1, 1);
        let snap = shared.snapshot();
        shared.insert(0, 0, 4, 0);
        assert_eq!(snap.get(1, 1), Some(&1));
        assert_eq!(shared.get(5, 1), Some(1));
        assert_eq!(shared.into_inner().len(), 1);
    }

    #[test]
    fn writers_on_many_threads() {
        let shared = SharedCellStore::new();
        std::thread::scope(|s| {
            for t in 0..4 {
                let shared = &shared;
                s.spawn(move || {
                    for row in 0..500 {
                        shared.set(row, t + 1, row * 10 + t);
                    }
                });
            }
        });
        assert_eq!(shared.len(), 2000);
        assert_eq!(shared.get(499, 4), Some(4993));
        assert_eq!(shared.read().validate(), Ok(()));
    }
}
