//! Typed row/column metadata tables.
//!
//! An [`AxisTable`] holds one metadata value per row (or per column) and
//! follows the same shift rules as the cell store, so metadata never has to
//! be smuggled into row 0 / column 0 of a cell store.

use std::collections::BTreeMap;

/// Ordered map from an axis index to metadata `M`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisTable<M> {
    entries: BTreeMap<i32, M>,
}

impl<M> Default for AxisTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> AxisTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Metadata at `index`.
    pub fn get(&self, index: i32) -> Option<&M> {
        self.entries.get(&index)
    }

    /// Mutable metadata at `index`.
    pub fn get_mut(&mut self, index: i32) -> Option<&mut M> {
        self.entries.get_mut(&index)
    }

    /// Store `meta` at `index`, returning what it replaced.
    pub fn set(&mut self, index: i32, meta: M) -> Option<M> {
        self.entries.insert(index, meta)
    }

    /// Remove the metadata at `index`.
    pub fn remove(&mut self, index: i32) -> Option<M> {
        self.entries.remove(&index)
    }

    /// Number of indices with metadata.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(index, meta)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &M)> {
        self.entries.iter().map(|(&i, m)| (i, m))
    }

    /// Move every index `>= from` up by `count`.
    pub fn insert(&mut self, from: i32, count: i32) {
        if count <= 0 {
            return;
        }
        let tail = self.entries.split_off(&from);
        self.entries
            .extend(tail.into_iter().map(|(i, m)| (i + count, m)));
    }

    /// Drop indices `from..from + count`; with `shift`, later indices move
    /// down by `count`.
    pub fn delete(&mut self, from: i32, count: i32, shift: bool) {
        if count <= 0 {
            return;
        }
        let to = from.saturating_add(count);
        let mut tail = self.entries.split_off(&from);
        let after = tail.split_off(&to);
        let delta = if shift { count } else { 0 };
        self.entries
            .extend(after.into_iter().map(|(i, m)| (i - delta, m)));
    }
}
