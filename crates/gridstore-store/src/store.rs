//! The cell store: column array, value arena and point access.
//!
//! Lookups resolve column (binary search with a last-hit hint), then page
//! (see [`ColumnIndex::position_of`]), then entry. Values live in the
//! [`Arena`]; the index only stores positions, so structural edits never
//! move values.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};

use gridstore_arena::{Arena, ArenaPos};
use gridstore_core::limits::{page_of, page_start, PAGE_SIZE};
use gridstore_core::{CellRange, CellRead, CellWrite};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::column::{ColumnIndex, Slot};
use crate::config::{ConfigError, StoreConfig};
use crate::page::Page;

/// Sparse grid of `T` indexed by column, page and row.
///
/// Every mutation takes `&mut self`; wrap the store in a
/// [`SharedCellStore`](crate::SharedCellStore) to share it between threads.
#[derive(Debug)]
pub struct CellStore<T> {
    pub(crate) columns: Vec<ColumnIndex>,
    pub(crate) arena: Arena<T>,
    config: StoreConfig,
    column_hint: AtomicUsize,
}

impl<T> CellStore<T> {
    /// Create an empty store with default allocation hints.
    pub fn new() -> Self {
        let config = StoreConfig::default();
        Self {
            columns: Vec::with_capacity(config.column_capacity),
            arena: Arena::new(),
            config,
            column_hint: AtomicUsize::new(0),
        }
    }

    /// Create an empty store with the given allocation hints.
    pub fn with_config(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::with_config(&config.arena)?;
        Ok(Self {
            columns: Vec::with_capacity(config.column_capacity),
            arena,
            config,
            column_hint: AtomicUsize::new(0),
        })
    }

    /// The allocation hints this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ── Columns ────────────────────────────────────────────────────

    /// Position of column `col` in the column array.
    ///
    /// `Ok(i)` if the column exists, otherwise `Err(i)` with the position
    /// it would be inserted at.
    pub fn column_position(&self, col: i32) -> Result<usize, usize> {
        let hint = self.column_hint.load(Ordering::Relaxed);
        if let Some(column) = self.columns.get(hint) {
            if i32::from(column.number()) == col {
                return Ok(hint);
            }
        }
        let found = self
            .columns
            .binary_search_by(|column| i32::from(column.number()).cmp(&col));
        if let Ok(i) = found {
            self.column_hint.store(i, Ordering::Relaxed);
        }
        found
    }

    /// The index of column `col`, if it holds any cell.
    pub fn column(&self, col: i32) -> Option<&ColumnIndex> {
        self.column_position(col).ok().map(|i| &self.columns[i])
    }

    /// Column indexes in ascending column order.
    pub fn columns(&self) -> &[ColumnIndex] {
        &self.columns
    }

    /// Numbers of the columns holding at least one cell, ascending.
    pub fn column_numbers(&self) -> impl Iterator<Item = i32> + '_ {
        self.columns.iter().map(|column| i32::from(column.number()))
    }

    /// Number of pages in column `col` (0 if the column is empty).
    pub fn page_count(&self, col: i32) -> usize {
        self.column(col).map_or(0, ColumnIndex::page_count)
    }

    fn column_or_insert(&mut self, col: i32) -> usize {
        match self.column_position(col) {
            Ok(i) => i,
            Err(i) => {
                trace!("new column column={col} position={i}");
                self.columns.insert(
                    i,
                    ColumnIndex::new(
                        col as i16,
                        self.config.pages_per_column,
                        self.config.page_capacity,
                    ),
                );
                self.column_hint.store(i, Ordering::Relaxed);
                i
            }
        }
    }

    pub(crate) fn reset_hints(&self) {
        self.column_hint.store(0, Ordering::Relaxed);
    }

    // ── Point access ───────────────────────────────────────────────

    fn locate(&self, row: i32, col: i32) -> Option<ArenaPos> {
        let cp = self.column_position(col).ok()?;
        self.columns[cp].locate(row)
    }

    /// The value at `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Option<&T> {
        self.locate(row, col).map(|pos| self.arena.get(pos))
    }

    /// Mutable access to the value at `(row, col)`.
    pub fn get_mut(&mut self, row: i32, col: i32) -> Option<&mut T> {
        let pos = self.locate(row, col)?;
        Some(self.arena.get_mut(pos))
    }

    /// Whether `(row, col)` holds a value.
    pub fn exists(&self, row: i32, col: i32) -> bool {
        self.locate(row, col).is_some()
    }

    /// Store `value` at `(row, col)`, returning the value it replaced.
    ///
    /// Overwriting reuses the cell's arena slot; only a new cell appends.
    pub fn set(&mut self, row: i32, col: i32, value: T) -> Option<T> {
        let cp = self.column_or_insert(col);
        match self.columns[cp].slot(row) {
            Slot::Occupied(pos) => Some(std::mem::replace(self.arena.get_mut(pos), value)),
            Slot::Vacant(vacancy) => {
                let pos = self.arena.append(value);
                self.columns[cp].occupy(vacancy, pos);
                None
            }
        }
    }

    /// Resolve `(row, col)`, creating it with `T::default()` if empty, and
    /// hand its arena slot to `updater`.
    pub fn set_value_special<F>(&mut self, row: i32, col: i32, updater: F)
    where
        T: Default,
        F: FnOnce(&mut Arena<T>, ArenaPos),
    {
        let cp = self.column_or_insert(col);
        let pos = match self.columns[cp].slot(row) {
            Slot::Occupied(pos) => pos,
            Slot::Vacant(vacancy) => {
                let pos = self.arena.append(T::default());
                self.columns[cp].occupy(vacancy, pos);
                pos
            }
        };
        updater(&mut self.arena, pos);
    }

    /// Resolve every cell of `from_row..=to_row` x `from_col..=to_col`,
    /// creating missing cells with `T::default()`, and call
    /// `updater(arena, pos, row, col)` for each.
    ///
    /// Cells are visited column by column, rows ascending. The row range is
    /// cut into nominal-page groups once; a group with no existing cells in
    /// a column is built as a fresh page in one pass. An inverted range
    /// does nothing.
    pub fn set_range_special<F>(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        mut updater: F,
    ) where
        T: Default,
        F: FnMut(&mut Arena<T>, ArenaPos, i32, i32),
    {
        if from_row > to_row || from_col > to_col {
            return;
        }
        let groups = page_groups(from_row, to_row);
        trace!(
            "set range rows={from_row}..={to_row} cols={from_col}..={to_col} groups={}",
            groups.len()
        );
        for col in from_col..=to_col {
            let cp = self.column_or_insert(col);
            let column = &mut self.columns[cp];
            let arena = &mut self.arena;
            for group in &groups {
                let (start, end) = (*group.start(), *group.end());
                if let Some(gap) = column.vacant_gap(start, end) {
                    let len = (end - start + 1) as usize;
                    let mut page = Page::new(page_of(start), 0, len);
                    for (i, row) in group.clone().enumerate() {
                        let pos = arena.append(T::default());
                        page.insert_entry(i, row, pos);
                        updater(arena, pos, row, col);
                    }
                    column.insert_page_at(gap, page);
                    continue;
                }
                for row in group.clone() {
                    let pos = match column.slot(row) {
                        Slot::Occupied(pos) => pos,
                        Slot::Vacant(vacancy) => {
                            let pos = arena.append(T::default());
                            column.occupy(vacancy, pos);
                            pos
                        }
                    };
                    updater(arena, pos, row, col);
                }
            }
        }
    }

    // ── Whole-store queries ────────────────────────────────────────

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.columns.iter().map(ColumnIndex::len).sum()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of arena slots ever used, including slots of deleted cells.
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// The value arena.
    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    /// Bounding box of populated cells, ignoring row 0 and column 0.
    pub fn dimension(&self) -> Option<CellRange> {
        let mut bounds: Option<CellRange> = None;
        for column in &self.columns {
            let col = i32::from(column.number());
            if col <= 0 {
                continue;
            }
            let Some((first, _)) = column.next_row_from(1) else {
                continue;
            };
            let last = column.last_row().unwrap_or(first);
            bounds = Some(match bounds {
                None => CellRange::new(first, col, last, col),
                Some(b) => CellRange::new(
                    b.from_row.min(first),
                    b.from_col,
                    b.to_row.max(last),
                    col,
                ),
            });
        }
        bounds
    }

    /// The first populated cell after `(row, col)` in row-major order.
    pub fn next_cell(&self, row: i32, col: i32) -> Option<(i32, i32)> {
        let mut best: Option<(i32, i32)> = None;
        for column in &self.columns {
            let c = i32::from(column.number());
            let from = if c > col { row } else { row + 1 };
            if let Some((r, _)) = column.next_row_from(from) {
                if best.map_or(true, |b| (r, c) < b) {
                    best = Some((r, c));
                }
            }
        }
        best
    }

    /// The last populated cell before `(row, col)` in row-major order.
    pub fn prev_cell(&self, row: i32, col: i32) -> Option<(i32, i32)> {
        let mut best: Option<(i32, i32)> = None;
        for column in &self.columns {
            let c = i32::from(column.number());
            let to = if c < col { row } else { row - 1 };
            if let Some((r, _)) = column.prev_row_to(to) {
                if best.map_or(true, |b| (r, c) > b) {
                    best = Some((r, c));
                }
            }
        }
        best
    }
}

/// Split `from..=to` at nominal page boundaries.
fn page_groups(from: i32, to: i32) -> SmallVec<[RangeInclusive<i32>; 4]> {
    let mut groups = SmallVec::new();
    let mut start = from;
    while start <= to {
        let end = (page_start(page_of(start)) + PAGE_SIZE - 1).min(to);
        groups.push(start..=end);
        start = end + 1;
    }
    groups
}

impl<T> Default for CellStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CellStore<T> {
    /// Deep copy with a compacted arena: only live values are copied, in
    /// column then row order.
    fn clone(&self) -> Self {
        let mut arena = Arena::new();
        let mut columns = self.columns.clone();
        for column in &mut columns {
            for page in column.pages_mut() {
                page.remap_positions(|pos| arena.append(self.arena.get(pos).clone()));
            }
        }
        debug!(
            "clone store columns={} cells={} arena_before={}",
            columns.len(),
            arena.len(),
            self.arena.len()
        );
        Self {
            columns,
            arena,
            config: self.config.clone(),
            column_hint: AtomicUsize::new(0),
        }
    }
}

impl<T> CellRead<T> for CellStore<T> {
    fn get(&self, row: i32, col: i32) -> Option<&T> {
        CellStore::get(self, row, col)
    }

    fn exists(&self, row: i32, col: i32) -> bool {
        CellStore::exists(self, row, col)
    }

    fn len(&self) -> usize {
        CellStore::len(self)
    }

    fn dimension(&self) -> Option<CellRange> {
        CellStore::dimension(self)
    }

    fn for_each_cell(&self, f: &mut dyn FnMut(i32, i32, &T)) {
        for (row, col, value) in self.cells() {
            f(row, col, value);
        }
    }
}

impl<T> CellWrite<T> for CellStore<T> {
    fn set(&mut self, row: i32, col: i32, value: T) {
        CellStore::set(self, row, col, value);
    }

    fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        CellStore::insert(self, from_row, from_col, rows, cols);
    }

    fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        CellStore::delete(self, from_row, from_col, rows, cols, shift);
    }
}
