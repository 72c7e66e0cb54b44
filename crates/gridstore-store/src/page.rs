//! Pages: sorted runs of cell entries covering a stretch of one column.
//!
//! A [`Page`] maps local row offsets to arena positions. Its base row is
//! `(number << PAGE_BITS) + offset`, and the absolute row of an entry is
//! `base + entry.local_row`. Shifting a whole page therefore only touches
//! `number`/`offset`; shifting part of a page rewrites the affected entries'
//! local rows in one pass.
//!
//! Invariants kept by every method here (checked by
//! [`CellStore::validate`](crate::CellStore::validate)):
//!
//! - entries are strictly ascending by `local_row`, all `>= 0`;
//! - `offset` is normalised into `0..PAGE_SIZE`;
//! - the widest local row stays below [`LOCAL_SPAN_MAX`] plus one shift of
//!   less than `PAGE_SIZE`, so it always fits `i16`.

use gridstore_arena::ArenaPos;
use gridstore_core::limits::{page_of, page_start, PAGE_SIZE, PAGE_SIZE_MAX};

/// Widest local row a page is allowed to settle at.
///
/// A partial shift may push entries past this; the owning column then
/// splits the page back under it.
pub(crate) const LOCAL_SPAN_MAX: i32 = 1 << 14;

/// One populated cell within a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEntry {
    pub(crate) local_row: i16,
    pub(crate) pos: i32,
}

impl CellEntry {
    /// Row offset from the owning page's base row.
    pub fn local_row(&self) -> i16 {
        self.local_row
    }

    /// Arena position of the cell's value.
    pub fn pos(&self) -> ArenaPos {
        ArenaPos::from_raw(self.pos)
    }
}

/// A sorted, sparse run of cell entries within one column.
#[derive(Clone, Debug)]
pub struct Page {
    number: i16,
    offset: i32,
    entries: Vec<CellEntry>,
}

impl Page {
    /// An empty page based at `page_start(number) + offset`.
    pub(crate) fn new(number: i16, offset: i32, capacity: usize) -> Self {
        let mut page = Self {
            number,
            offset: 0,
            entries: Vec::with_capacity(capacity.min(PAGE_SIZE_MAX as usize)),
        };
        page.set_base(page_start(number) + offset);
        page
    }

    /// A page holding a single entry, based at the nominal page of `row`.
    pub(crate) fn with_entry(row: i32, pos: ArenaPos, capacity: usize) -> Self {
        let number = page_of(row);
        let mut page = Self::new(number, 0, capacity);
        page.entries.push(CellEntry {
            local_row: (row - page_start(number)) as i16,
            pos: pos.raw(),
        });
        page
    }

    /// Page number (upper bits of the base row).
    pub fn number(&self) -> i16 {
        self.number
    }

    /// Offset of the base row from `number << PAGE_BITS`.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Absolute row that local row 0 maps to.
    pub fn base(&self) -> i32 {
        page_start(self.number) + self.offset
    }

    /// Entries in ascending row order.
    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another entry would exceed the hard cap.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= PAGE_SIZE_MAX as usize
    }

    /// Absolute row of the entry at `index`.
    pub fn row_at(&self, index: usize) -> i32 {
        self.base() + i32::from(self.entries[index].local_row)
    }

    /// Arena position of the entry at `index`.
    pub fn pos_at(&self, index: usize) -> ArenaPos {
        ArenaPos::from_raw(self.entries[index].pos)
    }

    /// First populated row.
    ///
    /// # Panics
    ///
    /// Panics on an empty page; columns never keep empty pages.
    pub fn min_row(&self) -> i32 {
        self.row_at(0)
    }

    /// Last populated row.
    ///
    /// # Panics
    ///
    /// Panics on an empty page; columns never keep empty pages.
    pub fn max_row(&self) -> i32 {
        self.row_at(self.entries.len() - 1)
    }

    /// Largest local row, or 0 for an empty page.
    pub(crate) fn max_local(&self) -> i32 {
        self.entries.last().map_or(0, |e| i32::from(e.local_row))
    }

    /// Binary search for a local row.
    ///
    /// `Ok(index)` if an entry has that local row, otherwise
    /// `Err(insertion_point)`.
    pub fn position_of(&self, local: i32) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|e| i32::from(e.local_row).cmp(&local))
    }

    /// Binary search for an absolute row.
    pub fn position_of_row(&self, row: i32) -> Result<usize, usize> {
        self.position_of(row - self.base())
    }

    /// Index of the first entry whose row is `>= row`.
    pub(crate) fn lower_bound(&self, row: i32) -> usize {
        match self.position_of_row(row) {
            Ok(i) | Err(i) => i,
        }
    }

    /// Insert an entry at `index`, which must keep the entries sorted.
    ///
    /// Grows the backing storage by doubling, up to the hard cap. The caller
    /// splits a full page before inserting into it.
    pub(crate) fn insert_entry(&mut self, index: usize, row: i32, pos: ArenaPos) {
        assert!(
            !self.is_full(),
            "insert into full page {} (len {})",
            self.number,
            self.entries.len()
        );
        if self.entries.len() == self.entries.capacity() {
            let grow = self.entries.capacity().max(1);
            let room = PAGE_SIZE_MAX as usize - self.entries.len();
            self.entries.reserve_exact(grow.min(room));
        }
        let local = row - self.base();
        debug_assert!(local >= 0 && local <= i32::from(i16::MAX));
        self.entries.insert(
            index,
            CellEntry {
                local_row: local as i16,
                pos: pos.raw(),
            },
        );
    }

    /// Drop the entries in `range` (by index).
    pub(crate) fn remove_entries(&mut self, range: std::ops::Range<usize>) {
        self.entries.drain(range);
    }

    /// Shift every entry from `from` onwards by `delta` rows.
    pub(crate) fn adjust_offset(&mut self, from: usize, delta: i32) {
        for entry in &mut self.entries[from..] {
            let local = i32::from(entry.local_row) + delta;
            debug_assert!(local >= 0 && local <= i32::from(i16::MAX));
            entry.local_row = local as i16;
        }
    }

    /// Move the whole page by `delta` rows without touching its entries.
    pub(crate) fn shift_base(&mut self, delta: i32) {
        self.set_base(self.base() + delta);
    }

    /// Re-express the entries relative to `new_base`; absolute rows are
    /// unchanged.
    pub(crate) fn rebase(&mut self, new_base: i32) {
        let delta = self.base() - new_base;
        if delta != 0 {
            self.adjust_offset(0, delta);
        }
        self.set_base(new_base);
    }

    /// Rebase onto the nominal page of the first entry, folding the offset
    /// into the entries. Afterwards `offset == 0` and the first local row
    /// is below `PAGE_SIZE`.
    pub(crate) fn normalize(&mut self) {
        if let Some(first) = self.entries.first() {
            let min_row = self.base() + i32::from(first.local_row);
            self.rebase(page_start(page_of(min_row)));
        }
    }

    /// Split at the first entry past the nominal span.
    ///
    /// The page is normalised first. Entries with local row `<= PAGE_SIZE`
    /// stay; the rest move to a new page numbered `number + 1` with their
    /// local rows rebased. Returns `None` when every entry already fits the
    /// nominal span.
    pub(crate) fn split(&mut self) -> Option<Page> {
        self.normalize();
        let at = self
            .entries
            .partition_point(|e| i32::from(e.local_row) <= PAGE_SIZE);
        if at == self.entries.len() {
            return None;
        }
        debug_assert!(at > 0, "normalised page must keep its first entry");
        let mut upper = Page {
            number: self.number + 1,
            offset: 0,
            entries: self.entries.split_off(at),
        };
        upper.adjust_offset(0, -PAGE_SIZE);
        Some(upper)
    }

    /// Move the entries from `index` onwards into a new page with the same
    /// base.
    pub(crate) fn split_off(&mut self, index: usize) -> Page {
        Page {
            number: self.number,
            offset: self.offset,
            entries: self.entries.split_off(index),
        }
    }

    /// Append every entry of `other`, which must lie entirely after this
    /// page's last row.
    pub(crate) fn absorb(&mut self, other: Page) {
        let delta = other.base() - self.base();
        self.entries.reserve(other.entries.len());
        self.entries.extend(other.entries.into_iter().map(|e| {
            let local = i32::from(e.local_row) + delta;
            debug_assert!(local >= 0 && local <= i32::from(i16::MAX));
            CellEntry {
                local_row: local as i16,
                pos: e.pos,
            }
        }));
    }

    /// Iterate `(row, pos)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, ArenaPos)> + '_ {
        let base = self.base();
        self.entries
            .iter()
            .map(move |e| (base + i32::from(e.local_row), ArenaPos::from_raw(e.pos)))
    }

    /// Rewrite every arena position through `remap`.
    pub(crate) fn remap_positions(&mut self, mut remap: impl FnMut(ArenaPos) -> ArenaPos) {
        for entry in &mut self.entries {
            entry.pos = remap(ArenaPos::from_raw(entry.pos)).raw();
        }
    }

    fn set_base(&mut self, base: i32) {
        self.number = base.div_euclid(PAGE_SIZE) as i16;
        self.offset = base.rem_euclid(PAGE_SIZE);
    }
}
