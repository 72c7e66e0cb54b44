//! Per-column page index.
//!
//! A [`ColumnIndex`] keeps its pages ordered by the absolute rows they
//! cover. Page numbers follow the rows they were created for, but after
//! structural edits two neighbouring pages may share a number; ordering and
//! lookup therefore always go through `min_row`/`max_row`, never the number
//! alone.

use std::sync::atomic::{AtomicUsize, Ordering};

use gridstore_arena::ArenaPos;
use gridstore_core::limits::{PAGE_SIZE, PAGE_SIZE_MAX};
use log::{debug, trace};

use crate::page::{Page, LOCAL_SPAN_MAX};

/// Where a row lives, or would live, in a column.
#[derive(Debug)]
pub(crate) enum Slot {
    /// The row holds a value at this arena position.
    Occupied(ArenaPos),
    /// The row is empty.
    Vacant(Vacancy),
}

/// A resolved empty row, ready for [`ColumnIndex::occupy`].
#[derive(Debug)]
pub(crate) struct Vacancy {
    row: i32,
    page: Result<usize, usize>,
    index: usize,
}

/// The ordered page list of one column.
#[derive(Debug)]
pub struct ColumnIndex {
    number: i16,
    pages: Vec<Page>,
    page_capacity: usize,
    hint: AtomicUsize,
}

impl Clone for ColumnIndex {
    fn clone(&self) -> Self {
        Self {
            number: self.number,
            pages: self.pages.clone(),
            page_capacity: self.page_capacity,
            hint: AtomicUsize::new(self.hint.load(Ordering::Relaxed)),
        }
    }
}

impl ColumnIndex {
    pub(crate) fn new(number: i16, pages_per_column: usize, page_capacity: usize) -> Self {
        Self {
            number,
            pages: Vec::with_capacity(pages_per_column),
            page_capacity,
            hint: AtomicUsize::new(0),
        }
    }

    /// Column number.
    pub fn number(&self) -> i16 {
        self.number
    }

    pub(crate) fn shift_number(&mut self, delta: i32) {
        self.number = (i32::from(self.number) + delta) as i16;
    }

    /// Pages in ascending row order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of populated rows.
    pub fn len(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Whether the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// First populated row.
    pub fn first_row(&self) -> Option<i32> {
        self.pages.first().map(Page::min_row)
    }

    /// Last populated row.
    pub fn last_row(&self) -> Option<i32> {
        self.pages.last().map(Page::max_row)
    }

    // ── Lookup ─────────────────────────────────────────────────────

    /// Locate the page covering `row`.
    ///
    /// `Ok(i)` when `pages[i].min_row() <= row <= pages[i].max_row()`.
    /// Otherwise `Err(i)`: every page before `i` ends before `row` and every
    /// page from `i` on starts after it. Tries the last resolved page and
    /// its successor before falling back to a binary search.
    pub fn position_of(&self, row: i32) -> Result<usize, usize> {
        let len = self.pages.len();
        let hint = self.hint.load(Ordering::Relaxed);
        if hint < len {
            let page = &self.pages[hint];
            if row >= page.min_row() {
                if row <= page.max_row() {
                    return Ok(hint);
                }
                match self.pages.get(hint + 1) {
                    None => return Err(len),
                    Some(next) if row < next.min_row() => return Err(hint + 1),
                    Some(next) if row <= next.max_row() => {
                        self.hint.store(hint + 1, Ordering::Relaxed);
                        return Ok(hint + 1);
                    }
                    Some(_) => {}
                }
            }
        }
        let found = self.pages.binary_search_by(|page| {
            if page.max_row() < row {
                std::cmp::Ordering::Less
            } else if page.min_row() > row {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        if let Ok(i) = found {
            self.hint.store(i, Ordering::Relaxed);
        }
        found
    }

    /// Arena position stored for `row`.
    pub fn locate(&self, row: i32) -> Option<ArenaPos> {
        let p = self.position_of(row).ok()?;
        let page = &self.pages[p];
        page.position_of_row(row).ok().map(|i| page.pos_at(i))
    }

    pub(crate) fn slot(&self, row: i32) -> Slot {
        match self.position_of(row) {
            Ok(p) => match self.pages[p].position_of_row(row) {
                Ok(i) => Slot::Occupied(self.pages[p].pos_at(i)),
                Err(index) => Slot::Vacant(Vacancy {
                    row,
                    page: Ok(p),
                    index,
                }),
            },
            Err(gap) => Slot::Vacant(Vacancy {
                row,
                page: Err(gap),
                index: 0,
            }),
        }
    }

    /// First populated row `>= row`, with its arena position.
    pub fn next_row_from(&self, row: i32) -> Option<(i32, ArenaPos)> {
        let p = self.pages.partition_point(|page| page.max_row() < row);
        let page = self.pages.get(p)?;
        let i = page.lower_bound(row);
        Some((page.row_at(i), page.pos_at(i)))
    }

    /// Last populated row `<= row`, with its arena position.
    pub fn prev_row_to(&self, row: i32) -> Option<(i32, ArenaPos)> {
        let p = self.pages.partition_point(|page| page.min_row() <= row);
        let page = self.pages.get(p.checked_sub(1)?)?;
        let i = match page.position_of_row(row) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        Some((page.row_at(i), page.pos_at(i)))
    }

    /// Iterate `(row, pos)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, ArenaPos)> + '_ {
        self.pages.iter().flat_map(Page::iter)
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Store `pos` at the empty row described by `vacancy`.
    ///
    /// A row inside an existing page's range goes into that page. A row in
    /// the gap between pages joins the previous page if it lies within that
    /// page's nominal span, else the next page if it is at or after that
    /// page's base, else a new page.
    pub(crate) fn occupy(&mut self, vacancy: Vacancy, pos: ArenaPos) {
        let Vacancy { row, page, index } = vacancy;
        match page {
            Ok(p) => self.insert_into(p, index, row, pos),
            Err(gap) => {
                if gap > 0 && row < self.pages[gap - 1].base() + PAGE_SIZE {
                    let at = self.pages[gap - 1].len();
                    self.insert_into(gap - 1, at, row, pos);
                } else if gap < self.pages.len() && self.pages[gap].base() <= row {
                    self.insert_into(gap, 0, row, pos);
                } else {
                    trace!(
                        "new page column={} page={} row={row}",
                        self.number,
                        gridstore_core::limits::page_of(row)
                    );
                    self.insert_page_at(gap, Page::with_entry(row, pos, self.page_capacity));
                    self.hint.store(gap, Ordering::Relaxed);
                }
            }
        }
    }

    /// Store `pos` at `row`, which must be empty.
    pub(crate) fn insert_row(&mut self, row: i32, pos: ArenaPos) {
        match self.slot(row) {
            Slot::Vacant(vacancy) => self.occupy(vacancy, pos),
            Slot::Occupied(existing) => panic!(
                "column {} row {row} already holds {existing}; cannot store {pos}",
                self.number
            ),
        }
    }

    fn insert_into(&mut self, p: usize, index: usize, row: i32, pos: ArenaPos) {
        if !self.pages[p].is_full() {
            self.pages[p].insert_entry(index, row, pos);
            self.hint.store(p, Ordering::Relaxed);
            return;
        }
        trace!("insert into full page column={} page={}", self.number, self.pages[p].number());
        match self.pages[p].split() {
            Some(upper) => {
                debug!(
                    "split page column={} page={} lower_len={} upper_len={}",
                    self.number,
                    self.pages[p].number(),
                    self.pages[p].len(),
                    upper.len()
                );
                self.insert_page_at(p + 1, upper);
            }
            None => panic!(
                "full page {} in column {} has no split point",
                self.pages[p].number(),
                self.number
            ),
        }
        self.insert_row(row, pos);
    }

    /// Gap index for `from..=to` if no page overlaps those rows.
    pub(crate) fn vacant_gap(&self, from: i32, to: i32) -> Option<usize> {
        let gap = self.pages.partition_point(|page| page.max_row() < from);
        match self.pages.get(gap) {
            Some(page) if page.min_row() <= to => None,
            _ => Some(gap),
        }
    }

    pub(crate) fn insert_page_at(&mut self, at: usize, page: Page) {
        self.pages.insert(at, page);
    }

    pub(crate) fn remove_page_at(&mut self, at: usize) -> Page {
        self.pages.remove(at)
    }

    /// Shift every row `>= from_row` down by `rows`.
    pub(crate) fn insert_rows(&mut self, from_row: i32, rows: i32) {
        debug_assert!(rows > 0);
        let first = self.pages.partition_point(|page| page.max_row() < from_row);
        if first == self.pages.len() {
            return;
        }
        let mut shift_from = first;
        if self.pages[first].min_row() < from_row {
            let at = self.pages[first].lower_bound(from_row);
            if rows >= PAGE_SIZE {
                let mut tail = self.pages[first].split_off(at);
                tail.shift_base(rows);
                self.insert_page_at(first + 1, tail);
                shift_from = first + 2;
            } else {
                self.pages[first].adjust_offset(at, rows);
                shift_from = first + self.fit_page(first);
            }
        }
        for page in &mut self.pages[shift_from..] {
            page.shift_base(rows);
        }
        self.hint.store(0, Ordering::Relaxed);
    }

    /// Split page `p` until its local rows settle below the span limit.
    /// Returns how many pages now hold its entries.
    fn fit_page(&mut self, p: usize) -> usize {
        let mut at = p;
        loop {
            let page = &mut self.pages[at];
            if page.max_local() < LOCAL_SPAN_MAX {
                break;
            }
            page.normalize();
            if page.max_local() < LOCAL_SPAN_MAX {
                break;
            }
            let Some(upper) = page.split() else { break };
            debug!(
                "split widened page column={} page={} upper_len={}",
                self.number,
                page.number(),
                upper.len()
            );
            self.pages.insert(at + 1, upper);
            at += 1;
        }
        at - p + 1
    }

    /// Remove rows `from_row..from_row + rows`. With `shift`, rows after the
    /// removed band move up by `rows`.
    pub(crate) fn delete_rows(&mut self, from_row: i32, rows: i32, shift: bool) {
        debug_assert!(rows > 0);
        let to_row = from_row.saturating_add(rows);
        let first = self.pages.partition_point(|page| page.max_row() < from_row);
        let mut i = first;
        while i < self.pages.len() && self.pages[i].min_row() < to_row {
            let page = &mut self.pages[i];
            let lo = page.lower_bound(from_row);
            let hi = page.lower_bound(to_row);
            page.remove_entries(lo..hi);
            if shift && !page.is_empty() {
                if lo == 0 {
                    page.shift_base(-rows);
                } else {
                    page.adjust_offset(lo, -rows);
                }
            }
            i += 1;
        }
        if shift {
            for page in &mut self.pages[i..] {
                page.shift_base(-rows);
            }
        }
        let before = self.pages.len();
        self.pages.retain(|page| !page.is_empty());
        let dropped = before - self.pages.len();
        if dropped > 0 {
            trace!("dropped empty pages column={} count={dropped}", self.number);
        }
        for page in &mut self.pages {
            if page.base() < 0 {
                page.normalize();
            }
        }
        self.merge_adjacent(first.saturating_sub(1), first + 1);
        self.hint.store(0, Ordering::Relaxed);
    }

    /// Merge neighbouring pages between positions `from` and `to` whose
    /// combined entries fit one page and whose rows span less than the
    /// entry cap.
    pub(crate) fn merge_adjacent(&mut self, from: usize, to: usize) {
        let mut k = from;
        while k <= to && k + 1 < self.pages.len() {
            let (lower, upper) = (&self.pages[k], &self.pages[k + 1]);
            let fits = lower.len() + upper.len() <= PAGE_SIZE_MAX as usize
                && upper.max_row() - lower.min_row() < PAGE_SIZE_MAX;
            if !fits {
                k += 1;
                continue;
            }
            let upper = self.remove_page_at(k + 1);
            let lower = &mut self.pages[k];
            debug!(
                "merge pages column={} lower={} upper={} len={}",
                self.number,
                lower.number(),
                upper.number(),
                lower.len() + upper.len()
            );
            lower.normalize();
            lower.absorb(upper);
        }
    }

    pub(crate) fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }
}
