//! Row-major range enumeration.
//!
//! [`CellsEnumerator`] walks the populated cells of a rectangle, rows
//! ascending and columns ascending within a row. Moving forward merges the
//! per-column row streams; every column in range keeps its next candidate
//! row, so a step costs one page lookup in the column just consumed plus a
//! scan of the candidates. Moving backward searches each column directly.

use std::ops::Range;

use gridstore_arena::ArenaPos;
use smallvec::SmallVec;

use crate::store::CellStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Start,
    At { row: i32, cp: usize, pos: ArenaPos },
    End,
}

/// Cursor over the populated cells of a rectangle.
///
/// Borrows the store, so it cannot outlive a structural edit.
#[derive(Debug)]
pub struct CellsEnumerator<'a, T> {
    store: &'a CellStore<T>,
    min_row: i32,
    max_row: i32,
    cols: Range<usize>,
    cursor: Cursor,
    /// Next candidate `(row, pos)` per column position, relative to the
    /// cursor. Only meaningful while `ahead_valid`.
    ahead: SmallVec<[Option<(i32, ArenaPos)>; 8]>,
    ahead_valid: bool,
}

impl<'a, T> CellsEnumerator<'a, T> {
    /// Enumerate `from_row..=to_row` x `from_col..=to_col`, with columns
    /// given as column numbers.
    pub fn new(store: &'a CellStore<T>, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        let start = match store.column_position(from_col) {
            Ok(i) | Err(i) => i,
        };
        let end = match store.column_position(to_col) {
            Ok(i) => i + 1,
            Err(i) => i,
        };
        Self::by_position(store, from_row, to_row, start..end.max(start))
    }

    /// Enumerate rows `min_row..=max_row` of the columns at positions `cols`
    /// in the store's column array.
    pub fn by_position(store: &'a CellStore<T>, min_row: i32, max_row: i32, cols: Range<usize>) -> Self {
        let end = cols.end.min(store.columns().len());
        let cols = cols.start.min(end)..end;
        Self {
            store,
            min_row,
            max_row,
            cols,
            cursor: Cursor::Start,
            ahead: SmallVec::new(),
            ahead_valid: false,
        }
    }

    /// Enumerate every cell in the store.
    pub fn all(store: &'a CellStore<T>) -> Self {
        Self::by_position(store, 0, i32::MAX, 0..store.columns().len())
    }

    /// Row of the current cell.
    pub fn row(&self) -> Option<i32> {
        match self.cursor {
            Cursor::At { row, .. } => Some(row),
            _ => None,
        }
    }

    /// Column number of the current cell.
    pub fn column(&self) -> Option<i32> {
        match self.cursor {
            Cursor::At { cp, .. } => Some(i32::from(self.store.columns()[cp].number())),
            _ => None,
        }
    }

    /// Value of the current cell.
    pub fn value(&self) -> Option<&'a T> {
        match self.cursor {
            Cursor::At { pos, .. } => Some(self.store.arena().get(pos)),
            _ => None,
        }
    }

    /// `(row, column, value)` of the current cell.
    pub fn current(&self) -> Option<(i32, i32, &'a T)> {
        Some((self.row()?, self.column()?, self.value()?))
    }

    /// Move to the start, before the first cell.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Start;
        self.ahead_valid = false;
    }

    /// Advance to the next cell. Returns `false` once past the last one.
    pub fn next_cell(&mut self) -> bool {
        match self.cursor {
            Cursor::End => return false,
            Cursor::Start => self.refill(None),
            Cursor::At { row, cp, .. } => {
                if self.ahead_valid {
                    let column = &self.store.columns()[cp];
                    self.ahead[cp - self.cols.start] = column.next_row_from(row + 1);
                } else {
                    self.refill(Some((row, cp)));
                }
            }
        }
        let mut best: Option<(i32, usize, ArenaPos)> = None;
        for (i, candidate) in self.ahead.iter().enumerate() {
            if let Some((row, pos)) = *candidate {
                if best.map_or(true, |(r, _, _)| row < r) {
                    best = Some((row, self.cols.start + i, pos));
                }
            }
        }
        self.cursor = match best {
            Some((row, cp, pos)) if row <= self.max_row => Cursor::At { row, cp, pos },
            _ => Cursor::End,
        };
        matches!(self.cursor, Cursor::At { .. })
    }

    /// Step back to the previous cell. Returns `false` once before the
    /// first one.
    pub fn previous(&mut self) -> bool {
        let (row, cp) = match self.cursor {
            Cursor::Start => return false,
            Cursor::End => (self.max_row, self.cols.end),
            Cursor::At { row, cp, .. } => (row, cp),
        };
        self.ahead_valid = false;
        let mut best: Option<(i32, usize, ArenaPos)> = None;
        for c in self.cols.clone() {
            // From End, `cp == cols.end`, so every column searches `max_row`.
            let to = if c < cp { row } else { row - 1 };
            let column = &self.store.columns()[c];
            if let Some((r, pos)) = column.prev_row_to(to) {
                if r >= self.min_row && best.map_or(true, |(br, _, _)| r >= br) {
                    best = Some((r, c, pos));
                }
            }
        }
        self.cursor = match best {
            Some((row, cp, pos)) => Cursor::At { row, cp, pos },
            None => Cursor::Start,
        };
        matches!(self.cursor, Cursor::At { .. })
    }

    /// Recompute every column's next candidate after `after`, or from
    /// `min_row` when `None`.
    fn refill(&mut self, after: Option<(i32, usize)>) {
        let columns = &self.store.columns()[self.cols.clone()];
        self.ahead.clear();
        for (i, column) in columns.iter().enumerate() {
            let from = match after {
                None => self.min_row,
                Some((row, cp)) if self.cols.start + i > cp => row,
                Some((row, _)) => row + 1,
            };
            self.ahead.push(column.next_row_from(from.max(self.min_row)));
        }
        self.ahead_valid = true;
    }
}

impl<'a, T> Iterator for CellsEnumerator<'a, T> {
    type Item = (i32, i32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_cell() {
            self.current()
        } else {
            None
        }
    }
}

impl<T> CellStore<T> {
    /// Every populated cell in row-major order.
    pub fn cells(&self) -> CellsEnumerator<'_, T> {
        CellsEnumerator::all(self)
    }

    /// Populated cells of `from_row..=to_row` x `from_col..=to_col` in
    /// row-major order.
    pub fn cells_in(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> CellsEnumerator<'_, T> {
        CellsEnumerator::new(self, from_row, from_col, to_row, to_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(cells: &[(i32, i32)]) -> CellStore<(i32, i32)> {
        let mut store = CellStore::new();
        for &(r, c) in cells {
            store.set(r, c, (r, c));
        }
        store
    }

    fn walk<T>(mut e: CellsEnumerator<'_, T>) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        while e.next_cell() {
            out.push((e.row().unwrap(), e.column().unwrap()));
        }
        out
    }

    fn walk_back<T>(mut e: CellsEnumerator<'_, T>) -> Vec<(i32, i32)> {
        while e.next_cell() {}
        let mut out = Vec::new();
        while e.previous() {
            out.push((e.row().unwrap(), e.column().unwrap()));
        }
        out
    }

    #[test]
    fn column_scenario_yields_rows_in_order() {
        let mut store = CellStore::new();
        store.set(10, 5, "X");
        store.set(2000, 5, "Y");
        let seen: Vec<_> = store.cells_in(0, 5, 3000, 5).collect();
        assert_eq!(seen, vec![(10, 5, &"X"), (2000, 5, &"Y")]);
    }

    #[test]
    fn row_major_order_wraps_rows() {
        let store = store_with(&[(2, 1), (1, 3), (1, 1), (3, 2), (2, 3)]);
        assert_eq!(
            walk(store.cells()),
            vec![(1, 1), (1, 3), (2, 1), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn bounds_are_respected() {
        let store = store_with(&[(1, 1), (5, 2), (5, 4), (6, 3), (9, 3), (5, 9)]);
        assert_eq!(walk(store.cells_in(5, 2, 8, 4)), vec![(5, 2), (5, 4), (6, 3)]);
        assert_eq!(walk(store.cells_in(5, 5, 8, 8)), vec![]);
        assert_eq!(walk(store.cells_in(9, 1, 5, 9)), vec![]);
    }

    #[test]
    fn previous_reverses_forward_order() {
        let store = store_with(&[(1, 1), (1, 3), (2, 2), (2, 3), (4, 1), (1500, 2)]);
        let forward = walk(store.cells_in(1, 1, 2000, 3));
        let mut backward = walk_back(store.cells_in(1, 1, 2000, 3));
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 6);
    }

    #[test]
    fn previous_respects_min_row() {
        let store = store_with(&[(1, 1), (3, 1), (3, 2)]);
        assert_eq!(walk_back(store.cells_in(2, 1, 10, 2)), vec![(3, 2), (3, 1)]);
    }

    #[test]
    fn mixed_direction_steps() {
        let store = store_with(&[(1, 1), (1, 2), (2, 1)]);
        let mut e = store.cells();
        assert!(e.next_cell());
        assert!(e.next_cell());
        assert_eq!(e.current().map(|c| (c.0, c.1)), Some((1, 2)));
        assert!(e.previous());
        assert_eq!((e.row(), e.column()), (Some(1), Some(1)));
        assert!(e.next_cell());
        assert!(e.next_cell());
        assert_eq!((e.row(), e.column()), (Some(2), Some(1)));
        assert!(!e.next_cell());
        assert!(!e.next_cell());
        assert_eq!(e.row(), None);
    }

    #[test]
    fn previous_before_first_stops() {
        let store = store_with(&[(1, 1)]);
        let mut e = store.cells();
        assert!(!e.previous());
        assert!(e.next_cell());
        assert!(!e.previous());
        assert!(e.value().is_none());
        assert!(e.next_cell());
        assert_eq!(e.value(), Some(&(1, 1)));
    }

    #[test]
    fn reset_restarts() {
        let store = store_with(&[(1, 1), (2, 2)]);
        let mut e = store.cells();
        let first: Vec<_> = e.by_ref().map(|(r, c, _)| (r, c)).collect();
        e.reset();
        let second: Vec<_> = e.map(|(r, c, _)| (r, c)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn by_position_clamps_column_range() {
        let store = store_with(&[(1, 4), (1, 8)]);
        assert_eq!(
            walk(CellsEnumerator::by_position(&store, 0, 10, 1..99)),
            vec![(1, 8)]
        );
        assert_eq!(walk(CellsEnumerator::by_position(&store, 0, 10, 5..9)), vec![]);
    }

    #[test]
    fn empty_store_enumerates_nothing() {
        let store: CellStore<u8> = CellStore::new();
        assert_eq!(store.cells().count(), 0);
        let mut e = store.cells();
        assert!(!e.previous());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        proptest! {
            #[test]
            fn enumeration_matches_filtered_model(
                cells in proptest::collection::btree_set((0i32..3000, 0i32..12), 0..150),
                from_row in 0i32..3000,
                rows in 0i32..3000,
                from_col in 0i32..12,
                cols in 0i32..12,
            ) {
                let mut store = CellStore::new();
                for &(r, c) in &cells {
                    store.set(r, c, ());
                }
                let (to_row, to_col) = (from_row + rows, from_col + cols);
                let expected: BTreeSet<(i32, i32)> = cells
                    .iter()
                    .copied()
                    .filter(|&(r, c)| r >= from_row && r <= to_row && c >= from_col && c <= to_col)
                    .collect();
                let forward = walk(store.cells_in(from_row, from_col, to_row, to_col));
                prop_assert_eq!(&forward, &expected.into_iter().collect::<Vec<_>>());
                let mut backward = walk_back(store.cells_in(from_row, from_col, to_row, to_col));
                backward.reverse();
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
