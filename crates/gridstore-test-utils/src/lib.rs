//! Test utilities for gridstore development.
//!
//! Provides [`ReferenceGrid`], a `BTreeMap` model of a sparse grid that
//! implements [`CellRead`] and [`CellWrite`] with the same shift rules as
//! the paged store, plus random operation [`fixtures`] and
//! [`compliance`] assertions that compare any two grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

use std::collections::BTreeMap;

use gridstore_core::limits::MAX_ROWS;
use gridstore_core::{CellRange, CellRead, CellWrite};

pub use compliance::assert_store_matches;
pub use fixtures::{random_ops, Op, OpBounds};

/// Obviously-correct model of a sparse grid.
///
/// Keys are `(row, col)`, so map order is row-major order. Every edit is a
/// full rebuild of the affected keys; fine for tests, useless for anything
/// else.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceGrid<T> {
    cells: BTreeMap<(i32, i32), T>,
}

impl<T> ReferenceGrid<T> {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// `(row, col, value)` triples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> {
        self.cells.iter().map(|(&(r, c), v)| (r, c, v))
    }

    fn remap(&mut self, mut f: impl FnMut(i32, i32) -> Option<(i32, i32)>) {
        let old = std::mem::take(&mut self.cells);
        self.cells = old
            .into_iter()
            .filter_map(|((r, c), v)| f(r, c).map(|key| (key, v)))
            .collect();
    }
}

impl<T> Default for ReferenceGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CellRead<T> for ReferenceGrid<T> {
    fn get(&self, row: i32, col: i32) -> Option<&T> {
        self.cells.get(&(row, col))
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn dimension(&self) -> Option<CellRange> {
        self.cells
            .keys()
            .filter(|&&(r, c)| r > 0 && c > 0)
            .fold(None, |acc: Option<CellRange>, &(r, c)| {
                Some(match acc {
                    None => CellRange::new(r, c, r, c),
                    Some(b) => CellRange::new(
                        b.from_row.min(r),
                        b.from_col.min(c),
                        b.to_row.max(r),
                        b.to_col.max(c),
                    ),
                })
            })
    }

    fn for_each_cell(&self, f: &mut dyn FnMut(i32, i32, &T)) {
        for (&(r, c), v) in &self.cells {
            f(r, c, v);
        }
    }
}

impl<T> CellWrite<T> for ReferenceGrid<T> {
    fn set(&mut self, row: i32, col: i32, value: T) {
        self.cells.insert((row, col), value);
    }

    fn insert(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32) {
        if cols > 0 {
            self.remap(|r, c| Some((r, if c >= from_col { c + cols } else { c })));
        } else if rows > 0 {
            self.remap(|r, c| Some((if r >= from_row { r + rows } else { r }, c)));
        }
    }

    fn delete(&mut self, from_row: i32, from_col: i32, rows: i32, cols: i32, shift: bool) {
        if rows <= 0 || cols <= 0 {
            return;
        }
        let to_col = from_col.saturating_add(cols);
        if from_row == 0 && rows >= MAX_ROWS {
            self.remap(|r, c| {
                if c >= from_col && c < to_col {
                    None
                } else if shift && c >= to_col {
                    Some((r, c - cols))
                } else {
                    Some((r, c))
                }
            });
            return;
        }
        let to_row = from_row.saturating_add(rows);
        self.remap(|r, c| {
            if c < from_col || c >= to_col {
                Some((r, c))
            } else if r >= from_row && r < to_row {
                None
            } else if shift && r >= to_row {
                Some((r - rows, c))
            } else {
                Some((r, c))
            }
        });
    }
}
