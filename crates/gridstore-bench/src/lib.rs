//! Benchmark profiles for the gridstore cell store.
//!
//! Provides pre-filled stores so each benchmark measures one operation:
//!
//! - [`column_profile`]: dense top-down columns, the common sheet shape
//! - [`scattered_profile`]: cells spread over a wide window
//! - [`random_cells`]: deterministic coordinates via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridstore_store::CellStore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `cols` columns, each holding rows `0..rows`.
pub fn column_profile(rows: i32, cols: i32) -> CellStore<f64> {
    let mut store = CellStore::new();
    for col in 1..=cols {
        for row in 0..rows {
            store.set(row, col, f64::from(row));
        }
    }
    store
}

/// `count` cells at seeded random coordinates inside `max_row` x `max_col`.
pub fn scattered_profile(count: usize, max_row: i32, max_col: i32, seed: u64) -> CellStore<f64> {
    let mut store = CellStore::new();
    for (row, col) in random_cells(count, max_row, max_col, seed) {
        store.set(row, col, f64::from(row ^ col));
    }
    store
}

/// Deterministic `(row, col)` pairs; duplicates are possible.
pub fn random_cells(count: usize, max_row: i32, max_col: i32, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..max_row), rng.gen_range(0..max_col)))
        .collect()
}
