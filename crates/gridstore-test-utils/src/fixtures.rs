//! Random edit sequences for differential tests.
//!
//! [`random_ops`] draws a mix of point writes and structural edits from a
//! caller-supplied RNG (tests seed a `ChaCha8Rng` so failures replay).
//! [`Op::apply`] runs one edit against any [`CellWrite`] grid.

use gridstore_core::limits::{MAX_COLUMNS, MAX_ROWS};
use gridstore_core::CellWrite;
use rand::Rng;

/// One edit against a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Set {
        row: i32,
        col: i32,
        value: i64,
    },
    Insert {
        from_row: i32,
        from_col: i32,
        rows: i32,
        cols: i32,
    },
    Delete {
        from_row: i32,
        from_col: i32,
        rows: i32,
        cols: i32,
        shift: bool,
    },
}

impl Op {
    pub fn apply(&self, grid: &mut dyn CellWrite<i64>) {
        match *self {
            Op::Set { row, col, value } => grid.set(row, col, value),
            Op::Insert {
                from_row,
                from_col,
                rows,
                cols,
            } => grid.insert(from_row, from_col, rows, cols),
            Op::Delete {
                from_row,
                from_col,
                rows,
                cols,
                shift,
            } => grid.delete(from_row, from_col, rows, cols, shift),
        }
    }
}

/// Coordinate window random edits are drawn from.
#[derive(Clone, Copy, Debug)]
pub struct OpBounds {
    /// Rows are drawn from `0..max_row`.
    pub max_row: i32,
    /// Columns are drawn from `0..max_col`.
    pub max_col: i32,
    /// Largest row count for a structural edit.
    pub max_shift: i32,
}

impl Default for OpBounds {
    fn default() -> Self {
        Self {
            max_row: 6000,
            max_col: 12,
            max_shift: 2500,
        }
    }
}

/// Draw `count` edits, roughly three writes per structural edit.
pub fn random_ops<R: Rng>(rng: &mut R, count: usize, bounds: OpBounds) -> Vec<Op> {
    (0..count).map(|_| random_op(rng, bounds)).collect()
}

fn random_op<R: Rng>(rng: &mut R, b: OpBounds) -> Op {
    match rng.gen_range(0..16) {
        0..=11 => Op::Set {
            row: rng.gen_range(0..b.max_row),
            col: rng.gen_range(0..b.max_col),
            value: rng.gen(),
        },
        12 => Op::Insert {
            from_row: rng.gen_range(0..b.max_row),
            from_col: 0,
            rows: rng.gen_range(1..=b.max_shift),
            cols: 0,
        },
        13 => Op::Insert {
            from_row: 0,
            from_col: rng.gen_range(0..b.max_col),
            rows: 0,
            cols: rng.gen_range(1..=3),
        },
        14 => {
            // Whole rows, whole columns, or a rectangle.
            let (from_row, rows, from_col, cols) = match rng.gen_range(0..3) {
                0 => (
                    rng.gen_range(0..b.max_row),
                    rng.gen_range(1..=b.max_shift),
                    0,
                    MAX_COLUMNS,
                ),
                1 => (0, MAX_ROWS, rng.gen_range(0..b.max_col), rng.gen_range(1..=3)),
                _ => (
                    rng.gen_range(0..b.max_row),
                    rng.gen_range(1..=b.max_shift),
                    rng.gen_range(0..b.max_col),
                    rng.gen_range(1..=4),
                ),
            };
            Op::Delete {
                from_row,
                from_col,
                rows,
                cols,
                shift: true,
            }
        }
        _ => Op::Delete {
            from_row: rng.gen_range(0..b.max_row),
            from_col: rng.gen_range(0..b.max_col),
            rows: rng.gen_range(1..=b.max_shift),
            cols: rng.gen_range(1..=4),
            shift: false,
        },
    }
}
