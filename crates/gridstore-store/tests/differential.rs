//! Differential tests: random edit sequences applied to the paged store and
//! to the `BTreeMap` reference model must leave identical grids.

use gridstore_store::CellStore;
use gridstore_test_utils::{assert_store_matches, random_ops, Op, OpBounds, ReferenceGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn run(seed: u64, count: usize, bounds: OpBounds) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ops = random_ops(&mut rng, count, bounds);
    let mut store: CellStore<i64> = CellStore::new();
    let mut model = ReferenceGrid::new();
    for (step, op) in ops.iter().enumerate() {
        op.apply(&mut store);
        op.apply(&mut model);
        if let Err(e) = store.validate() {
            panic!("seed {seed}, step {step}: {op:?} broke the layout: {e}");
        }
    }
    assert_store_matches(&store, &model);
}

#[test]
fn default_bounds_many_seeds() {
    for seed in 0..12 {
        run(seed, 600, OpBounds::default());
    }
}

#[test]
fn narrow_window_forces_dense_pages() {
    // Few rows and columns: pages fill, split and merge constantly.
    let bounds = OpBounds {
        max_row: 1500,
        max_col: 3,
        max_shift: 40,
    };
    for seed in 100..106 {
        run(seed, 4000, bounds);
    }
}

#[test]
fn large_shifts_move_pages_far() {
    let bounds = OpBounds {
        max_row: 200_000,
        max_col: 6,
        max_shift: 9_000,
    };
    for seed in 200..206 {
        run(seed, 800, bounds);
    }
}

#[test]
fn clone_matches_after_random_edits() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut store: CellStore<i64> = CellStore::new();
    for op in random_ops(&mut rng, 1500, OpBounds::default()) {
        op.apply(&mut store);
    }
    let copy = store.clone();
    assert_eq!(copy.validate(), Ok(()));
    assert!(copy.arena_len() <= store.arena_len());
    assert_eq!(copy.arena_len(), copy.len());
    assert_store_matches(&copy, &store);
}

#[test]
fn sequential_fill_then_row_delete() {
    let mut store: CellStore<i64> = CellStore::new();
    let mut model = ReferenceGrid::new();
    let fill: Vec<Op> = (0..5000)
        .map(|i| Op::Set {
            row: i,
            col: 1,
            value: i64::from(i),
        })
        .collect();
    for op in &fill {
        op.apply(&mut store);
        op.apply(&mut model);
    }
    let cut = Op::Delete {
        from_row: 1000,
        from_col: 0,
        rows: 2500,
        cols: gridstore_core::MAX_COLUMNS,
        shift: true,
    };
    cut.apply(&mut store);
    cut.apply(&mut model);
    assert_eq!(store.validate(), Ok(()));
    assert_eq!(store.len(), 2500);
    assert_store_matches(&store, &model);
}
