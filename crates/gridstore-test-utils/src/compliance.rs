//! Grid comparison helpers.
//!
//! Each function panics with a descriptive message on the first mismatch.
//! They only need [`CellRead`], so they compare a paged store against
//! [`ReferenceGrid`](crate::ReferenceGrid) or against another store.

use std::fmt::Debug;

use gridstore_core::CellRead;

fn collect<T: Clone>(grid: &dyn CellRead<T>) -> Vec<(i32, i32, T)> {
    let mut out = Vec::new();
    grid.for_each_cell(&mut |r, c, v| out.push((r, c, v.clone())));
    out
}

/// Assert both grids enumerate the same cells in the same order.
pub fn assert_same_cells<T>(actual: &dyn CellRead<T>, expected: &dyn CellRead<T>)
where
    T: Clone + PartialEq + Debug,
{
    let a = collect(actual);
    let e = collect(expected);
    for (i, (got, want)) in a.iter().zip(&e).enumerate() {
        assert_eq!(got, want, "cell #{i} differs");
    }
    assert_eq!(
        a.len(),
        e.len(),
        "cell count differs: actual has {}, expected {}",
        a.len(),
        e.len()
    );
}

/// Assert enumeration is strictly increasing in row-major order.
pub fn assert_row_major<T>(grid: &dyn CellRead<T>) {
    let mut last: Option<(i32, i32)> = None;
    grid.for_each_cell(&mut |r, c, _| {
        if let Some(prev) = last {
            assert!(prev < (r, c), "enumeration went from {prev:?} to {:?}", (r, c));
        }
        last = Some((r, c));
    });
}

/// Assert `get`/`exists` on `actual` agree with `expected` at every cell of
/// `expected` and at each of `probes`.
pub fn assert_point_reads_agree<T>(
    actual: &dyn CellRead<T>,
    expected: &dyn CellRead<T>,
    probes: &[(i32, i32)],
) where
    T: Clone + PartialEq + Debug,
{
    let mut keys: Vec<(i32, i32)> = collect(expected).into_iter().map(|(r, c, _)| (r, c)).collect();
    keys.extend_from_slice(probes);
    for (r, c) in keys {
        assert_eq!(
            actual.get(r, c),
            expected.get(r, c),
            "get({r}, {c}) differs"
        );
        assert_eq!(
            actual.exists(r, c),
            expected.exists(r, c),
            "exists({r}, {c}) differs"
        );
    }
}

/// Run every comparison: cells, order, point reads, `len` and `dimension`.
pub fn assert_store_matches<T>(actual: &dyn CellRead<T>, expected: &dyn CellRead<T>)
where
    T: Clone + PartialEq + Debug,
{
    assert_same_cells(actual, expected);
    assert_row_major(actual);
    assert_point_reads_agree(actual, expected, &[(0, 0), (1, 1), (1_048_575, 16_383)]);
    assert_eq!(actual.len(), expected.len(), "len differs");
    assert_eq!(actual.dimension(), expected.dimension(), "dimension differs");
}
