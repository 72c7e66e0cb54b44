//! Criterion micro-benchmarks for point writes, point reads and range fills.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridstore_bench::{column_profile, random_cells, scattered_profile};
use gridstore_store::CellStore;

/// Benchmark: Fill one column top-down with 10K rows.
fn bench_set_sequential_10k(c: &mut Criterion) {
    c.bench_function("set_sequential_10k", |b| {
        b.iter(|| {
            let mut store = CellStore::new();
            for row in 0..10_000 {
                store.set(row, 1, row);
            }
            black_box(store.len());
        });
    });
}

/// Benchmark: 10K writes at random coordinates over 100K rows x 50 columns.
fn bench_set_random_10k(c: &mut Criterion) {
    let cells = random_cells(10_000, 100_000, 50, 7);
    c.bench_function("set_random_10k", |b| {
        b.iter(|| {
            let mut store = CellStore::new();
            for &(row, col) in &cells {
                store.set(row, col, row);
            }
            black_box(store.len());
        });
    });
}

/// Benchmark: Overwrite every cell of a filled 10K-cell column.
fn bench_overwrite_10k(c: &mut Criterion) {
    let mut store = column_profile(10_000, 1);
    c.bench_function("overwrite_10k", |b| {
        b.iter(|| {
            for row in 0..10_000 {
                store.set_value_special(row, 1, |arena, pos| *arena.get_mut(pos) += 1.0);
            }
        });
    });
}

/// Benchmark: 10K point reads, half hits and half misses.
fn bench_get_mixed_10k(c: &mut Criterion) {
    let store = scattered_profile(20_000, 100_000, 50, 11);
    let probes = random_cells(10_000, 100_000, 50, 11);
    c.bench_function("get_mixed_10k", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for (i, &(row, col)) in probes.iter().enumerate() {
                let row = if i % 2 == 0 { row } else { row + 1 };
                if store.get(row, col).is_some() {
                    found += 1;
                }
            }
            black_box(found);
        });
    });
}

/// Benchmark: Create a 2000 x 10 block in one range fill.
fn bench_set_range_special_20k(c: &mut Criterion) {
    c.bench_function("set_range_special_20k", |b| {
        b.iter(|| {
            let mut store: CellStore<u32> = CellStore::new();
            store.set_range_special(0, 1, 1999, 10, |arena, pos, row, col| {
                *arena.get_mut(pos) = (row + col) as u32;
            });
            black_box(store.len());
        });
    });
}

criterion_group!(
    benches,
    bench_set_sequential_10k,
    bench_set_random_10k,
    bench_overwrite_10k,
    bench_get_mixed_10k,
    bench_set_range_special_20k
);
criterion_main!(benches);
