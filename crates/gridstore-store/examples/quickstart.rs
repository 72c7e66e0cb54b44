//! Gridstore quickstart: a small sheet built, edited and walked.
//!
//! Demonstrates:
//!   1. Creating a configured store and writing cells
//!   2. Row and column inserts and deletes
//!   3. Forward and backward enumeration over a window
//!   4. In-place updates through the arena
//!   5. Sharing a store between threads
//!
//! Run with:
//!   cargo run --example quickstart

use std::thread;

use gridstore_core::{CellFlags, MAX_COLUMNS};
use gridstore_store::{CellGrid, CellStore, FlagStore, SharedCellStore, StoreConfig};

// ─── Sheet parameters ───────────────────────────────────────────

const ROWS: i32 = 5000;
const COLS: i32 = 6;

// ─── Helpers ────────────────────────────────────────────────────

fn print_window(store: &CellStore<f64>, from_row: i32, to_row: i32) {
    for (row, col, value) in store.cells_in(from_row, 1, to_row, COLS) {
        println!("  ({row:>4}, {col}) = {value:.1}");
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gridstore Quickstart ===\n");

    // 1. Fill a sheet of numbers.
    let config = StoreConfig {
        column_capacity: COLS as usize,
        ..StoreConfig::default()
    };
    config.validate()?;
    let mut store: CellStore<f64> = CellStore::with_config(config)?;
    for row in 1..=ROWS {
        for col in 1..=COLS {
            if (row + col) % 3 == 0 {
                store.set(row, col, f64::from(row * col));
            }
        }
    }
    println!(
        "Filled {} cells, {} pages in column 1, dimension {:?}",
        store.len(),
        store.page_count(1),
        store.dimension()
    );

    // 2. Insert ten rows above row 100, then drop column 2.
    store.insert(100, 0, 10, 0);
    store.delete(0, 2, gridstore_core::MAX_ROWS, 1, true);
    println!("After edits: {} cells, dimension {:?}", store.len(), store.dimension());
    store.validate()?;

    println!("\nWindow rows 95..=112:");
    print_window(&store, 95, 112);

    // 3. Walk the same window backwards.
    println!("\nBackwards from the end of rows 95..=112:");
    let mut cells = store.cells_in(95, 1, 112, COLS);
    while cells.next_cell() {}
    let mut seen = 0;
    while cells.previous() && seen < 3 {
        println!("  {:?}", (cells.row(), cells.column(), cells.value()));
        seen += 1;
    }

    // 4. Double a whole block in place.
    store.set_range_special(1, 1, 20, COLS, |arena, pos, _, _| *arena.get_mut(pos) *= 2.0);
    println!("\nAfter doubling rows 1..=20: {} cells", store.len());

    // 5. Flags and row metadata ride along with the cells.
    let mut flags = FlagStore::new();
    flags.set_flag(3, 3, true, CellFlags::ARRAY_FORMULA);
    flags.delete(0, 0, 2, MAX_COLUMNS, true);
    println!("Flag moved to (1, 3): {}", flags.get_flag(1, 3, CellFlags::ARRAY_FORMULA));

    let mut grid: CellGrid<&str, f32> = CellGrid::new();
    grid.set(4, 1, "total");
    grid.row_meta_mut().set(4, 18.5);
    grid.insert_rows(2, 3);
    println!("Row 7 height {:?}, cell {:?}", grid.row_meta().get(7), grid.get(7, 1));

    // 6. Share the store between threads.
    let shared = SharedCellStore::from_store(store);
    thread::scope(|s| {
        for col in [7, 8] {
            let shared = &shared;
            s.spawn(move || {
                for row in 1..=100 {
                    shared.set(row, col, f64::from(row));
                }
            });
        }
    });
    println!("\nShared store now holds {} cells", shared.len());

    Ok(())
}
