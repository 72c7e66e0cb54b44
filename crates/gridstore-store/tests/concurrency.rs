//! Multi-threaded access through `SharedCellStore`.
//!
//! Writers own disjoint columns, so the final grid is deterministic no
//! matter how the lock is handed out.

use std::thread;

use gridstore_store::SharedCellStore;

const WRITERS: i32 = 4;
const ROWS_PER_WRITER: i32 = 3000;

#[test]
fn disjoint_writers_and_readers() {
    let shared: SharedCellStore<i64> = SharedCellStore::new();

    thread::scope(|s| {
        for w in 0..WRITERS {
            let shared = &shared;
            s.spawn(move || {
                let col = w + 1;
                for row in 0..ROWS_PER_WRITER {
                    shared.set(row, col, i64::from(row * 10 + w));
                }
            });
        }
        for _ in 0..2 {
            let shared = &shared;
            s.spawn(move || {
                for _ in 0..200 {
                    let guard = shared.read();
                    // Each column is filled top-down, so what a reader sees
                    // is a gap-free prefix.
                    for col in 1..=WRITERS {
                        let rows: Vec<i32> =
                            guard.cells_in(0, col, i32::MAX, col).map(|(r, _, _)| r).collect();
                        assert!(rows.iter().copied().eq(0..rows.len() as i32));
                    }
                }
            });
        }
    });

    assert_eq!(shared.len(), (WRITERS * ROWS_PER_WRITER) as usize);
    for w in 0..WRITERS {
        assert_eq!(shared.get(1234, w + 1), Some(i64::from(1234 * 10 + w)));
    }
    let store = shared.into_inner();
    assert_eq!(store.validate(), Ok(()));
}

#[test]
fn structural_edits_serialize_with_point_writes() {
    let shared: SharedCellStore<u32> = SharedCellStore::new();
    for row in 0..1000 {
        shared.set(row, 1, row as u32);
    }

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..50 {
                shared.insert(500, 0, 2, 0);
            }
        });
        s.spawn(|| {
            for row in 0..500 {
                shared.set_value_special(row, 2, |arena, pos| *arena.get_mut(pos) += 1);
            }
        });
    });

    // Rows below 500 never move; the tail moved down by 100.
    let snapshot = shared.snapshot();
    assert_eq!(snapshot.validate(), Ok(()));
    assert_eq!(snapshot.get(499, 1), Some(&499));
    assert_eq!(snapshot.get(600, 1), Some(&500));
    assert_eq!(snapshot.get(1099, 1), Some(&999));
    assert_eq!(snapshot.get(250, 2), Some(&1));
    assert_eq!(snapshot.len(), 1500);
}
