//! Gridstore: sparse, paged, column-indexed cell storage for spreadsheets.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridstore sub-crates. For most users, adding `gridstore` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridstore::prelude::*;
//!
//! let mut sheet: CellStore<f64> = CellStore::new();
//! sheet.set(10, 5, 1.5);
//! sheet.set(2000, 5, 2.5);
//!
//! // Push everything from row 10 down by five rows.
//! sheet.insert(10, 0, 5, 0);
//! assert_eq!(sheet.get(15, 5), Some(&1.5));
//!
//! let cells: Vec<(i32, i32, f64)> = sheet.cells().map(|(r, c, v)| (r, c, *v)).collect();
//! assert_eq!(cells, vec![(15, 5, 1.5), (2005, 5, 2.5)]);
//! assert_eq!(sheet.dimension(), Some(CellRange::new(15, 5, 2005, 5)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridstore-core` | Grid limits, addresses, flags, core traits |
//! | [`arena`] | `gridstore-arena` | Append-only value arena and positions |
//! | [`store`] | `gridstore-store` | Paged store, enumerator, shared and grid wrappers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid limits, addresses, flags and the read/write traits (`gridstore-core`).
pub use gridstore_core as types;

/// Append-only value arena (`gridstore-arena`).
///
/// Stores address values through [`arena::ArenaPos`]; callers of
/// `set_value_special` receive the arena directly.
pub use gridstore_arena as arena;

/// The paged cell store and its wrappers (`gridstore-store`).
///
/// [`store::CellStore`] for single-threaded use,
/// [`store::SharedCellStore`] behind a reader-writer lock, and
/// [`store::CellGrid`] when row and column metadata must shift with cells.
pub use gridstore_store as store;

/// Common imports for typical gridstore usage.
///
/// ```rust
/// use gridstore::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gridstore_core::{
        CellAddress, CellFlags, CellRange, CellRead, CellWrite, MAX_COLUMNS, MAX_ROWS,
    };

    // Arena
    pub use gridstore_arena::{Arena, ArenaPos};

    // Store
    pub use gridstore_store::{
        CellGrid, CellStore, CellsEnumerator, FlagStore, SharedCellStore, StoreConfig,
    };
}
