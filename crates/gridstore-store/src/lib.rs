//! Sparse paged column-indexed cell store for spreadsheet grids.
//!
//! A [`CellStore`] holds only populated cells of a grid of up to
//! 1,048,576 rows by 16,384 columns. Lookups go column, then page, then
//! entry, each by binary search:
//!
//! ```text
//! CellStore<T>
//! ├── columns: Vec<ColumnIndex>   sorted by column number
//! │   └── pages: Vec<Page>        sorted by covered rows
//! │       └── entries: Vec<CellEntry { local_row: i16, pos }>
//! └── arena: Arena<T>             values, addressed by pos
//! ```
//!
//! Row inserts and deletes move whole pages by adjusting their base row and
//! only rewrite the entries of the one page straddling the edit. Column
//! inserts and deletes renumber columns without touching pages.
//!
//! [`CellsEnumerator`] walks a rectangle in row-major order in either
//! direction. [`SharedCellStore`] puts a store behind one coarse
//! `RwLock` for multi-threaded use. [`FlagStore`], [`AxisTable`] and
//! [`CellGrid`] build typed collaborators on top of the same engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod column;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod flags;
pub mod grid;
pub mod page;
pub mod shared;
pub mod store;
mod structure;
mod validate;

pub use axis::AxisTable;
pub use column::ColumnIndex;
pub use config::{ConfigError, StoreConfig};
pub use enumerator::CellsEnumerator;
pub use error::LayoutError;
pub use flags::FlagStore;
pub use grid::CellGrid;
pub use page::{CellEntry, Page};
pub use shared::SharedCellStore;
pub use store::CellStore;
