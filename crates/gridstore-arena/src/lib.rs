//! Append-only value arena backing the gridstore cell index.
//!
//! The cell index never stores values directly. Each index entry holds an
//! [`ArenaPos`] into an [`Arena`], which keeps values in one contiguous,
//! append-only `Vec`. Structural edits to the index (row/column insert and
//! delete, page splits and merges) therefore never move a value.
//!
//! # Architecture
//!
//! ```text
//! CellStore<T>
//! ├── ColumnIndex[] → Page[] → CellEntry { local_row, pos: ArenaPos }
//! └── Arena<T>  (Vec<T>, positions handed out by append, never reused)
//! ```
//!
//! Positions vacated by a delete are not reclaimed; the slot keeps its last
//! value until the arena is dropped. A store clone builds a fresh arena with
//! only the live values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod position;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use position::ArenaPos;
