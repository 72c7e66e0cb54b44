//! Core types, limits and traits for the gridstore sparse cell engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid limits and
//! page geometry, cell addresses and rectangles, the per-cell flag
//! bitset, range errors, and the read/write traits every cell
//! container implements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod error;
pub mod flags;
pub mod limits;
pub mod traits;

pub use address::{CellAddress, CellRange};
pub use error::RangeError;
pub use flags::CellFlags;
pub use limits::{MAX_COLUMNS, MAX_ROWS, PAGE_BITS, PAGE_SIZE, PAGE_SIZE_MAX};
pub use traits::{CellRead, CellWrite};
