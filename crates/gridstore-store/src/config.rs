//! Store configuration, validation, and error types.
//!
//! [`StoreConfig`] only carries allocation hints. None of them change what
//! `get`/`set`/enumeration observe; [`validate()`](StoreConfig::validate)
//! rejects hints larger than anything the grid could ever use.

use std::error::Error;
use std::fmt;

use gridstore_arena::{ArenaConfig, ArenaError};
use gridstore_core::limits::{MAX_COLUMNS, MAX_ROWS, PAGE_SIZE, PAGE_SIZE_MAX};

/// Most pages a single column can need when every nominal page is in use.
pub const MAX_PAGES_PER_COLUMN: usize = (MAX_ROWS / PAGE_SIZE) as usize + 1;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`StoreConfig::validate()`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena configuration is invalid.
    Arena(ArenaError),
    /// `column_capacity` exceeds the number of columns in a grid.
    ColumnCapacityTooLarge {
        /// The configured value.
        configured: usize,
    },
    /// `pages_per_column` exceeds [`MAX_PAGES_PER_COLUMN`].
    PagesPerColumnTooLarge {
        /// The configured value.
        configured: usize,
    },
    /// `page_capacity` exceeds the per-page entry cap.
    PageCapacityTooLarge {
        /// The configured value.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::ColumnCapacityTooLarge { configured } => {
                write!(
                    f,
                    "column_capacity {configured} exceeds the {MAX_COLUMNS} columns of a grid"
                )
            }
            Self::PagesPerColumnTooLarge { configured } => {
                write!(
                    f,
                    "pages_per_column {configured} exceeds maximum of {MAX_PAGES_PER_COLUMN}"
                )
            }
            Self::PageCapacityTooLarge { configured } => {
                write!(
                    f,
                    "page_capacity {configured} exceeds page entry cap of {PAGE_SIZE_MAX}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── StoreConfig ────────────────────────────────────────────────────

/// Allocation hints for a [`CellStore`](crate::CellStore).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Columns to reserve room for up front. Default: 32.
    pub column_capacity: usize,
    /// Pages each new column reserves room for. Default: 4.
    pub pages_per_column: usize,
    /// Entries each new page reserves room for. Default: 16.
    ///
    /// Pages double their storage as they fill, up to the entry cap.
    pub page_capacity: usize,
    /// Value arena configuration.
    pub arena: ArenaConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            column_capacity: 32,
            pages_per_column: 4,
            page_capacity: 16,
            arena: ArenaConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Check every hint against the grid's limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_capacity > MAX_COLUMNS as usize {
            return Err(ConfigError::ColumnCapacityTooLarge {
                configured: self.column_capacity,
            });
        }
        if self.pages_per_column > MAX_PAGES_PER_COLUMN {
            return Err(ConfigError::PagesPerColumnTooLarge {
                configured: self.pages_per_column,
            });
        }
        if self.page_capacity > PAGE_SIZE_MAX as usize {
            return Err(ConfigError::PageCapacityTooLarge {
                configured: self.page_capacity,
            });
        }
        self.arena.validate()?;
        Ok(())
    }
}
