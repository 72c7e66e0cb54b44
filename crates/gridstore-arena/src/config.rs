//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// The arena grows on demand; the only knob is how much to reserve up
/// front. Validated at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of value slots to reserve when the arena is created.
    ///
    /// Default: 0 (allocate on first append).
    pub initial_capacity: usize,
}

impl ArenaConfig {
    /// Largest number of slots an arena can address (positions are `i32`).
    pub const MAX_SLOTS: usize = i32::MAX as usize;

    /// Create a config reserving `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that the config describes an addressable arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.initial_capacity > Self::MAX_SLOTS {
            return Err(ArenaError::CapacityExceeded {
                requested: self.initial_capacity,
                max: Self::MAX_SLOTS,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reserves_nothing() {
        let config = ArenaConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_hint_rejected() {
        let config = ArenaConfig::new(ArenaConfig::MAX_SLOTS + 1);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::CapacityExceeded { .. })
        ));
    }
}
