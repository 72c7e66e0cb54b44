//! The append-only value arena.
//!
//! An [`Arena`] is a growable `Vec<T>` addressed by [`ArenaPos`]. Values are
//! appended, read and overwritten in place; nothing is ever removed, so a
//! position stays valid for as long as the arena lives.

use log::debug;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::position::ArenaPos;

/// Append-only storage for cell values.
///
/// Not synchronized; the owning cell store serializes writers.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    values: Vec<T>,
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an arena sized by `config`.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        if config.initial_capacity > 0 {
            debug!("arena reserve initial_capacity={}", config.initial_capacity);
        }
        Ok(Self {
            values: Vec::with_capacity(config.initial_capacity),
        })
    }

    /// Append `value` and return its position.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `i32::MAX` values.
    pub fn append(&mut self, value: T) -> ArenaPos {
        let raw = i32::try_from(self.values.len())
            .unwrap_or_else(|_| panic!("arena exhausted: {} values", self.values.len()));
        self.values.push(value);
        ArenaPos::from_raw(raw)
    }

    /// The value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` was not handed out by this arena. Index entries only
    /// ever hold positions from their own arena, so a miss here is a broken
    /// index.
    pub fn get(&self, pos: ArenaPos) -> &T {
        match self.values.get(pos.index()) {
            Some(value) => value,
            None => panic!(
                "index references arena position {pos} but arena holds {} values",
                self.values.len()
            ),
        }
    }

    /// Mutable access to the value at `pos`.
    ///
    /// # Panics
    ///
    /// Same contract as [`get`](Self::get).
    pub fn get_mut(&mut self, pos: ArenaPos) -> &mut T {
        let len = self.values.len();
        match self.values.get_mut(pos.index()) {
            Some(value) => value,
            None => panic!("index references arena position {pos} but arena holds {len} values"),
        }
    }

    /// The value at `pos`, or `None` if the position is out of range.
    pub fn try_get(&self, pos: ArenaPos) -> Option<&T> {
        if pos.raw() < 0 {
            return None;
        }
        self.values.get(pos.index())
    }

    /// Overwrite the value at `pos` in place, returning the previous value.
    pub fn set(&mut self, pos: ArenaPos, value: T) -> Result<T, ArenaError> {
        let len = self.values.len();
        if pos.raw() < 0 || pos.index() >= len {
            return Err(ArenaError::InvalidPosition { position: pos, len });
        }
        Ok(std::mem::replace(&mut self.values[pos.index()], value))
    }

    /// Number of slots ever appended (live or vacated).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was ever appended.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of slots that fit before the backing `Vec` reallocates.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Approximate heap footprint of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.values.capacity() * std::mem::size_of::<T>()
    }

    /// Iterate over every slot in position order.
    pub fn iter(&self) -> impl Iterator<Item = (ArenaPos, &T)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (ArenaPos::from_raw(i as i32), v))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_hands_out_sequential_positions() {
        let mut arena = Arena::new();
        let a = arena.append("a");
        let b = arena.append("b");
        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(*arena.get(b), "b");
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut arena = Arena::new();
        let pos = arena.append(10);
        assert_eq!(arena.set(pos, 20), Ok(10));
        assert_eq!(*arena.get(pos), 20);
        assert_eq!(arena.len(), 1, "overwrite must not grow the arena");
    }

    #[test]
    fn set_rejects_unknown_position() {
        let mut arena: Arena<u8> = Arena::new();
        let err = arena.set(ArenaPos::from_raw(3), 1).unwrap_err();
        assert_eq!(
            err,
            ArenaError::InvalidPosition {
                position: ArenaPos::from_raw(3),
                len: 0
            }
        );
        assert!(arena.set(ArenaPos::from_raw(-1), 1).is_err());
    }

    #[test]
    fn try_get_out_of_range_is_none() {
        let mut arena = Arena::new();
        arena.append(1u32);
        assert_eq!(arena.try_get(ArenaPos::from_raw(0)), Some(&1));
        assert_eq!(arena.try_get(ArenaPos::from_raw(1)), None);
        assert_eq!(arena.try_get(ArenaPos::from_raw(-5)), None);
    }

    #[test]
    #[should_panic(expected = "arena holds 0 values")]
    fn get_unknown_position_panics() {
        let arena: Arena<u8> = Arena::new();
        let _ = arena.get(ArenaPos::from_raw(0));
    }

    #[test]
    fn with_config_reserves() {
        let arena: Arena<u64> = Arena::with_config(&ArenaConfig::new(128)).unwrap();
        assert!(arena.capacity() >= 128);
        assert!(arena.is_empty());
        assert!(arena.memory_bytes() >= 128 * 8);
    }

    #[test]
    fn iter_yields_positions_in_order() {
        let mut arena = Arena::new();
        for v in [5, 6, 7] {
            arena.append(v);
        }
        let seen: Vec<_> = arena.iter().map(|(p, v)| (p.raw(), *v)).collect();
        assert_eq!(seen, vec![(0, 5), (1, 6), (2, 7)]);
    }

    #[test]
    fn clone_is_independent() {
        let mut arena = Arena::new();
        let pos = arena.append(String::from("x"));
        let mut copy = arena.clone();
        copy.set(pos, String::from("y")).unwrap();
        assert_eq!(arena.get(pos), "x");
        assert_eq!(copy.get(pos), "y");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn positions_address_appended_values(values in proptest::collection::vec(any::<i64>(), 0..64)) {
                let mut arena = Arena::new();
                let positions: Vec<_> = values.iter().map(|&v| arena.append(v)).collect();
                prop_assert_eq!(arena.len(), values.len());
                for (pos, v) in positions.iter().zip(&values) {
                    prop_assert_eq!(arena.get(*pos), v);
                }
            }
        }
    }
}
