//! Per-cell boolean flags packed into a byte.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of per-cell boolean flags.
///
/// Stored one byte per populated cell in a flag store, so a cell that has
/// never had a flag set costs nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellFlags(u8);

impl CellFlags {
    /// The cell's value is rich text.
    pub const RICH_TEXT: Self = Self(1);
    /// The cell is part of a shared formula.
    pub const SHARED_FORMULA: Self = Self(1 << 1);
    /// The cell is part of an array formula.
    pub const ARRAY_FORMULA: Self = Self(1 << 2);
    /// The cell belongs to a data table.
    pub const DATA_TABLE: Self = Self(1 << 3);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::RICH_TEXT, "RICH_TEXT"),
        (Self::SHARED_FORMULA, "SHARED_FORMULA"),
        (Self::ARRAY_FORMULA, "ARRAY_FORMULA"),
        (Self::DATA_TABLE, "DATA_TABLE"),
    ];

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Rebuild a set from its raw byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any flag in `other` is also set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set every flag in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear every flag in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Set or clear every flag in `other`.
    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl BitOr for CellFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for CellFlags {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Display for CellFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_and_clear() {
        let mut flags = CellFlags::empty();
        flags.set(CellFlags::RICH_TEXT, true);
        flags.set(CellFlags::DATA_TABLE, true);
        assert!(flags.contains(CellFlags::RICH_TEXT | CellFlags::DATA_TABLE));
        flags.set(CellFlags::RICH_TEXT, false);
        assert!(!flags.intersects(CellFlags::RICH_TEXT));
        assert!(flags.contains(CellFlags::DATA_TABLE));
    }

    #[test]
    fn display_lists_names() {
        assert_eq!(CellFlags::empty().to_string(), "(empty)");
        let flags = CellFlags::SHARED_FORMULA | CellFlags::ARRAY_FORMULA;
        assert_eq!(flags.to_string(), "SHARED_FORMULA | ARRAY_FORMULA");
    }

    proptest! {
        #[test]
        fn insert_then_remove_is_identity(a in any::<u8>(), b in any::<u8>()) {
            let base = CellFlags::from_bits(a & !b);
            let mut flags = base;
            flags.insert(CellFlags::from_bits(b));
            flags.remove(CellFlags::from_bits(b));
            prop_assert_eq!(flags, base);
        }

        #[test]
        fn contains_self(a in any::<u8>()) {
            let flags = CellFlags::from_bits(a);
            prop_assert!(flags.contains(flags));
            prop_assert!(flags.contains(CellFlags::empty()));
        }
    }
}
