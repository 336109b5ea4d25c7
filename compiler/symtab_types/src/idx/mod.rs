//! Type index handle.
//!
//! `Idx` is the canonical type representation: every type lives in a
//! [`Pool`](crate::Pool) and is referenced by its 32-bit index.
//!
//! - Type equality is O(1) index comparison
//! - Structurally equal composites share one index (the pool interns them)
//! - Copy, lightweight passing

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    /// The invalid type: the sentinel for unresolved or erroneous types.
    ///
    /// Pre-interned at pool creation; there is exactly one per pool.
    pub const INVALID: Self = Self(0);

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the pool's item storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the INVALID type.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INVALID => write!(f, "Idx::INVALID"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INVALID => write!(f, "INVALID"),
            _ => write!(f, "type#{}", self.0),
        }
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests;
