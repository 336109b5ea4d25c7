//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! The tag determines how to interpret the associated `data` field.
//!
//! # Tag Categories
//!
//! - 0-15: Leaf types (data = name or unused)
//! - 16-31: Simple wrappers (data = child Idx)
//! - 32-79: Complex types (data = extra index)
//! - 80-95: Nominal types declared by a symbol (data = extra index)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Leaf Types (0-15) ===
    /// The invalid/error sentinel. data: unused (0)
    Invalid = 0,
    /// Primitive type. data: interned `Name` of the primitive
    Primitive = 1,

    // === Simple Wrappers (16-31) ===
    /// Pointer to a target type. data: target Idx
    Pointer = 16,

    // === Complex Types (32-79) ===
    /// Array of an element type.
    /// extra: `[elem, len]`, `len == u32::MAX` for unbounded arrays
    Array = 32,
    /// Function pointer type.
    /// extra: `[param_count, param0, ..., return]`
    Function = 48,

    // === Nominal Types (80-95) ===
    /// Named alias for another type.
    /// extra: `[symbol, name, target]`
    Alias = 80,
    /// Struct or class declared by a data aggregate symbol.
    /// extra: `[symbol, name]`
    Aggregate = 81,
}

impl Tag {
    /// Check if this tag is a nominal type declared by a symbol.
    #[inline]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Tag::Alias | Tag::Aggregate)
    }

    /// Lowercase kind name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Invalid => "invalid",
            Tag::Primitive => "primitive",
            Tag::Pointer => "pointer",
            Tag::Array => "array",
            Tag::Function => "function",
            Tag::Alias => "alias",
            Tag::Aggregate => "aggregate",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
