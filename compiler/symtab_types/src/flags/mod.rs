//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once at type interning time and cached,
//! enabling O(1) queries about type properties without traversal.

use bitflags::bitflags;

use crate::Tag;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    ///
    /// Computed once at interning time, never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Presence Flags (bits 0-7) ===
        // Track what a type contains anywhere in its structure.

        /// Contains the invalid type (error propagation).
        const HAS_INVALID = 1 << 0;
        /// Contains an alias that must be followed to reach the real type.
        const HAS_ALIAS = 1 << 1;
        /// Contains a user-declared aggregate.
        const HAS_AGGREGATE = 1 << 2;

        // === Category Flags (bits 8-15) ===
        // Classify the outermost constructor for fast dispatch.

        /// Primitive type.
        const IS_PRIMITIVE = 1 << 8;
        /// Pointer type.
        const IS_POINTER = 1 << 9;
        /// Array type.
        const IS_ARRAY = 1 << 10;
        /// Function pointer type.
        const IS_FUNCTION = 1 << 11;
        /// Declared by a symbol (alias or aggregate).
        const IS_NOMINAL = 1 << 12;

        // === Shape Flags (bits 16-23) ===

        /// Array with a fixed element count.
        const IS_SIZED = 1 << 16;
    }
}

impl TypeFlags {
    /// Flags that should propagate from child types to parents.
    pub const PROPAGATE_MASK: Self = Self::from_bits_truncate(
        Self::HAS_INVALID.bits() | Self::HAS_ALIAS.bits() | Self::HAS_AGGREGATE.bits(),
    );

    /// Flags for a freshly constructed type of the given kind, before
    /// child flags are merged in.
    pub const fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::Invalid => Self::HAS_INVALID,
            Tag::Primitive => Self::IS_PRIMITIVE,
            Tag::Pointer => Self::IS_POINTER,
            Tag::Array => Self::IS_ARRAY,
            Tag::Function => Self::IS_FUNCTION,
            Tag::Alias => Self::IS_NOMINAL.union(Self::HAS_ALIAS),
            Tag::Aggregate => Self::IS_NOMINAL.union(Self::HAS_AGGREGATE),
        }
    }

    /// Merge the propagating flags of a child type.
    #[inline]
    #[must_use]
    pub const fn with_child(self, child: Self) -> Self {
        self.union(child.intersection(Self::PROPAGATE_MASK))
    }

    /// Check if the type contains the invalid type anywhere.
    #[inline]
    pub const fn has_invalid(self) -> bool {
        self.contains(Self::HAS_INVALID)
    }

    /// Check if the type contains an alias anywhere.
    #[inline]
    pub const fn has_alias(self) -> bool {
        self.contains(Self::HAS_ALIAS)
    }
}

#[cfg(test)]
mod tests;
