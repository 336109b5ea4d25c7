//! Arena handles for scopes and symbols, and the caller's definition site.
//!
//! Scopes and symbols live in flat arenas owned by one symbol table.
//! Enclosing-scope and superclass links are stored as these handles, never
//! as references, so the scope tree has no reference cycles and no shared
//! mutable state.

use std::fmt;

/// Index into the scope arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Create a new `ScopeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ScopeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// Index into the symbol arena.
///
/// Arena identity, not symbol equality: two symbols with the same name in
/// different scopes have different ids but compare equal by name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create a new `SymbolId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Opaque handle to the syntax that defined a symbol.
///
/// Typically the id of a node in the caller's syntax tree. The symbol
/// table stores it and hands it back verbatim; it is never interpreted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct DefSite(u32);

impl DefSite {
    /// Wrap a caller-side node id.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        DefSite(raw)
    }

    /// Get the caller-side node id back.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}
