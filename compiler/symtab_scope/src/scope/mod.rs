//! Scope storage.

use rustc_hash::FxHashMap;
use symtab_ir::{Name, ScopeId, SymbolId};

/// What a scope belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    /// Root scope for the language's built-in names.
    Predefined,
    /// Scope for top-level declarations.
    Global,
    /// Anonymous block, attached to its parent with `nest`.
    Local,
    /// Body of a symbol-with-scope (function, method, struct, class).
    Symbol(SymbolId),
}

/// A scope in the arena.
#[derive(Clone, Debug)]
pub(crate) struct ScopeData {
    pub kind: ScopeKind,
    /// `None` only for the root, or for a symbol body not yet defined.
    pub enclosing: Option<ScopeId>,
    /// Members in insertion order.
    pub members: Vec<SymbolId>,
    pub by_name: FxHashMap<Name, SymbolId>,
    /// Nested scopes that are not symbols.
    pub blocks: Vec<ScopeId>,
}

impl ScopeData {
    pub fn new(kind: ScopeKind, enclosing: Option<ScopeId>) -> Self {
        ScopeData {
            kind,
            enclosing,
            members: Vec::new(),
            by_name: FxHashMap::default(),
            blocks: Vec::new(),
        }
    }

    /// Symbol owning this scope, for symbol bodies.
    pub fn owner(&self) -> Option<SymbolId> {
        match self.kind {
            ScopeKind::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}
