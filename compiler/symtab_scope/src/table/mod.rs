//! The symbol table: one arena owning every scope, symbol and type of a
//! compilation unit.
//!
//! # Ownership
//!
//! Scopes and symbols are stored in flat vectors and referenced by
//! [`ScopeId`] / [`SymbolId`]. A scope exclusively owns its member list;
//! "enclosing scope" and "superclass" are handles used only for traversal.
//! Nothing is ever removed, so handles stay valid for the table's lifetime.
//!
//! # Protocol
//!
//! 1. Create a symbol with one of the `new_*` constructors.
//! 2. [`define`](SymbolTable::define) it into exactly one scope.
//! 3. [`resolve`](SymbolTable::resolve) names later.
//!
//! Anonymous blocks are created with [`new_local_scope`] and attached with
//! [`nest`](SymbolTable::nest).
//!
//! [`new_local_scope`]: SymbolTable::new_local_scope

mod aggregate;
mod define;
mod query;
mod render;
mod resolve;

use symtab_ir::{DefSite, Name, ScopeId, StringInterner, SymbolId};
use symtab_types::{Idx, Pool};

use crate::scope::{ScopeData, ScopeKind};
use crate::symbol::{Aggregate, Capabilities, SymbolDetail, SymbolEntry, SymbolKind};
use crate::{SymbolError, SymtabConfig};

/// Scope tree, symbols and types of one compilation unit.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    config: SymtabConfig,
    names: StringInterner,
    types: Pool,
    scopes: Vec<ScopeData>,
    symbols: Vec<SymbolEntry>,
    predefined: ScopeId,
    globals: ScopeId,
}

impl SymbolTable {
    /// The invalid type, for unresolved or erroneous type references.
    pub const INVALID: Idx = Idx::INVALID;

    /// Create a table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SymtabConfig::default())
    }

    /// Create a table with the predefined scope at the root and the global
    /// scope nested inside it.
    pub fn with_config(config: SymtabConfig) -> Self {
        let predefined = ScopeId::new(0);
        let globals = ScopeId::new(1);
        let mut root = ScopeData::new(ScopeKind::Predefined, None);
        root.blocks.push(globals);

        SymbolTable {
            config,
            names: StringInterner::new(),
            types: Pool::new(),
            scopes: vec![root, ScopeData::new(ScopeKind::Global, Some(predefined))],
            symbols: Vec::new(),
            predefined,
            globals,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SymtabConfig {
        &self.config
    }

    /// Root scope holding the language's built-in names.
    pub fn predefined(&self) -> ScopeId {
        self.predefined
    }

    /// Scope holding top-level declarations.
    pub fn globals(&self) -> ScopeId {
        self.globals
    }

    /// Interner holding every symbol name.
    pub fn names(&self) -> &StringInterner {
        &self.names
    }

    /// Intern a string with the table's name interner.
    pub fn intern(&mut self, s: &str) -> Name {
        self.names.intern(s)
    }

    /// The type pool.
    pub fn types(&self) -> &Pool {
        &self.types
    }

    /// The type pool, for constructing pointer, array and function types.
    pub fn types_mut(&mut self) -> &mut Pool {
        &mut self.types
    }

    /// Format a type with this table's names.
    pub fn format_type(&self, ty: Idx) -> String {
        self.types.format_type(ty, &self.names)
    }

    // === Predefined / Global Shortcuts ===

    /// Define a symbol in the predefined scope.
    pub fn define_predefined(&mut self, symbol: SymbolId) -> Result<(), SymbolError> {
        self.define(self.predefined, symbol)
    }

    /// Define a symbol in the global scope.
    pub fn define_global(&mut self, symbol: SymbolId) -> Result<(), SymbolError> {
        self.define(self.globals, symbol)
    }

    /// Define one primitive type per name in the predefined scope.
    ///
    /// Type indices are assigned 1, 2, ... in order; 0 is left for the
    /// invalid type.
    pub fn init_type_system(&mut self, primitives: &[&str]) -> Result<Vec<SymbolId>, SymbolError> {
        let mut defined = Vec::with_capacity(primitives.len());
        for (i, name) in primitives.iter().enumerate() {
            let symbol = self.new_primitive(name);
            self.define_predefined(symbol)?;
            self.set_type_index(symbol, Self::to_u32(i + 1));
            defined.push(symbol);
        }
        Ok(defined)
    }

    // === Symbol Constructors ===

    /// Create a variable.
    pub fn new_variable(&mut self, name: &str, ty: Option<Idx>) -> SymbolId {
        self.alloc_symbol(name, SymbolDetail::Variable { ty })
    }

    /// Create a function parameter.
    pub fn new_parameter(&mut self, name: &str, ty: Option<Idx>) -> SymbolId {
        self.alloc_symbol(name, SymbolDetail::Parameter { ty })
    }

    /// Create a field. Its slot is assigned when it is defined into an
    /// aggregate.
    pub fn new_field(&mut self, name: &str, ty: Option<Idx>) -> SymbolId {
        self.alloc_symbol(name, SymbolDetail::Field { ty, slot: None })
    }

    /// Create a function with its own (not yet enclosed) scope.
    pub fn new_function(&mut self, name: &str, ret: Option<Idx>) -> SymbolId {
        let body = self.alloc_body();
        self.alloc_symbol(name, SymbolDetail::Function { ret, body })
    }

    /// Create a method. Its dispatch slot is assigned when it is defined
    /// into an aggregate.
    pub fn new_method(&mut self, name: &str, ret: Option<Idx>) -> SymbolId {
        let body = self.alloc_body();
        self.alloc_symbol(
            name,
            SymbolDetail::Method {
                ret,
                body,
                slot: None,
            },
        )
    }

    /// Create a struct.
    pub fn new_struct(&mut self, name: &str) -> SymbolId {
        let aggregate = self.alloc_aggregate(name);
        self.alloc_symbol(name, SymbolDetail::Struct(aggregate))
    }

    /// Create a class, optionally extending the class named `superclass`.
    ///
    /// The superclass name is resolved lazily through the scope the class
    /// is defined in, so the class itself may be declared before its
    /// superclass. Methods can only be defined into it once the whole
    /// superclass chain resolves; see [`define`](Self::define).
    pub fn new_class(&mut self, name: &str, superclass: Option<&str>) -> SymbolId {
        let superclass = superclass.map(|s| self.names.intern(s));
        let aggregate = self.alloc_aggregate(name);
        self.alloc_symbol(
            name,
            SymbolDetail::Class {
                aggregate,
                superclass,
            },
        )
    }

    /// Create a primitive type symbol.
    pub fn new_primitive(&mut self, name: &str) -> SymbolId {
        let interned = self.names.intern(name);
        let ty = self.types.primitive(interned);
        self.alloc_symbol(name, SymbolDetail::Primitive { ty })
    }

    /// Create a type alias for `target`.
    pub fn new_alias(&mut self, name: &str, target: Idx) -> SymbolId {
        let id = self.next_symbol_id();
        let interned = self.names.intern(name);
        let ty = self.types.alias(id, interned, target);
        self.alloc_symbol(name, SymbolDetail::Alias { ty, target })
    }

    /// Create an anonymous block scope enclosed by `enclosing`.
    ///
    /// The block is not listed among `enclosing`'s nested scopes until it
    /// is passed to [`nest`](Self::nest).
    pub fn new_local_scope(&mut self, enclosing: ScopeId) -> ScopeId {
        self.alloc_scope(ScopeData::new(ScopeKind::Local, Some(enclosing)))
    }

    /// Create a block scope and nest it in `enclosing` in one step.
    pub fn new_block(&mut self, enclosing: ScopeId) -> ScopeId {
        let block = self.new_local_scope(enclosing);
        self.scopes[enclosing.index()].blocks.push(block);
        block
    }

    fn alloc_symbol(&mut self, name: &str, detail: SymbolDetail) -> SymbolId {
        debug_assert!(!name.is_empty(), "symbol names must be non-empty");
        let id = self.next_symbol_id();
        let name = self.names.intern(name);
        self.symbols.push(SymbolEntry::new(name, detail));
        id
    }

    /// Scope for the symbol about to be allocated. Its enclosing scope is
    /// set when the symbol is defined.
    fn alloc_body(&mut self) -> ScopeId {
        let owner = self.next_symbol_id();
        self.alloc_scope(ScopeData::new(ScopeKind::Symbol(owner), None))
    }

    fn alloc_aggregate(&mut self, name: &str) -> Aggregate {
        let owner = self.next_symbol_id();
        let body = self.alloc_body();
        let name = self.names.intern(name);
        let ty = self.types.aggregate(owner, name);
        Aggregate::new(body, ty)
    }

    fn alloc_scope(&mut self, data: ScopeData) -> ScopeId {
        let id = ScopeId::new(Self::to_u32(self.scopes.len()));
        self.scopes.push(data);
        id
    }

    fn next_symbol_id(&self) -> SymbolId {
        SymbolId::new(Self::to_u32(self.symbols.len()))
    }

    fn to_u32(len: usize) -> u32 {
        u32::try_from(len).unwrap_or_else(|_| panic!("symbol table exceeded {} entries", u32::MAX))
    }

    // === Symbol Accessors ===

    pub(crate) fn entry(&self, symbol: SymbolId) -> &SymbolEntry {
        &self.symbols[symbol.index()]
    }

    pub(crate) fn scope_data(&self, scope: ScopeId) -> &ScopeData {
        &self.scopes[scope.index()]
    }

    /// Interned name of a symbol.
    pub fn name(&self, symbol: SymbolId) -> Name {
        self.entry(symbol).name
    }

    /// Name of a symbol as a string.
    pub fn name_str(&self, symbol: SymbolId) -> &str {
        self.names.lookup(self.entry(symbol).name)
    }

    /// Kind of a symbol.
    pub fn kind(&self, symbol: SymbolId) -> SymbolKind {
        self.entry(symbol).kind()
    }

    /// Capability set of a symbol.
    pub fn capabilities(&self, symbol: SymbolId) -> Capabilities {
        self.kind(symbol).capabilities()
    }

    /// Symbol equality: two symbols are equal iff their names are equal.
    pub fn symbols_equal(&self, a: SymbolId, b: SymbolId) -> bool {
        self.entry(a).name == self.entry(b).name
    }

    /// Scope whose member map holds this symbol, once defined.
    pub fn owning_scope(&self, symbol: SymbolId) -> Option<ScopeId> {
        self.entry(symbol).scope
    }

    /// Position of the symbol in its owning scope, once defined.
    pub fn insertion_order(&self, symbol: SymbolId) -> Option<u32> {
        self.entry(symbol).order
    }

    /// Caller's definition-site handle, if one was attached.
    pub fn def_site(&self, symbol: SymbolId) -> Option<DefSite> {
        self.entry(symbol).def_site
    }

    /// Attach the caller's definition-site handle.
    pub fn set_def_site(&mut self, symbol: SymbolId, site: DefSite) {
        self.symbols[symbol.index()].def_site = Some(site);
    }

    /// Declared type of a typed symbol; the return type for functions and
    /// methods.
    pub fn ty(&self, symbol: SymbolId) -> Option<Idx> {
        self.entry(symbol).detail.declared_type()
    }

    /// Set the declared type of a typed symbol.
    pub fn set_type(&mut self, symbol: SymbolId, ty: Idx) -> Result<(), SymbolError> {
        let entry = &mut self.symbols[symbol.index()];
        let kind = entry.kind();
        let name = entry.name;
        match entry.detail.declared_type_mut() {
            Some(slot) => {
                *slot = Some(ty);
                Ok(())
            }
            None => Err(SymbolError::NotTyped {
                name: self.names.lookup(name).to_owned(),
                kind: kind.name(),
            }),
        }
    }

    /// The symbol used as a type: primitives, aliases and aggregates.
    pub fn as_type(&self, symbol: SymbolId) -> Option<Idx> {
        self.entry(symbol).detail.as_type()
    }

    /// Target of a type alias.
    pub fn alias_target(&self, symbol: SymbolId) -> Option<Idx> {
        match self.entry(symbol).detail {
            SymbolDetail::Alias { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Field or dispatch slot of a member; `None` for nested aggregates and
    /// for members not yet defined into an aggregate.
    pub fn slot(&self, symbol: SymbolId) -> Option<u32> {
        self.entry(symbol).detail.slot()
    }

    /// Scope owned by a function, method or aggregate.
    pub fn body_scope(&self, symbol: SymbolId) -> Option<ScopeId> {
        self.entry(symbol).detail.body()
    }

    /// Number of symbols ever created in this table.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of scopes ever created in this table.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
