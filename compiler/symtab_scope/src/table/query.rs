//! Read-only queries over the scope tree.

use symtab_ir::{ScopeId, SymbolId};

use super::SymbolTable;
use crate::scope::ScopeKind;
use crate::stack::ensure_sufficient_stack;
use crate::symbol::SymbolKind;

impl SymbolTable {
    // === Scope Contents ===

    /// Symbols defined in `scope`, in insertion order.
    pub fn symbols(&self, scope: ScopeId) -> &[SymbolId] {
        &self.scope_data(scope).members
    }

    /// Names of the symbols defined in `scope`, in insertion order.
    pub fn symbol_names(&self, scope: ScopeId) -> Vec<&str> {
        self.symbols(scope)
            .iter()
            .map(|&symbol| self.name_str(symbol))
            .collect()
    }

    pub fn number_of_symbols(&self, scope: ScopeId) -> usize {
        self.scope_data(scope).members.len()
    }

    /// Symbols of `scope` followed, for each symbol-with-scope among them,
    /// by that symbol's own [`all_symbols`](Self::all_symbols).
    ///
    /// Anonymous blocks are not entered.
    pub fn all_symbols(&self, scope: ScopeId) -> Vec<SymbolId> {
        let mut out = Vec::new();
        self.collect_all_symbols(scope, &mut out);
        out
    }

    fn collect_all_symbols(&self, scope: ScopeId, out: &mut Vec<SymbolId>) {
        let members = self.symbols(scope);
        out.extend_from_slice(members);
        for &member in members {
            if let Some(body) = self.body_scope(member) {
                ensure_sufficient_stack(|| self.collect_all_symbols(body, out));
            }
        }
    }

    // === Nested Scopes ===

    /// Bodies of the symbols-with-scope defined in `scope`.
    pub fn nested_scoped_symbols(&self, scope: ScopeId) -> Vec<ScopeId> {
        self.symbols(scope)
            .iter()
            .filter_map(|&member| self.body_scope(member))
            .collect()
    }

    /// All scopes directly nested in `scope`: symbol bodies first, then
    /// anonymous blocks in nesting order.
    pub fn nested_scopes(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut nested = self.nested_scoped_symbols(scope);
        nested.extend_from_slice(&self.scope_data(scope).blocks);
        nested
    }

    /// Symbol bodies nested at any depth below `scope`.
    ///
    /// Each level's direct list comes before the lists of its children.
    pub fn all_nested_scoped_symbols(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut out = Vec::new();
        self.collect_nested(scope, &mut out, &|table, s| table.nested_scoped_symbols(s));
        out
    }

    /// All scopes, symbol bodies and blocks, nested at any depth below
    /// `scope`.
    pub fn all_nested_scopes(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut out = Vec::new();
        self.collect_nested(scope, &mut out, &|table, s| table.nested_scopes(s));
        out
    }

    fn collect_nested(
        &self,
        scope: ScopeId,
        out: &mut Vec<ScopeId>,
        children: &dyn Fn(&Self, ScopeId) -> Vec<ScopeId>,
    ) {
        let direct = children(self, scope);
        out.extend_from_slice(&direct);
        for child in direct {
            ensure_sufficient_stack(|| self.collect_nested(child, out, children));
        }
    }

    // === Enclosing Scopes ===

    /// Lexically enclosing scope; `None` for the root and for bodies of
    /// symbols not yet defined.
    pub fn enclosing_scope(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scope_data(scope).enclosing
    }

    /// `scope` followed by each enclosing scope up to the root.
    pub fn enclosing_path_to_root(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut path = vec![scope];
        let mut current = scope;
        while let Some(enclosing) = self.enclosing_scope(current) {
            path.push(enclosing);
            current = enclosing;
        }
        path
    }

    /// Last scope on the enclosing path; usually the predefined scope.
    pub fn outermost_enclosing_scope(&self, scope: ScopeId) -> ScopeId {
        let mut current = scope;
        while let Some(enclosing) = self.enclosing_scope(current) {
            current = enclosing;
        }
        current
    }

    /// First scope on the enclosing path, `scope` included, that is the
    /// body of a symbol whose kind matches `pred`.
    pub fn enclosing_scope_where(
        &self,
        scope: ScopeId,
        pred: impl Fn(SymbolKind) -> bool,
    ) -> Option<ScopeId> {
        self.enclosing_path_to_root(scope)
            .into_iter()
            .find(|&s| self.scope_owner(s).is_some_and(|owner| pred(self.kind(owner))))
    }

    /// Innermost function or method whose body encloses `scope`.
    pub fn enclosing_function(&self, scope: ScopeId) -> Option<SymbolId> {
        self.enclosing_scope_where(scope, SymbolKind::is_function_like)
            .and_then(|body| self.scope_owner(body))
    }

    // === Scope Identity ===

    pub fn scope_kind(&self, scope: ScopeId) -> ScopeKind {
        self.scope_data(scope).kind
    }

    /// Symbol whose body `scope` is.
    pub fn scope_owner(&self, scope: ScopeId) -> Option<SymbolId> {
        self.scope_data(scope).owner()
    }

    /// Display name of a scope: `predefined`, `global`, `local`, or the
    /// name of the owning symbol.
    pub fn scope_name(&self, scope: ScopeId) -> &str {
        match self.scope_kind(scope) {
            ScopeKind::Predefined => "predefined",
            ScopeKind::Global => "global",
            ScopeKind::Local => "local",
            ScopeKind::Symbol(owner) => self.name_str(owner),
        }
    }

    // === Functions ===

    /// Number of variables and parameters declared in a function's body.
    pub fn number_of_variables(&self, function: SymbolId) -> usize {
        self.count_in_body(function, |kind| {
            matches!(kind, SymbolKind::Variable | SymbolKind::Parameter)
        })
    }

    /// Number of parameters declared in a function's body.
    pub fn number_of_parameters(&self, function: SymbolId) -> usize {
        self.count_in_body(function, |kind| kind == SymbolKind::Parameter)
    }

    fn count_in_body(&self, symbol: SymbolId, pred: impl Fn(SymbolKind) -> bool) -> usize {
        self.body_scope(symbol).map_or(0, |body| {
            self.symbols(body)
                .iter()
                .filter(|&&member| pred(self.kind(member)))
                .count()
        })
    }
}
