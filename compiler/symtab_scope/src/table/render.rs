//! Text renderings of scopes and symbols for diagnostics and tests.

use std::fmt::Write;

use symtab_ir::{ScopeId, SymbolId};
use symtab_types::{Idx, Tag};

use super::SymbolTable;
use crate::stack::ensure_sufficient_stack;

impl SymbolTable {
    /// Scope names from `scope` out to the root, innermost first
    /// (`block:method:Class:global:predefined` with `":"`).
    pub fn scope_stack_string(&self, scope: ScopeId, separator: &str) -> String {
        self.join_scope_names(self.enclosing_path_to_root(scope), separator)
    }

    /// Scope names from the root in to `scope`, outermost first
    /// (`predefined.global.Class.method` with `"."`).
    pub fn qualifier_string(&self, scope: ScopeId, separator: &str) -> String {
        let mut path = self.enclosing_path_to_root(scope);
        path.reverse();
        self.join_scope_names(path, separator)
    }

    /// Qualifier of the symbol's owning scope followed by its name.
    ///
    /// A symbol that is not yet defined renders as its bare name.
    pub fn fully_qualified_name(&self, symbol: SymbolId, separator: &str) -> String {
        match self.owning_scope(symbol) {
            Some(scope) => {
                let mut out = self.qualifier_string(scope, separator);
                out.push_str(separator);
                out.push_str(self.name_str(symbol));
                out
            }
            None => self.name_str(symbol).to_owned(),
        }
    }

    /// [`fully_qualified_name`](Self::fully_qualified_name) with the
    /// configured path separator.
    pub fn qualified_name(&self, symbol: SymbolId) -> String {
        self.fully_qualified_name(symbol, self.config.path_separator)
    }

    /// `scope.name` for every symbol in [`all_symbols`](Self::all_symbols),
    /// joined with `", "`.
    pub fn test_string(&self, scope: ScopeId) -> String {
        let separator = self.config.path_separator;
        let mut out = String::new();
        for (i, symbol) in self.all_symbols(scope).into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if let Some(owner) = self.owning_scope(symbol) {
                out.push_str(self.scope_name(owner));
                out.push_str(separator);
            }
            out.push_str(self.name_str(symbol));
        }
        out
    }

    /// A symbol as `<scope.name:type>`, or `scope.name` when it has no
    /// declared type.
    ///
    /// Aggregate types render by their qualified name.
    pub fn display_symbol(&self, symbol: SymbolId) -> String {
        let mut out = String::new();
        if let Some(scope) = self.owning_scope(symbol) {
            out.push_str(self.scope_name(scope));
            out.push('.');
        }
        out.push_str(self.name_str(symbol));
        match self.ty(symbol) {
            Some(ty) => format!("<{out}:{}>", self.display_type(ty)),
            None => out,
        }
    }

    fn display_type(&self, ty: Idx) -> String {
        match (self.types.tag(ty), self.types.nominal_symbol(ty)) {
            (Tag::Aggregate, Some(declared)) if declared.index() < self.symbol_count() => {
                self.fully_qualified_name(declared, ".")
            }
            _ => self.format_type(ty),
        }
    }

    /// Indented tree of `scope`: its name, the symbols it defines that do
    /// not own scopes, then each nested scope one level deeper.
    pub fn render_scope(&self, scope: ScopeId) -> String {
        let mut out = String::new();
        self.render_into(scope, 0, &mut out);
        out
    }

    /// [`render_scope`](Self::render_scope) from the predefined root.
    pub fn render(&self) -> String {
        self.render_scope(self.predefined)
    }

    fn render_into(&self, scope: ScopeId, level: usize, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}{}", self.config.indent(level), self.scope_name(scope));
        let indent = self.config.indent(level + 1);
        for &symbol in self.symbols(scope) {
            if self.body_scope(symbol).is_none() {
                let _ = writeln!(out, "{indent}{}", self.display_symbol(symbol));
            }
        }
        for nested in self.nested_scopes(scope) {
            ensure_sufficient_stack(|| self.render_into(nested, level + 1, out));
        }
    }

    fn join_scope_names(&self, scopes: Vec<ScopeId>, separator: &str) -> String {
        let mut out = String::new();
        for (i, scope) in scopes.into_iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(self.scope_name(scope));
        }
        out
    }
}
