//! Name resolution along the two scope axes.
//!
//! - **Lexical**: a scope, then its enclosing scope, up to the root.
//! - **Inheritance**: a class, then its superclass chain. Inside a class
//!   body, members found through the superclass chain win over names in
//!   the lexically enclosing scopes.

use rustc_hash::FxHashSet;
use symtab_ir::{Name, ScopeId, SymbolId};

use super::SymbolTable;
use crate::symbol::{SymbolDetail, SymbolKind};
use crate::SymbolError;

impl SymbolTable {
    /// Look `name` up starting at `scope`.
    ///
    /// Checks the scope itself (for class bodies, the class and its
    /// superclasses), then each enclosing scope in turn.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let name = self.names.get(name)?;
        self.resolve_name(scope, name)
    }

    /// Like [`resolve`](Self::resolve), reporting a miss as an error.
    pub fn try_resolve(&self, scope: ScopeId, name: &str) -> Result<SymbolId, SymbolError> {
        self.resolve(scope, name)
            .ok_or_else(|| SymbolError::Unresolved {
                name: name.to_owned(),
                scope: self.scope_name(scope).to_owned(),
            })
    }

    /// Look `name` up in `scope` only.
    pub fn get_symbol(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let name = self.names.get(name)?;
        self.scope_data(scope).by_name.get(&name).copied()
    }

    pub(crate) fn resolve_name(&self, scope: ScopeId, name: Name) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let data = self.scope_data(id);
            let found = match data.owner() {
                Some(owner) if self.kind(owner).is_aggregate() => {
                    self.resolve_member_by_name(owner, name)
                }
                _ => data.by_name.get(&name).copied(),
            };
            if found.is_some() {
                return found;
            }
            current = data.enclosing;
        }
        None
    }

    // === Members ===

    /// Look a member up in `aggregate`, then in its superclass chain.
    pub fn resolve_member(&self, aggregate: SymbolId, name: &str) -> Option<SymbolId> {
        let name = self.names.get(name)?;
        self.resolve_member_by_name(aggregate, name)
    }

    /// Look a field up in `aggregate` and its superclasses.
    ///
    /// Returns `None` if the nearest member with that name is not a field.
    pub fn resolve_field(&self, aggregate: SymbolId, name: &str) -> Option<SymbolId> {
        self.resolve_member(aggregate, name)
            .filter(|&member| self.kind(member) == SymbolKind::Field)
    }

    /// Look a method up in `aggregate` and its superclasses.
    ///
    /// Returns `None` if the nearest member with that name is not a method.
    pub fn resolve_method(&self, aggregate: SymbolId, name: &str) -> Option<SymbolId> {
        let name = self.names.get(name)?;
        self.resolve_method_by_name(aggregate, name)
    }

    pub(crate) fn resolve_member_by_name(&self, aggregate: SymbolId, name: Name) -> Option<SymbolId> {
        self.inheritance_chain(aggregate).into_iter().find_map(|class| {
            let body = self.body_scope(class)?;
            self.scope_data(body).by_name.get(&name).copied()
        })
    }

    pub(crate) fn resolve_method_by_name(&self, aggregate: SymbolId, name: Name) -> Option<SymbolId> {
        self.resolve_member_by_name(aggregate, name)
            .filter(|&member| self.kind(member) == SymbolKind::Method)
    }

    // === Inheritance ===

    /// Unresolved superclass name of a class.
    pub fn superclass_name(&self, class: SymbolId) -> Option<&str> {
        match self.entry(class).detail {
            SymbolDetail::Class {
                superclass: Some(name),
                ..
            } => Some(self.names.lookup(name)),
            _ => None,
        }
    }

    /// The class named as `class`'s superclass, looked up through the scope
    /// enclosing `class`.
    ///
    /// `None` if there is no superclass name, if `class` is not yet
    /// defined, or if the name does not resolve to a class.
    ///
    /// The name is looked up again on every call; nothing is cached, so
    /// a superclass defined later is picked up. Walks over the whole chain
    /// ([`methods`](Self::methods), slot assignment) therefore cost one
    /// lookup per level.
    pub fn superclass(&self, class: SymbolId) -> Option<SymbolId> {
        let SymbolDetail::Class {
            superclass: Some(name),
            ..
        } = self.entry(class).detail
        else {
            return None;
        };
        let enclosing = self.entry(class).scope?;
        let resolved = self
            .resolve_name(enclosing, name)
            .filter(|&sup| self.is_class(sup));
        if resolved.is_none() {
            tracing::debug!(
                class = self.name_str(class),
                superclass = self.names.lookup(name),
                "superclass does not resolve to a class"
            );
        }
        resolved
    }

    /// Superclasses of `class`, nearest first.
    ///
    /// Stops at the first class seen twice, so inheritance cycles yield a
    /// finite chain.
    pub fn superclass_chain(&self, class: SymbolId) -> Vec<SymbolId> {
        let mut chain = self.inheritance_chain(class);
        chain.remove(0);
        chain
    }

    /// `aggregate` followed by its superclasses, nearest first.
    pub(crate) fn inheritance_chain(&self, aggregate: SymbolId) -> Vec<SymbolId> {
        let mut chain = vec![aggregate];
        let mut seen = FxHashSet::default();
        seen.insert(aggregate);
        let mut current = aggregate;
        while let Some(sup) = self.superclass(current) {
            if !seen.insert(sup) {
                break;
            }
            chain.push(sup);
            current = sup;
        }
        chain
    }

    /// Resolution parent of a scope: the superclass body for a class with
    /// a resolved superclass, otherwise the enclosing scope.
    pub fn parent_scope(&self, scope: ScopeId) -> Option<ScopeId> {
        let data = self.scope_data(scope);
        data.owner()
            .and_then(|owner| self.superclass(owner))
            .and_then(|sup| self.body_scope(sup))
            .or(data.enclosing)
    }
}
