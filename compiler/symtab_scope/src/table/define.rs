//! Symbol definition, block nesting and member slot assignment.

use symtab_ir::{ScopeId, SymbolId};

use super::SymbolTable;
use crate::scope::ScopeKind;
use crate::symbol::{Capabilities, SymbolDetail, SymbolKind};
use crate::{FieldLayout, SymbolError};

impl SymbolTable {
    /// Define `symbol` in `scope`.
    ///
    /// On success the symbol's owning scope and insertion order are set, a
    /// symbol-with-scope gets `scope` as the enclosing scope of its body,
    /// and members of an aggregate get their field or method slot.
    ///
    /// # Errors
    ///
    /// Fails without side effects if the symbol was already defined, if
    /// `scope` already holds a symbol of that name, if a non-member is
    /// defined into a struct or class, or if the definition would make the
    /// symbol's body enclose itself.
    ///
    /// A method (or, with [`FieldLayout::Inherited`], a field) is rejected
    /// while the class's superclass chain ends in a name that does not yet
    /// resolve to a class, because its slot would depend on members that
    /// are not visible yet.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn define(&mut self, scope: ScopeId, symbol: SymbolId) -> Result<(), SymbolError> {
        self.check_definable(scope, symbol)?;

        let order = self.scopes[scope.index()].members.len();
        let name = self.symbols[symbol.index()].name;
        {
            let data = &mut self.scopes[scope.index()];
            data.members.push(symbol);
            data.by_name.insert(name, symbol);
        }

        let entry = &mut self.symbols[symbol.index()];
        entry.scope = Some(scope);
        entry.order = Some(Self::to_u32(order));
        let body = entry.detail.body();
        if let Some(body) = body {
            self.scopes[body.index()].enclosing = Some(scope);
        }

        if let Some(owner) = self.scope_owner(scope) {
            if self.kind(owner).is_aggregate() {
                self.assign_slot(owner, symbol);
            }
        }
        Ok(())
    }

    fn check_definable(&self, scope: ScopeId, symbol: SymbolId) -> Result<(), SymbolError> {
        let entry = self.entry(symbol);
        let name = || self.names.lookup(entry.name).to_owned();

        if let Some(owner) = entry.scope {
            return Err(SymbolError::AlreadyDefined {
                name: name(),
                scope: self.scope_name(owner).to_owned(),
            });
        }

        let data = self.scope_data(scope);
        if data.by_name.contains_key(&entry.name) {
            return Err(SymbolError::DuplicateSymbol {
                name: name(),
                scope: self.scope_name(scope).to_owned(),
            });
        }

        let kind = entry.kind();
        if let Some(owner) = data.owner() {
            if self.kind(owner).is_aggregate() && !kind.capabilities().contains(Capabilities::MEMBER) {
                return Err(SymbolError::InvalidMember {
                    name: name(),
                    kind: kind.name(),
                    aggregate: self.name_str(owner).to_owned(),
                });
            }
            if self.slot_depends_on_superclass(kind) {
                if let Some((class, superclass)) = self.unresolved_superclass(owner) {
                    return Err(SymbolError::UnresolvedSuperclass {
                        member: name(),
                        class: self.name_str(class).to_owned(),
                        superclass: superclass.to_owned(),
                    });
                }
            }
        }

        if let Some(body) = entry.detail.body() {
            if self.enclosing_path_to_root(scope).contains(&body) {
                return Err(SymbolError::CyclicScope { name: name() });
            }
        }
        Ok(())
    }

    /// Attach an anonymous block to its enclosing scope, so that it is
    /// listed among the enclosing scope's nested scopes.
    ///
    /// Nesting the same block twice is a no-op.
    ///
    /// # Errors
    ///
    /// Symbols with scopes are attached by [`define`](Self::define) and are
    /// rejected here, as are blocks created with a different enclosing
    /// scope.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn nest(&mut self, parent: ScopeId, child: ScopeId) -> Result<(), SymbolError> {
        let data = self.scope_data(child);
        if let ScopeKind::Symbol(owner) = data.kind {
            return Err(SymbolError::NestedSymbolScope {
                name: self.name_str(owner).to_owned(),
            });
        }
        if data.enclosing != Some(parent) {
            return Err(SymbolError::EnclosingMismatch {
                child: self.scope_name(child).to_owned(),
                parent: self.scope_name(parent).to_owned(),
            });
        }

        let blocks = &mut self.scopes[parent.index()].blocks;
        if !blocks.contains(&child) {
            blocks.push(child);
        }
        Ok(())
    }

    /// Give a newly defined member of `aggregate` its slot.
    ///
    /// Fields take the next free field slot. A method that overrides a
    /// method visible through the superclass reuses that method's slot;
    /// any other method takes the next free method slot. Nested aggregates
    /// have no slot.
    fn assign_slot(&mut self, aggregate: SymbolId, member: SymbolId) {
        let slot = match self.kind(member) {
            SymbolKind::Field => self.next_field_slot(aggregate),
            SymbolKind::Method => {
                let name = self.entry(member).name;
                let inherited = self
                    .superclass(aggregate)
                    .and_then(|sup| self.resolve_method_by_name(sup, name))
                    .and_then(|method| self.slot(method));
                match inherited {
                    Some(slot) => slot,
                    None => self.next_method_slot(aggregate),
                }
            }
            _ => return,
        };

        tracing::debug!(
            aggregate = self.name_str(aggregate),
            member = self.name_str(member),
            slot,
            "assigned member slot"
        );
        if let Some(target) = self.symbols[member.index()].detail.slot_mut() {
            *target = Some(slot);
        }
    }

    fn slot_depends_on_superclass(&self, kind: SymbolKind) -> bool {
        match kind {
            SymbolKind::Method => true,
            SymbolKind::Field => self.config.field_layout == FieldLayout::Inherited,
            _ => false,
        }
    }

    /// The last class in `aggregate`'s inheritance chain, with its
    /// superclass name, if that name does not resolve to a class.
    fn unresolved_superclass(&self, aggregate: SymbolId) -> Option<(SymbolId, &str)> {
        let last = *self.inheritance_chain(aggregate).last()?;
        let name = self.superclass_name(last)?;
        self.superclass(last).is_none().then_some((last, name))
    }

    fn next_field_slot(&mut self, aggregate: SymbolId) -> u32 {
        let seeded = self
            .entry(aggregate)
            .detail
            .aggregate()
            .and_then(|a| a.next_field_slot);
        let slot = match seeded {
            Some(slot) => slot,
            None => self.field_slot_base(aggregate),
        };
        if let Some(a) = self.symbols[aggregate.index()].detail.aggregate_mut() {
            a.next_field_slot = Some(slot + 1);
        }
        slot
    }

    fn next_method_slot(&mut self, aggregate: SymbolId) -> u32 {
        let seeded = self
            .entry(aggregate)
            .detail
            .aggregate()
            .and_then(|a| a.next_method_slot);
        let slot = match seeded {
            Some(slot) => slot,
            None => self.method_slot_base(aggregate),
        };
        if let Some(a) = self.symbols[aggregate.index()].detail.aggregate_mut() {
            a.next_method_slot = Some(slot + 1);
        }
        slot
    }

    /// First field slot of an aggregate: 0, or with the inherited layout,
    /// the number of fields visible through the superclass.
    fn field_slot_base(&self, aggregate: SymbolId) -> u32 {
        match (self.config.field_layout, self.superclass(aggregate)) {
            (FieldLayout::Inherited, Some(sup)) => Self::to_u32(self.fields(sup).len()),
            _ => 0,
        }
    }

    /// First new-method slot of an aggregate: one past the highest slot
    /// visible through the superclass, so new methods never collide with
    /// inherited ones.
    fn method_slot_base(&self, aggregate: SymbolId) -> u32 {
        let Some(sup) = self.superclass(aggregate) else {
            return 0;
        };
        self.methods(sup)
            .into_iter()
            .filter_map(|method| self.slot(method))
            .max()
            .map_or(0, |highest| highest + 1)
    }

    /// Whether `symbol` is a class (used when walking superclass links).
    pub(crate) fn is_class(&self, symbol: SymbolId) -> bool {
        matches!(self.entry(symbol).detail, SymbolDetail::Class { .. })
    }
}
