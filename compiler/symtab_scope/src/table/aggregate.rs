//! Member bookkeeping for structs and classes.

use symtab_ir::SymbolId;
use symtab_types::Idx;

use super::SymbolTable;
use crate::symbol::SymbolKind;

impl SymbolTable {
    /// Fields defined directly in `aggregate`, in definition order.
    pub fn defined_fields(&self, aggregate: SymbolId) -> Vec<SymbolId> {
        self.defined_members(aggregate, SymbolKind::Field)
    }

    /// Methods defined directly in `aggregate`, in definition order.
    pub fn defined_methods(&self, aggregate: SymbolId) -> Vec<SymbolId> {
        self.defined_members(aggregate, SymbolKind::Method)
    }

    /// Fields visible in `aggregate`: inherited fields first, outermost
    /// superclass first, then the aggregate's own.
    ///
    /// A field that redeclares an inherited name takes that field's place
    /// in the list.
    pub fn fields(&self, aggregate: SymbolId) -> Vec<SymbolId> {
        self.visible_members(aggregate, SymbolKind::Field)
    }

    /// Methods visible in `aggregate`.
    ///
    /// An override takes the place of the method it overrides, and new
    /// methods are appended, so for a well-formed hierarchy the list is in
    /// slot order.
    ///
    /// The list is rebuilt from the superclass chain on every call, so a
    /// hierarchy of depth `d` costs `O(d)` name lookups plus the members
    /// of every level.
    pub fn methods(&self, aggregate: SymbolId) -> Vec<SymbolId> {
        self.visible_members(aggregate, SymbolKind::Method)
    }

    pub fn number_of_defined_fields(&self, aggregate: SymbolId) -> usize {
        self.count_members(aggregate, SymbolKind::Field)
    }

    pub fn number_of_defined_methods(&self, aggregate: SymbolId) -> usize {
        self.count_members(aggregate, SymbolKind::Method)
    }

    /// Number of fields visible in `aggregate`, inherited ones included.
    pub fn number_of_fields(&self, aggregate: SymbolId) -> usize {
        self.fields(aggregate).len()
    }

    /// Number of methods visible in `aggregate`; an override counts once.
    pub fn number_of_methods(&self, aggregate: SymbolId) -> usize {
        self.methods(aggregate).len()
    }

    /// The aggregate used as a type.
    pub fn aggregate_type(&self, aggregate: SymbolId) -> Option<Idx> {
        self.entry(aggregate)
            .detail
            .aggregate()
            .map(|aggregate| aggregate.ty)
    }

    /// Caller-assigned index of a type symbol (primitive, alias or
    /// aggregate), used by code generators to number types.
    pub fn type_index(&self, symbol: SymbolId) -> Option<u32> {
        self.as_type(symbol)
            .and_then(|ty| self.types.type_index(ty))
    }

    /// Assign the type index of a type symbol. Ignored for symbols that
    /// are not types.
    pub fn set_type_index(&mut self, symbol: SymbolId, index: u32) {
        if let Some(ty) = self.as_type(symbol) {
            self.types.set_type_index(ty, index);
        }
    }

    fn members(&self, aggregate: SymbolId) -> &[SymbolId] {
        match self.body_scope(aggregate) {
            Some(body) => &self.scope_data(body).members,
            None => &[],
        }
    }

    fn defined_members(&self, aggregate: SymbolId, kind: SymbolKind) -> Vec<SymbolId> {
        self.members(aggregate)
            .iter()
            .copied()
            .filter(|&member| self.kind(member) == kind)
            .collect()
    }

    fn count_members(&self, aggregate: SymbolId, kind: SymbolKind) -> usize {
        self.members(aggregate)
            .iter()
            .filter(|&&member| self.kind(member) == kind)
            .count()
    }

    fn visible_members(&self, aggregate: SymbolId, kind: SymbolKind) -> Vec<SymbolId> {
        if !self.kind(aggregate).is_aggregate() {
            return Vec::new();
        }

        let mut visible: Vec<SymbolId> = Vec::new();
        for class in self.inheritance_chain(aggregate).into_iter().rev() {
            for member in self.defined_members(class, kind) {
                match visible
                    .iter()
                    .position(|&seen| self.symbols_equal(seen, member))
                {
                    Some(pos) => visible[pos] = member,
                    None => visible.push(member),
                }
            }
        }
        visible
    }
}
