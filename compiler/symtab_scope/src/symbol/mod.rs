//! Symbol kinds and their capability sets.
//!
//! Every declarable name is one variant of [`SymbolDetail`], carrying only
//! the data its kind needs. What a symbol can *do* is described by its
//! [`Capabilities`]:
//!
//! | kind      | SCOPE | MEMBER | TYPE | TYPED |
//! |-----------|:-----:|:------:|:----:|:-----:|
//! | variable  |       |        |      |   x   |
//! | parameter |       |        |      |   x   |
//! | field     |       |   x    |      |   x   |
//! | function  |   x   |        |      |   x   |
//! | method    |   x   |   x    |      |   x   |
//! | struct    |   x   |   x    |  x   |       |
//! | class     |   x   |   x    |  x   |       |
//! | primitive |       |        |  x   |       |
//! | alias     |       |        |  x   |       |

use std::fmt;

use bitflags::bitflags;
use symtab_ir::{DefSite, Name, ScopeId};
use symtab_types::Idx;

bitflags! {
    /// Capability set of a symbol kind.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Capabilities: u8 {
        /// The symbol owns a scope of its own (functions, aggregates).
        const SCOPE = 1 << 0;
        /// The symbol may be defined into a data aggregate.
        const MEMBER = 1 << 1;
        /// The symbol can be used as a type.
        const TYPE = 1 << 2;
        /// The symbol has a declared (or return) type.
        const TYPED = 1 << 3;
    }
}

/// Kind of a symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Variable,
    Parameter,
    Field,
    Function,
    Method,
    Struct,
    Class,
    Primitive,
    Alias,
}

impl SymbolKind {
    /// Capability set of this kind.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            SymbolKind::Variable | SymbolKind::Parameter => Capabilities::TYPED,
            SymbolKind::Field => Capabilities::MEMBER.union(Capabilities::TYPED),
            SymbolKind::Function => Capabilities::SCOPE.union(Capabilities::TYPED),
            SymbolKind::Method => Capabilities::SCOPE
                .union(Capabilities::MEMBER)
                .union(Capabilities::TYPED),
            SymbolKind::Struct | SymbolKind::Class => Capabilities::SCOPE
                .union(Capabilities::MEMBER)
                .union(Capabilities::TYPE),
            SymbolKind::Primitive | SymbolKind::Alias => Capabilities::TYPE,
        }
    }

    /// Check if this kind is a data aggregate (struct or class).
    pub const fn is_aggregate(self) -> bool {
        matches!(self, SymbolKind::Struct | SymbolKind::Class)
    }

    /// Check if this kind is a function or method.
    pub const fn is_function_like(self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Method)
    }

    /// Lowercase kind name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Field => "field",
            SymbolKind::Function => "function",
            SymbolKind::Method => "method",
            SymbolKind::Struct => "struct",
            SymbolKind::Class => "class",
            SymbolKind::Primitive => "primitive type",
            SymbolKind::Alias => "type alias",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slot bookkeeping and type identity of a struct or class.
#[derive(Clone, Debug)]
pub(crate) struct Aggregate {
    /// Scope holding the members.
    pub body: ScopeId,
    /// The aggregate used as a type.
    pub ty: Idx,
    /// Next free field slot; `None` until the first field is defined.
    pub next_field_slot: Option<u32>,
    /// Next free method slot; `None` until the first new method is defined.
    pub next_method_slot: Option<u32>,
}

impl Aggregate {
    pub fn new(body: ScopeId, ty: Idx) -> Self {
        Aggregate {
            body,
            ty,
            next_field_slot: None,
            next_method_slot: None,
        }
    }
}

/// Per-kind payload of a symbol.
#[derive(Clone, Debug)]
pub(crate) enum SymbolDetail {
    Variable {
        ty: Option<Idx>,
    },
    Parameter {
        ty: Option<Idx>,
    },
    Field {
        ty: Option<Idx>,
        slot: Option<u32>,
    },
    Function {
        ret: Option<Idx>,
        body: ScopeId,
    },
    Method {
        ret: Option<Idx>,
        body: ScopeId,
        slot: Option<u32>,
    },
    Struct(Aggregate),
    Class {
        aggregate: Aggregate,
        /// Unresolved until looked up through the lexical enclosing scope.
        superclass: Option<Name>,
    },
    Primitive {
        ty: Idx,
    },
    Alias {
        ty: Idx,
        target: Idx,
    },
}

impl SymbolDetail {
    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolDetail::Variable { .. } => SymbolKind::Variable,
            SymbolDetail::Parameter { .. } => SymbolKind::Parameter,
            SymbolDetail::Field { .. } => SymbolKind::Field,
            SymbolDetail::Function { .. } => SymbolKind::Function,
            SymbolDetail::Method { .. } => SymbolKind::Method,
            SymbolDetail::Struct(_) => SymbolKind::Struct,
            SymbolDetail::Class { .. } => SymbolKind::Class,
            SymbolDetail::Primitive { .. } => SymbolKind::Primitive,
            SymbolDetail::Alias { .. } => SymbolKind::Alias,
        }
    }

    /// Scope owned by a symbol-with-scope.
    pub fn body(&self) -> Option<ScopeId> {
        match self {
            SymbolDetail::Function { body, .. } | SymbolDetail::Method { body, .. } => Some(*body),
            SymbolDetail::Struct(aggregate) | SymbolDetail::Class { aggregate, .. } => {
                Some(aggregate.body)
            }
            _ => None,
        }
    }

    pub fn aggregate(&self) -> Option<&Aggregate> {
        match self {
            SymbolDetail::Struct(aggregate) | SymbolDetail::Class { aggregate, .. } => {
                Some(aggregate)
            }
            _ => None,
        }
    }

    pub fn aggregate_mut(&mut self) -> Option<&mut Aggregate> {
        match self {
            SymbolDetail::Struct(aggregate) | SymbolDetail::Class { aggregate, .. } => {
                Some(aggregate)
            }
            _ => None,
        }
    }

    /// Declared type of a typed symbol (return type for functions).
    pub fn declared_type(&self) -> Option<Idx> {
        match self {
            SymbolDetail::Variable { ty }
            | SymbolDetail::Parameter { ty }
            | SymbolDetail::Field { ty, .. } => *ty,
            SymbolDetail::Function { ret, .. } | SymbolDetail::Method { ret, .. } => *ret,
            _ => None,
        }
    }

    /// Slot for the declared-type field, if the kind is typed.
    pub fn declared_type_mut(&mut self) -> Option<&mut Option<Idx>> {
        match self {
            SymbolDetail::Variable { ty }
            | SymbolDetail::Parameter { ty }
            | SymbolDetail::Field { ty, .. } => Some(ty),
            SymbolDetail::Function { ret, .. } | SymbolDetail::Method { ret, .. } => Some(ret),
            _ => None,
        }
    }

    /// The symbol used as a type (primitives, aliases, aggregates).
    pub fn as_type(&self) -> Option<Idx> {
        match self {
            SymbolDetail::Primitive { ty } | SymbolDetail::Alias { ty, .. } => Some(*ty),
            SymbolDetail::Struct(aggregate) | SymbolDetail::Class { aggregate, .. } => {
                Some(aggregate.ty)
            }
            _ => None,
        }
    }

    pub fn slot(&self) -> Option<u32> {
        match self {
            SymbolDetail::Field { slot, .. } | SymbolDetail::Method { slot, .. } => *slot,
            _ => None,
        }
    }

    pub fn slot_mut(&mut self) -> Option<&mut Option<u32>> {
        match self {
            SymbolDetail::Field { slot, .. } | SymbolDetail::Method { slot, .. } => Some(slot),
            _ => None,
        }
    }
}

/// A symbol in the arena.
#[derive(Clone, Debug)]
pub(crate) struct SymbolEntry {
    /// Identity key; symbols compare equal iff their names are equal.
    pub name: Name,
    /// Scope whose member map holds this symbol; set once by `define`.
    pub scope: Option<ScopeId>,
    /// Position in the owning scope; set once by `define`.
    pub order: Option<u32>,
    pub def_site: Option<DefSite>,
    pub detail: SymbolDetail,
}

impl SymbolEntry {
    pub fn new(name: Name, detail: SymbolDetail) -> Self {
        SymbolEntry {
            name,
            scope: None,
            order: None,
            def_site: None,
            detail,
        }
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.detail.kind()
    }
}

#[cfg(test)]
mod tests;
