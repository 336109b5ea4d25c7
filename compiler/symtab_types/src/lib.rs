//! Type model for the symbol table.
//!
//! A closed set of type kinds for statically or nominally typed source
//! languages:
//! - primitive types (by name, with an optional dispatch index)
//! - pointers, arrays (optionally fixed-size), function pointers
//! - aliases and aggregates, declared by symbols in the scope tree
//! - the invalid type, a sentinel for unresolved or erroneous types
//!
//! All types live in a [`Pool`] and are referenced by [`Idx`]. The pool
//! performs no resolution: it never looks names up in any scope.

mod flags;
mod idx;
mod pool;
mod tag;

pub use flags::TypeFlags;
pub use idx::Idx;
pub use pool::Pool;
pub use tag::Tag;
