//! Symtab IR - identifiers and handles shared by the symbol table crates.
//!
//! This crate contains the leaf data structures the rest of the workspace
//! builds on:
//! - `Name` and `StringInterner` for interned identifiers
//! - `StringTable` for dense, insertion-ordered string ids (constant pools)
//! - `ScopeId` / `SymbolId` arena handles
//! - `DefSite`, the opaque definition-site handle owned by the caller
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: no shared mutable references between scopes and
//!   symbols, only u32 handles into arenas owned by one table

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-stored handles.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ids;
mod interner;
mod name;
mod string_table;

pub use ids::{DefSite, ScopeId, SymbolId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use string_table::{SharedStringTable, StringTable};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DefSite, Name, ScopeId, SymbolId};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(ScopeId, 4);
    crate::static_assert_size!(SymbolId, 4);
    crate::static_assert_size!(DefSite, 4);
}
