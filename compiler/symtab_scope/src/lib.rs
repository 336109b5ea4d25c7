//! Scope tree, symbol definition and name resolution.
//!
//! A [`SymbolTable`] tracks where names are declared and resolves
//! references to those declarations for a language front-end. The
//! front-end creates symbols as it walks its syntax tree, defines them into
//! the active scope, and later resolves identifiers:
//!
//! ```
//! use symtab_scope::SymbolTable;
//!
//! let mut table = SymbolTable::new();
//! table.init_type_system(&["int"]).ok();
//! let int = table.resolve(table.globals(), "int").and_then(|s| table.as_type(s));
//!
//! let x = table.new_variable("x", int);
//! table.define_global(x).ok();
//! assert_eq!(table.resolve(table.globals(), "x"), Some(x));
//! ```
//!
//! # Scope axes
//!
//! Every scope has a lexical *enclosing* scope. Class bodies additionally
//! have a *parent* along the inheritance axis: the body of the superclass.
//! Name lookup inside a class consults the superclass chain before leaving
//! the class lexically.
//!
//! # Slots
//!
//! Members defined into a struct or class receive a slot number as a side
//! effect of [`SymbolTable::define`]: fields number 0, 1, ... per aggregate
//! and methods share one dispatch numbering across the inheritance chain,
//! with overrides reusing the overridden method's slot.
//!
//! # Tracing
//!
//! Definitions, lookups and slot assignments emit `tracing` events. Call
//! [`init_tracing`] and set `RUST_LOG=symtab_scope=trace` to see them.

mod config;
mod error;
mod scope;
mod scope_stack;
mod stack;
mod symbol;
mod table;

use std::sync::Once;

pub use config::{FieldLayout, SymtabConfig, INDENT_WIDTH, PATH_SEPARATOR};
pub use error::{ErrorCode, SymbolError};
pub use scope::ScopeKind;
pub use scope_stack::ScopeStack;
pub use symbol::{Capabilities, SymbolKind};
pub use table::SymbolTable;

pub use symtab_ir::{DefSite, Name, ScopeId, StringTable, SymbolId};
pub use symtab_types::{Idx, Pool, Tag, TypeFlags};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=symtab_scope=debug` or `RUST_LOG=symtab_scope=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
