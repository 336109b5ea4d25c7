//! Errors raised by the scope tree.
//!
//! Apart from [`SymbolError::Unresolved`], every variant is a contract
//! violation by the caller: it is reported at the offending call, and the
//! call has no side effects. What to do next (skip the declaration, report
//! it, abort) is the front-end's decision.

use std::fmt;

/// Error codes for symbol-table diagnostics.
///
/// Format: E#### in the type/name-resolution phase range (E2xxx), so the
/// codes slot into a front-end's own diagnostic numbering.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unknown identifier
    E2003,
    /// Duplicate definition
    E2006,
    /// Non-member defined into a data aggregate
    E2040,
    /// Symbol defined twice
    E2041,
    /// Symbol-with-scope passed to `nest`
    E2042,
    /// Nested block whose enclosing scope is elsewhere
    E2043,
    /// Definition would make a scope enclose itself
    E2044,
    /// Type set on a symbol that has no declared type
    E2045,
    /// Slotted member defined before its class's superclass resolves
    E2046,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E2006").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2040 => "E2040",
            ErrorCode::E2041 => "E2041",
            ErrorCode::E2042 => "E2042",
            ErrorCode::E2043 => "E2043",
            ErrorCode::E2044 => "E2044",
            ErrorCode::E2045 => "E2045",
            ErrorCode::E2046 => "E2046",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbol table error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// A symbol with this name already exists in the target scope.
    #[error("duplicate symbol `{name}` in scope `{scope}`")]
    DuplicateSymbol { name: String, scope: String },

    /// Only fields, methods and nested aggregates may live in an aggregate.
    #[error("`{name}` is a {kind}, not a member; it cannot be defined in `{aggregate}`")]
    InvalidMember {
        name: String,
        kind: &'static str,
        aggregate: String,
    },

    /// A name could not be resolved from the given scope.
    #[error("unresolved reference `{name}` from scope `{scope}`")]
    Unresolved { name: String, scope: String },

    /// Symbols are defined into exactly one scope, exactly once.
    #[error("symbol `{name}` is already defined in scope `{scope}`")]
    AlreadyDefined { name: String, scope: String },

    /// Symbols with scopes must be added with `define`.
    #[error("`{name}` is a symbol with a scope; add it with define, not nest")]
    NestedSymbolScope { name: String },

    /// A block can only be nested in its own enclosing scope.
    #[error("cannot nest `{child}` in `{parent}`: its enclosing scope is elsewhere")]
    EnclosingMismatch { child: String, parent: String },

    /// The definition would make a scope enclose itself.
    #[error("defining `{name}` here would make its scope enclose itself")]
    CyclicScope { name: String },

    /// `set_type` on a symbol kind without a declared type.
    #[error("`{name}` is a {kind} and has no declared type")]
    NotTyped { name: String, kind: &'static str },

    /// Slots depend on the superclass, so it must resolve before members
    /// that take a slot are defined.
    #[error("cannot define `{member}` in `{class}`: superclass `{superclass}` does not resolve to a class yet")]
    UnresolvedSuperclass {
        member: String,
        class: String,
        superclass: String,
    },
}

impl SymbolError {
    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SymbolError::Unresolved { .. } => ErrorCode::E2003,
            SymbolError::DuplicateSymbol { .. } => ErrorCode::E2006,
            SymbolError::InvalidMember { .. } => ErrorCode::E2040,
            SymbolError::AlreadyDefined { .. } => ErrorCode::E2041,
            SymbolError::NestedSymbolScope { .. } => ErrorCode::E2042,
            SymbolError::EnclosingMismatch { .. } => ErrorCode::E2043,
            SymbolError::CyclicScope { .. } => ErrorCode::E2044,
            SymbolError::NotTyped { .. } => ErrorCode::E2045,
            SymbolError::UnresolvedSuperclass { .. } => ErrorCode::E2046,
        }
    }

    /// Whether this is an expected lookup miss rather than a contract
    /// violation.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, SymbolError::Unresolved { .. })
    }
}

#[cfg(test)]
mod tests;
