//! String interner for symbol names.
//!
//! Every symbol name is interned once; scopes key their member maps by the
//! resulting [`Name`], so name lookup and symbol equality never compare
//! string contents.

use super::Name;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings (0x{:X}), max is {} (0x{:X})",
                count,
                count,
                u32::MAX,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Interner mapping strings to compact [`Name`] handles.
///
/// Index 0 is always the empty string ([`Name::EMPTY`]).
#[derive(Clone, Debug)]
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert(Box::from(""), Name::EMPTY);
        Self {
            map,
            strings: vec![Box::from("")],
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(raw);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up a string that was already interned, without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
