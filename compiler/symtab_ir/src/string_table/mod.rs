//! Dense string table for bytecode and code-generation consumers.
//!
//! Unlike [`StringInterner`], whose names are an implementation detail of
//! the symbol table, a `StringTable` hands its ids to the outside world:
//! instructions refer to strings by id, and the table is later emitted as a
//! constant pool in id order. Ids start at 0 and are never reused,
//! reordered, or removed.
//!
//! [`StringInterner`]: crate::StringInterner

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A unique set of strings mapped to monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringTable {
    /// Map from string content to its id.
    ids: FxHashMap<String, u32>,
    /// Strings in id order.
    strings: Vec<String>,
}

impl StringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string, returning its id.
    ///
    /// Returns the existing id if `s` was added before; otherwise assigns
    /// the next id.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are added.
    pub fn add(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.ids.get(s) {
            return id;
        }
        let id = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string table exceeded {} entries", u32::MAX));
        self.strings.push(s.to_owned());
        self.ids.insert(s.to_owned(), id);
        id
    }

    /// Get the string with id `id`, or `None` if out of range.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.strings.get(id as usize).map(String::as_str)
    }

    /// Get the id of `s` if it was added.
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.ids.get(s).copied()
    }

    /// Number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if no strings have been added.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate strings in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    /// All strings, each sitting at its id.
    pub fn to_vec(&self) -> Vec<String> {
        self.strings.clone()
    }
}

impl fmt::Display for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (id, s) in self.strings.iter().enumerate() {
            if id > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{s}={id}")?;
        }
        f.write_str("}")
    }
}

/// Thread-safe shared string table.
///
/// Use this when several code generators emit into one constant pool over a
/// published (read-only) symbol table. Cloning shares the same table.
#[derive(Clone, Default)]
pub struct SharedStringTable(Arc<RwLock<StringTable>>);

impl SharedStringTable {
    /// Create a new empty shared table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string, returning its id.
    pub fn add(&self, s: &str) -> u32 {
        // Fast path: already present
        if let Some(id) = self.0.read().id_of(s) {
            return id;
        }
        self.0.write().add(s)
    }

    /// Get an owned copy of the string with id `id`.
    pub fn get(&self, id: u32) -> Option<String> {
        self.0.read().get(id).map(str::to_owned)
    }

    /// Get the id of `s` if it was added.
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.0.read().id_of(s)
    }

    /// Number of strings in the table.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Check if no strings have been added.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Copy out the current contents.
    pub fn snapshot(&self) -> StringTable {
        self.0.read().clone()
    }
}

impl fmt::Debug for SharedStringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedStringTable").field(&*self.0.read()).finish()
    }
}
