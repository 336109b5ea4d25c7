//! Type pool: the single owner of every type value.
//!
//! Types are interned: constructing a type that already exists returns the
//! existing [`Idx`]. This gives the type model its equality rules for free:
//!
//! - Pointer, array and function types are equal iff their structure is
//!   equal (same children, same array length, same parameter order).
//! - Primitives are equal iff their names are equal.
//! - Aliases and aggregates are equal iff they were declared by the same
//!   symbol.
//!
//! Pool entries are immutable once created. The only side data that may be
//! attached later is the numeric type index used for dispatch tables.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use symtab_ir::{Name, SymbolId};

use crate::{Idx, Tag, TypeFlags};

/// A single type item in the pool.
///
/// - `tag`: identifies the type kind (see [`Tag`])
/// - `data`: child index, name, or extra index depending on the tag
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    data: u32,
}

/// Interning key: the tag plus the full payload that identifies the type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ItemKey {
    tag: Tag,
    payload: SmallVec<[u32; 4]>,
}

/// Raw `u32` stored for unbounded array lengths.
const UNBOUNDED: u32 = u32::MAX;

/// Pool of interned types.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    /// Variable-length payloads for complex and nominal types.
    extra: Vec<u32>,
    interned: FxHashMap<ItemKey, Idx>,
    /// Dispatch-table indices assigned by the front-end.
    type_indices: FxHashMap<Idx, u32>,
}

impl Pool {
    /// Create a pool holding only the invalid type.
    pub fn new() -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(64),
            flags: Vec::with_capacity(64),
            extra: Vec::new(),
            interned: FxHashMap::default(),
            type_indices: FxHashMap::default(),
        };
        let invalid = pool.intern(Tag::Invalid, 0);
        debug_assert_eq!(invalid, Idx::INVALID);
        pool
    }

    /// Number of types in the pool, including the invalid type.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the invalid type is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that `idx` refers to an entry of this pool.
    pub fn contains(&self, idx: Idx) -> bool {
        idx.index() < self.items.len()
    }

    // === Core Queries ===

    /// Get the kind of a type. Foreign indices read as [`Tag::Invalid`].
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items.get(idx.index()).map_or(Tag::Invalid, |item| item.tag)
    }

    /// Get the pre-computed flags of a type.
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags
            .get(idx.index())
            .copied()
            .unwrap_or(TypeFlags::HAS_INVALID)
    }

    fn data(&self, idx: Idx) -> u32 {
        self.items.get(idx.index()).map_or(0, |item| item.data)
    }

    fn extra_at(&self, idx: Idx, offset: usize) -> u32 {
        self.extra[self.data(idx) as usize + offset]
    }

    // === Accessors ===

    /// Name of a primitive type.
    pub fn primitive_name(&self, idx: Idx) -> Option<Name> {
        (self.tag(idx) == Tag::Primitive).then(|| Name::from_raw(self.data(idx)))
    }

    /// Declared name of a primitive, alias or aggregate type.
    pub fn type_name(&self, idx: Idx) -> Option<Name> {
        match self.tag(idx) {
            Tag::Primitive => self.primitive_name(idx),
            Tag::Alias | Tag::Aggregate => Some(Name::from_raw(self.extra_at(idx, 1))),
            _ => None,
        }
    }

    /// Target of a pointer type.
    pub fn pointer_target(&self, idx: Idx) -> Option<Idx> {
        (self.tag(idx) == Tag::Pointer).then(|| Idx::from_raw(self.data(idx)))
    }

    /// Element type of an array type.
    pub fn array_elem(&self, idx: Idx) -> Option<Idx> {
        (self.tag(idx) == Tag::Array).then(|| Idx::from_raw(self.extra_at(idx, 0)))
    }

    /// Fixed element count of an array type; `None` for unbounded arrays
    /// and non-array types.
    pub fn array_len(&self, idx: Idx) -> Option<u32> {
        if self.tag(idx) != Tag::Array {
            return None;
        }
        let len = self.extra_at(idx, 1);
        (len != UNBOUNDED).then_some(len)
    }

    /// Return type of a function type.
    pub fn function_return(&self, idx: Idx) -> Option<Idx> {
        if self.tag(idx) != Tag::Function {
            return None;
        }
        let count = self.extra_at(idx, 0) as usize;
        Some(Idx::from_raw(self.extra_at(idx, count + 1)))
    }

    /// Parameter types of a function type, in declaration order.
    pub fn function_params(&self, idx: Idx) -> SmallVec<[Idx; 4]> {
        if self.tag(idx) != Tag::Function {
            return SmallVec::new();
        }
        let count = self.extra_at(idx, 0) as usize;
        (0..count)
            .map(|i| Idx::from_raw(self.extra_at(idx, i + 1)))
            .collect()
    }

    /// Symbol that declared an alias or aggregate type.
    pub fn nominal_symbol(&self, idx: Idx) -> Option<SymbolId> {
        self.tag(idx)
            .is_nominal()
            .then(|| SymbolId::new(self.extra_at(idx, 0)))
    }

    /// Target of an alias type.
    pub fn alias_target(&self, idx: Idx) -> Option<Idx> {
        (self.tag(idx) == Tag::Alias).then(|| Idx::from_raw(self.extra_at(idx, 2)))
    }

    /// Follow aliases until a non-alias type is reached.
    ///
    /// Terminates: an alias can only target a type interned before it.
    pub fn resolve_alias(&self, mut idx: Idx) -> Idx {
        while let Some(target) = self.alias_target(idx) {
            idx = target;
        }
        idx
    }

    // === Type Indices ===

    /// Attach a dispatch-table index to a type.
    pub fn set_type_index(&mut self, idx: Idx, index: u32) {
        self.type_indices.insert(idx, index);
    }

    /// Dispatch-table index of a type, if one was assigned.
    pub fn type_index(&self, idx: Idx) -> Option<u32> {
        self.type_indices.get(&idx).copied()
    }

    // === Interning ===

    /// Intern a type whose identity fits in the `data` field.
    fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        let key = ItemKey {
            tag,
            payload: SmallVec::from_slice(&[data]),
        };
        if let Some(&idx) = self.interned.get(&key) {
            return idx;
        }

        let mut flags = TypeFlags::for_tag(tag);
        if tag == Tag::Pointer {
            flags = flags.with_child(self.flags(Idx::from_raw(data)));
        }
        self.push(key, Item { tag, data }, flags)
    }

    /// Intern a type whose identity is stored in the extra array.
    ///
    /// `children` are the payload entries that are type indices; their
    /// flags propagate into the new type.
    fn intern_complex(&mut self, tag: Tag, payload: &[u32], children: &[Idx]) -> Idx {
        let key = ItemKey {
            tag,
            payload: SmallVec::from_slice(payload),
        };
        if let Some(&idx) = self.interned.get(&key) {
            return idx;
        }

        let mut flags = children
            .iter()
            .fold(TypeFlags::for_tag(tag), |acc, &child| {
                acc.with_child(self.flags(child))
            });
        if tag == Tag::Array && payload.get(1).is_some_and(|&len| len != UNBOUNDED) {
            flags |= TypeFlags::IS_SIZED;
        }
        let extra_idx = Self::to_u32(self.extra.len());
        self.extra.extend_from_slice(payload);
        self.push(
            key,
            Item {
                tag,
                data: extra_idx,
            },
            flags,
        )
    }

    fn push(&mut self, key: ItemKey, item: Item, flags: TypeFlags) -> Idx {
        let idx = Idx::from_raw(Self::to_u32(self.items.len()));
        self.items.push(item);
        self.flags.push(flags);
        self.interned.insert(key, idx);
        idx
    }

    fn to_u32(len: usize) -> u32 {
        u32::try_from(len).unwrap_or_else(|_| panic!("type pool exceeded {} entries", u32::MAX))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
