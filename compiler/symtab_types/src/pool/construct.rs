//! Type construction helpers for the Pool.
//!
//! Constructors are pure: they never look names up. A front-end that wants
//! "the type named X" resolves the declaring symbol itself and uses that
//! symbol's type.

use symtab_ir::{Name, SymbolId};

use super::{Pool, UNBOUNDED};
use crate::{Idx, Tag};

impl Pool {
    // === Leaf Constructors ===

    /// Create (or find) the primitive type called `name`.
    pub fn primitive(&mut self, name: Name) -> Idx {
        self.intern(Tag::Primitive, name.raw())
    }

    // === Wrapper Constructors ===

    /// Create a pointer type `*target`.
    pub fn pointer(&mut self, target: Idx) -> Idx {
        self.intern(Tag::Pointer, target.raw())
    }

    /// Create an array type `elem[]` with no fixed length.
    pub fn array(&mut self, elem: Idx) -> Idx {
        self.intern_complex(Tag::Array, &[elem.raw(), UNBOUNDED], &[elem])
    }

    /// Create an array type `elem[len]`.
    ///
    /// `u32::MAX` is reserved for unbounded arrays and yields the same type
    /// as [`Pool::array`].
    pub fn sized_array(&mut self, elem: Idx, len: u32) -> Idx {
        self.intern_complex(Tag::Array, &[elem.raw(), len], &[elem])
    }

    // === Function Constructor ===

    /// Create a function pointer type returning `ret` and taking `params`.
    pub fn function(&mut self, ret: Idx, params: &[Idx]) -> Idx {
        // Layout: [param_count, param0, param1, ..., return_type]
        let mut extra = Vec::with_capacity(params.len() + 2);
        extra.push(Self::to_u32(params.len()));
        extra.extend(params.iter().map(|p| p.raw()));
        extra.push(ret.raw());

        let mut children = Vec::with_capacity(params.len() + 1);
        children.extend_from_slice(params);
        children.push(ret);

        self.intern_complex(Tag::Function, &extra, &children)
    }

    // === Nominal Constructors ===

    /// Create the alias type declared by `symbol`, naming `target`.
    ///
    /// Aliases are nominal: two aliases with identical targets declared by
    /// different symbols are different types.
    pub fn alias(&mut self, symbol: SymbolId, name: Name, target: Idx) -> Idx {
        self.intern_complex(
            Tag::Alias,
            &[symbol.raw(), name.raw(), target.raw()],
            &[target],
        )
    }

    /// Create the aggregate (struct/class) type declared by `symbol`.
    pub fn aggregate(&mut self, symbol: SymbolId, name: Name) -> Idx {
        self.intern_complex(Tag::Aggregate, &[symbol.raw(), name.raw()], &[])
    }
}
