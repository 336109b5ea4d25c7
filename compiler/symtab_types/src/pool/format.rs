//! Type formatting for debugging and diagnostics.

use symtab_ir::StringInterner;

use super::Pool;
use crate::{Idx, Tag};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Names of primitives, aliases and aggregates are looked up in
    /// `interner`.
    pub fn format_type(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, interner, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, interner: &StringInterner, buf: &mut String) {
        match self.tag(idx) {
            Tag::Invalid => buf.push_str("INVALID"),
            Tag::Primitive | Tag::Alias | Tag::Aggregate => {
                let name = self.type_name(idx).unwrap_or_default();
                buf.push_str(interner.lookup(name));
            }
            Tag::Pointer => {
                buf.push('*');
                if let Some(target) = self.pointer_target(idx) {
                    self.format_type_into(target, interner, buf);
                }
            }
            Tag::Array => {
                if let Some(elem) = self.array_elem(idx) {
                    self.format_type_into(elem, interner, buf);
                }
                buf.push('[');
                if let Some(len) = self.array_len(idx) {
                    buf.push_str(&len.to_string());
                }
                buf.push(']');
            }
            Tag::Function => {
                if let Some(ret) = self.function_return(idx) {
                    self.format_type_into(ret, interner, buf);
                }
                buf.push_str("(*)(");
                for (i, param) in self.function_params(idx).into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(param, interner, buf);
                }
                buf.push(')');
            }
        }
    }
}
