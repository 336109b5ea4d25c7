use super::*;

#[test]
fn test_intern_and_lookup() {
    let mut interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let mut interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_get_does_not_intern() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), 1);

    let name = interner.intern("present");
    assert_eq!(interner.get("present"), Some(name));
}

#[test]
fn test_foreign_name_looks_up_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}

#[test]
fn test_names_are_dense() {
    let mut interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    assert_eq!(a.raw(), 1);
    assert_eq!(b.raw(), 2);
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn test_overflow_error_message() {
    let err = InternError::Overflow { count: 5 };
    assert!(err.to_string().contains("exceeded capacity"));
}
