use super::*;
use pretty_assertions::assert_eq;
use symtab_ir::StringInterner;

fn setup() -> (Pool, StringInterner) {
    (Pool::new(), StringInterner::new())
}

#[test]
fn pool_starts_with_invalid() {
    let pool = Pool::new();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.tag(Idx::INVALID), Tag::Invalid);
    assert!(pool.flags(Idx::INVALID).has_invalid());
}

#[test]
fn primitives_are_equal_by_name() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let int2 = pool.primitive(names.intern("int"));
    let float = pool.primitive(names.intern("float"));

    assert_eq!(int, int2);
    assert_ne!(int, float);
    assert!(pool.flags(int).contains(TypeFlags::IS_PRIMITIVE));
    assert_eq!(pool.primitive_name(int), names.get("int"));
}

#[test]
fn pointers_are_structural() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let p1 = pool.pointer(int);
    let p2 = pool.pointer(int);
    let pp = pool.pointer(p1);

    assert_eq!(p1, p2);
    assert_ne!(p1, pp);
    assert_eq!(pool.pointer_target(pp), Some(p1));
    assert_eq!(pool.pointer_target(int), None);
}

#[test]
fn arrays_distinguish_length() {
    let (mut pool, mut names) = setup();
    let char_ty = pool.primitive(names.intern("char"));
    let open = pool.array(char_ty);
    let four = pool.sized_array(char_ty, 4);
    let four_again = pool.sized_array(char_ty, 4);
    let unbounded = pool.sized_array(char_ty, u32::MAX);

    assert_ne!(open, four);
    assert_eq!(four, four_again);
    assert_eq!(open, unbounded);
    assert_eq!(pool.array_len(open), None);
    assert_eq!(pool.array_len(four), Some(4));
    assert_eq!(pool.array_elem(four), Some(char_ty));
    assert!(pool.flags(four).contains(TypeFlags::IS_ARRAY));
    assert!(pool.flags(four).contains(TypeFlags::IS_SIZED));
    assert!(!pool.flags(open).contains(TypeFlags::IS_SIZED));
}

#[test]
fn functions_compare_params_in_order() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let float = pool.primitive(names.intern("float"));

    let f1 = pool.function(int, &[int, float]);
    let f2 = pool.function(int, &[int, float]);
    let swapped = pool.function(int, &[float, int]);
    let other_ret = pool.function(float, &[int, float]);
    let nullary = pool.function(int, &[]);

    assert_eq!(f1, f2);
    assert_ne!(f1, swapped);
    assert_ne!(f1, other_ret);
    assert_ne!(f1, nullary);

    assert_eq!(pool.function_return(f1), Some(int));
    assert_eq!(pool.function_params(f1).as_slice(), &[int, float]);
    assert!(pool.function_params(nullary).is_empty());
    assert_eq!(pool.function_return(int), None);
}

#[test]
fn aliases_are_nominal() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let ptr = pool.pointer(int);
    let name = names.intern("IntPtr");

    let a = pool.alias(SymbolId::new(1), name, ptr);
    let b = pool.alias(SymbolId::new(2), name, ptr);
    let a_again = pool.alias(SymbolId::new(1), name, ptr);

    assert_ne!(a, b);
    assert_eq!(a, a_again);
    assert_eq!(pool.alias_target(a), Some(ptr));
    assert_eq!(pool.nominal_symbol(b), Some(SymbolId::new(2)));
    assert_eq!(pool.type_name(a), Some(name));
    assert_eq!(pool.resolve_alias(a), ptr);
}

#[test]
fn resolve_alias_follows_chains() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let i = pool.alias(SymbolId::new(0), names.intern("I"), int);
    let j = pool.alias(SymbolId::new(1), names.intern("J"), i);
    assert_eq!(pool.resolve_alias(j), int);
    assert_eq!(pool.resolve_alias(int), int);
}

#[test]
fn invalid_propagates_through_composites() {
    let (mut pool, _) = setup();
    let ptr = pool.pointer(Idx::INVALID);
    let arr = pool.array(ptr);
    let func = pool.function(Idx::INVALID, &[]);
    assert!(pool.flags(ptr).has_invalid());
    assert!(pool.flags(arr).has_invalid());
    assert!(pool.flags(func).has_invalid());
}

#[test]
fn type_indices_are_optional() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let ptr = pool.pointer(int);

    assert_eq!(pool.type_index(int), None);
    pool.set_type_index(int, 1);
    assert_eq!(pool.type_index(int), Some(1));
    assert_eq!(pool.type_index(ptr), None);
}

#[test]
fn foreign_index_reads_as_invalid() {
    let pool = Pool::new();
    let foreign = Idx::from_raw(500);
    assert!(!pool.contains(foreign));
    assert_eq!(pool.tag(foreign), Tag::Invalid);
    assert_eq!(pool.pointer_target(foreign), None);
}

#[test]
fn format_types() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    let char_ty = pool.primitive(names.intern("char"));
    let float = pool.primitive(names.intern("float"));
    let point = pool.aggregate(SymbolId::new(3), names.intern("Point"));

    let ptr = pool.pointer(int);
    assert_eq!(pool.format_type(ptr, &names), "*int");

    let open = pool.array(int);
    assert_eq!(pool.format_type(open, &names), "int[]");

    let sized = pool.sized_array(point, 4);
    assert_eq!(pool.format_type(sized, &names), "Point[4]");

    let func = pool.function(int, &[char_ty, float]);
    assert_eq!(pool.format_type(func, &names), "int(*)(char, float)");

    let fptr = pool.pointer(func);
    assert_eq!(pool.format_type(fptr, &names), "*int(*)(char, float)");

    assert_eq!(pool.format_type(Idx::INVALID, &names), "INVALID");
}

#[test]
fn debug_lists_interned_types() {
    let (mut pool, mut names) = setup();
    let int = pool.primitive(names.intern("int"));
    pool.pointer(int);

    let debug = format!("{pool:?}");
    assert!(debug.starts_with("Pool {"), "{debug}");
    assert!(debug.contains("Tag::pointer"), "{debug}");
}
