use super::*;

#[test]
fn categories_do_not_propagate() {
    let parent = TypeFlags::for_tag(Tag::Pointer).with_child(TypeFlags::for_tag(Tag::Primitive));
    assert!(parent.contains(TypeFlags::IS_POINTER));
    assert!(!parent.contains(TypeFlags::IS_PRIMITIVE));
}

#[test]
fn invalid_propagates() {
    let parent = TypeFlags::for_tag(Tag::Array).with_child(TypeFlags::for_tag(Tag::Invalid));
    assert!(parent.has_invalid());
    assert!(parent.contains(TypeFlags::IS_ARRAY));
}

#[test]
fn alias_is_nominal_and_propagates() {
    let alias = TypeFlags::for_tag(Tag::Alias);
    assert!(alias.contains(TypeFlags::IS_NOMINAL));
    assert!(alias.has_alias());

    let ptr = TypeFlags::for_tag(Tag::Pointer).with_child(alias);
    assert!(ptr.has_alias());
    assert!(!ptr.contains(TypeFlags::IS_NOMINAL));
}
