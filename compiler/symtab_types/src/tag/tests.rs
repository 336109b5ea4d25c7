use super::*;

#[test]
fn nominal_tags() {
    let nominal: Vec<Tag> = [
        Tag::Invalid,
        Tag::Primitive,
        Tag::Pointer,
        Tag::Array,
        Tag::Function,
        Tag::Alias,
        Tag::Aggregate,
    ]
    .into_iter()
    .filter(|tag| tag.is_nominal())
    .collect();
    assert_eq!(nominal, vec![Tag::Alias, Tag::Aggregate]);
}

#[test]
fn names() {
    assert_eq!(Tag::Pointer.to_string(), "pointer");
    assert_eq!(format!("{:?}", Tag::Alias), "Tag::alias");
}
