use super::*;

#[test]
fn empty_is_default() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.raw(), 0);
}

#[test]
fn raw_round_trips() {
    let name = Name::from_raw(42);
    assert_eq!(name.raw(), 42);
    assert_eq!(name.index(), 42);
}

#[test]
fn debug_shows_raw_index() {
    assert_eq!(format!("{:?}", Name::from_raw(7)), "Name(7)");
}
