use super::*;

#[test]
fn invalid_is_first() {
    assert_eq!(Idx::INVALID.raw(), 0);
    assert!(Idx::INVALID.is_invalid());
    assert!(!Idx::from_raw(1).is_invalid());
}

#[test]
fn idx_is_copy() {
    let a = Idx::from_raw(5);
    let b = a; // Copy, not move
    assert_eq!(a, b);
}

#[test]
fn display_and_debug() {
    assert_eq!(Idx::INVALID.to_string(), "INVALID");
    assert_eq!(Idx::from_raw(7).to_string(), "type#7");
    assert_eq!(format!("{:?}", Idx::INVALID), "Idx::INVALID");
    assert_eq!(format!("{:?}", Idx::from_raw(3)), "Idx(3)");
}
