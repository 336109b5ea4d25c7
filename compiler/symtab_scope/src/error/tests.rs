use super::*;

#[test]
fn messages_name_the_offender() {
    let err = SymbolError::DuplicateSymbol {
        name: "x".to_owned(),
        scope: "global".to_owned(),
    };
    assert_eq!(err.to_string(), "duplicate symbol `x` in scope `global`");
    assert_eq!(err.code(), ErrorCode::E2006);

    let err = SymbolError::InvalidMember {
        name: "tmp".to_owned(),
        kind: "variable",
        aggregate: "Point".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "`tmp` is a variable, not a member; it cannot be defined in `Point`"
    );
}

#[test]
fn only_unresolved_is_a_lookup_miss() {
    let miss = SymbolError::Unresolved {
        name: "y".to_owned(),
        scope: "local".to_owned(),
    };
    assert!(miss.is_lookup_miss());
    assert_eq!(miss.code().as_str(), "E2003");

    let violation = SymbolError::NestedSymbolScope {
        name: "f".to_owned(),
    };
    assert!(!violation.is_lookup_miss());
    assert_eq!(violation.code().to_string(), "E2042");
}

#[test]
fn unresolved_superclass_names_the_class() {
    let err = SymbolError::UnresolvedSuperclass {
        member: "bark".to_owned(),
        class: "Dog".to_owned(),
        superclass: "Animal".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "cannot define `bark` in `Dog`: superclass `Animal` does not resolve to a class yet"
    );
    assert_eq!(err.code(), ErrorCode::E2046);
    assert!(!err.is_lookup_miss());
}
