use super::*;

#[test]
fn capability_table() {
    use SymbolKind::{Alias, Class, Field, Function, Method, Parameter, Primitive, Struct, Variable};

    for kind in [Field, Method, Struct, Class] {
        assert!(kind.capabilities().contains(Capabilities::MEMBER), "{kind}");
    }
    for kind in [Variable, Parameter, Function, Primitive, Alias] {
        assert!(!kind.capabilities().contains(Capabilities::MEMBER), "{kind}");
    }
    for kind in [Function, Method, Struct, Class] {
        assert!(kind.capabilities().contains(Capabilities::SCOPE), "{kind}");
    }
    for kind in [Struct, Class, Primitive, Alias] {
        assert!(kind.capabilities().contains(Capabilities::TYPE), "{kind}");
    }
    for kind in [Variable, Parameter, Field, Function, Method] {
        assert!(kind.capabilities().contains(Capabilities::TYPED), "{kind}");
    }
}

#[test]
fn detail_accessors() {
    let body = ScopeId::new(4);
    let method = SymbolDetail::Method {
        ret: None,
        body,
        slot: Some(2),
    };
    assert_eq!(method.kind(), SymbolKind::Method);
    assert_eq!(method.body(), Some(body));
    assert_eq!(method.slot(), Some(2));
    assert!(method.aggregate().is_none());
    assert!(method.as_type().is_none());

    let class = SymbolDetail::Class {
        aggregate: Aggregate::new(body, Idx::from_raw(9)),
        superclass: None,
    };
    assert_eq!(class.as_type(), Some(Idx::from_raw(9)));
    assert_eq!(class.slot(), None);
    assert!(class.declared_type().is_none());
}

#[test]
fn new_entries_are_undefined() {
    let entry = SymbolEntry::new(Name::from_raw(1), SymbolDetail::Variable { ty: None });
    assert_eq!(entry.kind(), SymbolKind::Variable);
    assert!(entry.scope.is_none());
    assert!(entry.order.is_none());
    assert!(entry.def_site.is_none());
}

#[test]
fn kind_names() {
    assert_eq!(SymbolKind::Alias.to_string(), "type alias");
    assert!(SymbolKind::Class.is_aggregate());
    assert!(SymbolKind::Method.is_function_like());
    assert!(!SymbolKind::Field.is_function_like());
}
