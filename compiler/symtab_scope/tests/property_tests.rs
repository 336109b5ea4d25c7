//! Property-based tests for scope ordering and slot numbering.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use symtab_scope::{SymbolId, SymbolTable};

// -- Strategies --

/// Distinct identifiers, in random order.
fn distinct_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    btree_set("[a-z][a-z0-9_]{0,6}", 1..max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

// -- Property Tests --

proptest! {
    /// Symbols come back in definition order with orders 0, 1, 2, ...
    #[test]
    fn prop_insertion_order(names in distinct_names(24)) {
        let mut table = SymbolTable::new();
        let defined: Vec<SymbolId> = names
            .iter()
            .map(|name| {
                let symbol = table.new_variable(name, None);
                table.define_global(symbol).unwrap();
                symbol
            })
            .collect();

        prop_assert_eq!(table.symbols(table.globals()), defined.as_slice());
        for (i, &symbol) in defined.iter().enumerate() {
            prop_assert_eq!(table.insertion_order(symbol), Some(u32::try_from(i).unwrap()));
            prop_assert_eq!(table.resolve(table.globals(), &names[i]), Some(symbol));
        }
    }

    /// A repeated name is rejected and the scope is unchanged.
    #[test]
    fn prop_duplicates_rejected(names in distinct_names(12), pick in any::<prop::sample::Index>()) {
        let mut table = SymbolTable::new();
        for name in &names {
            let symbol = table.new_variable(name, None);
            table.define_global(symbol).unwrap();
        }
        let repeat = pick.get(&names);
        let again = table.new_field(repeat, None);
        prop_assert!(table.define_global(again).is_err());
        prop_assert_eq!(table.number_of_symbols(table.globals()), names.len());
        prop_assert_eq!(table.owning_scope(again), None);
    }

    /// In a two-class hierarchy, overrides keep the base slot and new
    /// methods take the slots after every inherited one.
    #[test]
    fn prop_method_slots(
        base_methods in distinct_names(8),
        derived_picks in vec(any::<bool>(), 8),
        extra in distinct_names(6),
    ) {
        let mut table = SymbolTable::new();
        let base = table.new_class("Base", None);
        table.define_global(base).unwrap();
        let base_body = table.body_scope(base).unwrap();
        for name in &base_methods {
            let method = table.new_method(name, None);
            table.define(base_body, method).unwrap();
        }

        let derived = table.new_class("Derived", Some("Base"));
        table.define_global(derived).unwrap();
        let derived_body = table.body_scope(derived).unwrap();

        // Overrides of a subset of the base methods.
        for (name, _) in base_methods.iter().zip(&derived_picks).filter(|&(_, &p)| p) {
            let method = table.new_method(name, None);
            table.define(derived_body, method).unwrap();
            let inherited = table.resolve_method(base, name).unwrap();
            prop_assert_eq!(table.slot(method), table.slot(inherited));
        }

        // New methods, skipping names the base already has.
        let mut next = u32::try_from(base_methods.len()).unwrap();
        for name in extra.iter().filter(|n| !base_methods.contains(n)) {
            let method = table.new_method(name, None);
            table.define(derived_body, method).unwrap();
            prop_assert_eq!(table.slot(method), Some(next));
            next += 1;
        }

        let slots: Vec<_> = table
            .methods(derived)
            .into_iter()
            .map(|m| table.slot(m).unwrap())
            .collect();
        let expected: Vec<u32> = (0..next).collect();
        prop_assert_eq!(slots, expected);
    }
}
