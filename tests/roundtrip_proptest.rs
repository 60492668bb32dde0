//! Property-based tests for store invariants.
//!
//! The central law: serializing a store and parsing the result yields a
//! store with the same root values, the same named groups in the same
//! order, and the same key/value pairs per group.

use std::collections::HashMap;

use proptest::prelude::*;

use mini_ini::IniStore;

/// Keys: no '=', no newline, cannot start a header
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,12}"
}

/// Group identifiers: no ']', no newline; ':' included so path-looking
/// names are exercised as flat identifiers
fn group_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_:.-]{1,12}"
}

/// Value text: printable, may contain '=' and spaces, kept verbatim
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 =_.:-]{0,24}"
}

fn pairs_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..8)
}

proptest! {
    #[test]
    fn roundtrip_preserves_store(
        root in pairs_strategy(),
        groups in prop::collection::hash_map(group_name_strategy(), pairs_strategy(), 0..6),
    ) {
        let mut store = IniStore::new();
        for (key, text) in &root {
            store.set(None, key, text).unwrap();
        }
        for (name, pairs) in &groups {
            // Touch the group first so even empty groups exist
            store.set(Some(name), "__probe", "x").unwrap();
            store.delete_value(Some(name), "__probe").unwrap();
            for (key, text) in pairs {
                store.set(Some(name), key, text).unwrap();
            }
        }

        let text = store.render();
        let reloaded = IniStore::from_reader(text.as_bytes()).unwrap();

        // Serialization is stable across a reload
        prop_assert_eq!(reloaded.render(), text);

        // Root values survive
        for (key, expected) in &root {
            prop_assert_eq!(reloaded.get(None, key), Some(expected.as_str()));
        }
        prop_assert_eq!(reloaded.root().len(), root.len());

        // Named groups survive with their pairs, in document order
        let original_names: Vec<&str> = store.groups().skip(1).filter_map(|g| g.name()).collect();
        let reloaded_names: Vec<&str> = reloaded.groups().skip(1).filter_map(|g| g.name()).collect();
        prop_assert_eq!(original_names, reloaded_names);

        for (name, pairs) in &groups {
            let group = reloaded.group(Some(name)).unwrap();
            prop_assert_eq!(group.len(), pairs.len());
            for (key, expected) in pairs {
                prop_assert_eq!(group.get(key), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn set_then_get_returns_just_set_text(
        group in prop::option::of(group_name_strategy()),
        key in "[ -~]{1,16}",
        text in "[ -~]{0,24}",
    ) {
        let mut store = IniStore::new();
        store.set(group.as_deref(), &key, &text).unwrap();
        prop_assert_eq!(store.get(group.as_deref(), &key), Some(text.as_str()));
    }

    #[test]
    fn set_twice_overwrites(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let mut store = IniStore::new();
        store.set(Some("g"), &key, &first).unwrap();
        store.set(Some("g"), &key, &second).unwrap();

        prop_assert_eq!(store.get(Some("g"), &key), Some(second.as_str()));
        prop_assert_eq!(store.group(Some("g")).unwrap().len(), 1);
    }

    #[test]
    fn delete_then_get_falls_back(
        key in key_strategy(),
        text in value_strategy(),
        fallback in value_strategy(),
    ) {
        let mut store = IniStore::new();
        store.set(Some("g"), &key, &text).unwrap();
        store.delete_value(Some("g"), &key).unwrap();

        prop_assert_eq!(store.get_or(Some("g"), &key, &fallback), fallback.as_str());
    }

    #[test]
    fn int_roundtrip_through_text(value in any::<i64>()) {
        let mut store = IniStore::new();
        store.set_i64(Some("nums"), "n", value).unwrap();
        prop_assert_eq!(store.get_i64(Some("nums"), "n", 0), value);
    }
}
