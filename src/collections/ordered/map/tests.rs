#![cfg(test)]

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use super::*;
use crate::util::error::KeyNotFound;
use crate::util::panic::assert_panics_with;

fn scores() -> OrderedMap<&'static str, u32> {
    [("Charlie", 92), ("Alice", 95), ("Bob", 87)].into()
}

/// Orders strings by length first, then alphabetically.
struct ByLength;

impl KeyOrder<String> for ByLength {
    fn compare(lhs: &String, rhs: &String) -> Ordering {
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }
}

#[test]
fn test_basic_operations() {
    let mut map = scores();
    assert_eq!(map.size(), 3);
    assert_eq!(map.get(&"Alice"), Some(&95));
    assert_eq!(map.get(&"Dave"), None);
    assert_eq!(*map.at(&"Bob"), 87);
    assert_eq!(map[&"Charlie"], 92);
    assert!(map.contains(&"Alice"));
    assert_eq!(map.count(&"Alice"), 1);
    assert_eq!(map.count(&"Dave"), 0);

    assert_eq!(map.insert("Alice", 100), Some(95), "insert should replace and return the old value.");
    assert!(!map.insert_if_absent("Alice", 0), "insert_if_absent should keep existing values.");
    assert_eq!(map[&"Alice"], 100);
    assert!(map.insert_if_absent("Dave", 70));

    *map.at_mut(&"Dave") += 5;
    assert_eq!(map[&"Dave"], 75);

    *map.get_or_insert_default("Eve") += 1;
    assert_eq!(map[&"Eve"], 1);

    assert_eq!(map.erase(&"Eve"), 1);
    assert_eq!(map.erase(&"Eve"), 0);
    assert_eq!(map.remove(&"Dave"), Some(75));
    assert_eq!(map.remove_entry(&"Bob"), Some(("Bob", 87)));
    assert_eq!(map.get_keys(), ["Alice", "Charlie"]);

    map.clear();
    assert!(map.is_empty());
}

#[test]
fn test_missing_key_panics() {
    assert_panics_with!(
        {
            scores().at(&"Dave");
        },
        "Key \"Dave\" not found in collection with 3 entries!"
    );

    let error = KeyNotFound::new(&'x', 0);
    assert_eq!(error.to_string(), "Key 'x' not found in collection with 0 entries!");
    assert!(std::error::Error::source(&error).is_none());
}

#[test]
fn test_ordering_and_bounds() {
    let map: OrderedMap<_, _> = [(30, 'c'), (10, 'a'), (20, 'b')].into();
    assert_eq!(map.first(), Some((&10, &'a')));
    assert_eq!(map.last(), Some((&30, &'c')));
    assert_eq!(map.lower_bound(&5), Some((&10, &'a')));
    assert_eq!(map.lower_bound(&31), None);
    assert_eq!(map.upper_bound(&10), Some((&20, &'b')));
    assert_eq!(map.find(&20), Some((&20, &'b')));
    assert_eq!(map.equal_range(&20).collect::<Vec<_>>(), [(&20, &'b')]);
    assert_eq!(map.equal_range(&25).count(), 0);

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [10, 20, 30], "Keys should be iterated in ascending order.");
    let values: Vec<_> = map.values().rev().copied().collect();
    assert_eq!(values, ['c', 'b', 'a']);
}

#[test]
fn test_custom_order() {
    let map: OrderedMap<_, _, Reversed> = [(1, "one"), (3, "three"), (2, "two")].into();
    assert_eq!(map.get_keys(), [3, 2, 1]);
    assert_eq!(map.lower_bound(&2), Some((&2, &"two")));
    assert_eq!(map.upper_bound(&2), Some((&1, &"one")));
    assert_eq!(map.first(), Some((&3, &"three")));
    assert_eq!(map.last(), Some((&1, &"one")));
    assert_eq!(map.equal_range(&3).collect::<Vec<_>>(), [(&3, &"three")]);

    let mut map = OrderedMap::<String, usize, ByLength>::new();
    for word in ["ccc", "a", "bb", "aa", "b"] {
        map.insert(word.to_string(), word.len());
    }
    assert_eq!(map.get_keys(), ["a", "b", "aa", "bb", "ccc"].map(String::from));
    assert_eq!(map.get(&"aa".to_string()), Some(&2));
    assert_eq!(map.first().map(|(k, _)| k.as_str()), Some("a"));
    assert_eq!(map.last().map(|(k, _)| k.as_str()), Some("ccc"));
    assert_eq!(OrderedMap::<String, usize, ByLength>::new().first(), None);
}

#[test]
fn test_projections() {
    let map = scores();
    assert_eq!(map.get_keys(), ["Alice", "Bob", "Charlie"]);
    assert_eq!(map.get_values(), [95, 87, 92]);
    assert_eq!(map.get_entries(), [("Alice", 95), ("Bob", 87), ("Charlie", 92)]);
}

#[test]
fn test_functional_helpers() {
    let map = scores();

    let grades = map.map_values(|score| if *score >= 90 { 'A' } else { 'B' });
    assert_eq!(grades.get_entries(), [("Alice", 'A'), ("Bob", 'B'), ("Charlie", 'A')]);

    let high = map.filter_entries(|_, score| *score >= 90);
    assert_eq!(high.get_keys(), ["Alice", "Charlie"]);
    assert_eq!(map.size(), 3, "filter_entries should leave the original untouched.");

    let mut visited = Vec::new();
    map.for_each(|name, score| visited.push((*name, *score)));
    assert_eq!(visited, [("Alice", 95), ("Bob", 87), ("Charlie", 92)]);

    let mut map = map;
    map.for_each_mut(|_, score| *score += 1);
    assert_eq!(map.get_values(), [96, 88, 93]);

    map.retain(|name, _| name.starts_with('B'));
    assert_eq!(map.get_keys(), ["Bob"]);
}

#[test]
fn test_set_operations() {
    let a: OrderedMap<_, _> = [(1, "a1"), (2, "a2"), (3, "a3")].into();
    let b: OrderedMap<_, _> = [(2, "b2"), (3, "b3"), (4, "b4")].into();

    let merged = a.merge(&b);
    assert_eq!(merged.get_entries(), [(1, "a1"), (2, "a2"), (3, "a3"), (4, "b4")]);

    let difference = a.difference(&b);
    assert_eq!(difference.get_entries(), [(1, "a1")]);

    let intersection = a.intersection(&b);
    assert_eq!(intersection.get_entries(), [(2, "a2"), (3, "a3")]);

    assert_eq!(a.size(), 3, "Operands should be left unmodified.");
    assert_eq!(b.size(), 3, "Operands should be left unmodified.");

    let empty = OrderedMap::new();
    assert_eq!(a.merge(&empty), a);
    assert_eq!(a.difference(&empty), a);
    assert!(a.intersection(&empty).is_empty());
}

#[test]
fn test_swap_and_comparison() {
    let mut a: OrderedMap<_, _> = [(1, 1)].into();
    let mut b: OrderedMap<_, _> = [(2, 2), (3, 3)].into();
    a.swap_with(&mut b);
    assert_eq!(a.size(), 2);
    assert_eq!(b.size(), 1);

    assert!(b < a, "Maps should compare their entries lexicographically.");
    assert_eq!(a.clone(), a);
    assert_eq!(format!("{:?}", b), "{1: 1}");
}

#[test]
fn test_btree_round_trip() {
    let original: BTreeMap<_, _> = [("x", 1), ("y", 2), ("z", 3)].into();
    let map: OrderedMap<_, _> = original.clone().into();
    assert_eq!(map.get_entries(), [("x", 1), ("y", 2), ("z", 3)]);
    let back: BTreeMap<_, _> = map.into();
    assert_eq!(back, original);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_map() {
    let map = scores();
    let json = serde_json::to_string(&map).expect("serialization failed");
    assert_eq!(json, r#"{"Alice":95,"Bob":87,"Charlie":92}"#);

    let back: OrderedMap<String, u32, Reversed> =
        serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back.get_keys(), ["Charlie", "Bob", "Alice"].map(String::from));
}

fn small_map() -> impl Strategy<Value = OrderedMap<u8, u16>> {
    prop::collection::btree_map(0_u8..32, any::<u16>(), 0..16).prop_map(OrderedMap::from)
}

proptest! {
    #[test]
    fn prop_merge_is_union_preferring_self(a in small_map(), b in small_map()) {
        let merged = a.merge(&b);
        let union: BTreeSet<_> = a.keys().chain(b.keys()).collect();
        prop_assert_eq!(merged.size(), union.len());
        for (key, value) in merged.iter() {
            match a.get(key) {
                Some(expected) => prop_assert_eq!(value, expected),
                None => prop_assert_eq!(Some(value), b.get(key)),
            }
        }
    }

    #[test]
    fn prop_intersection_keeps_shared_keys(a in small_map(), b in small_map()) {
        let intersection = a.intersection(&b);
        for key in a.keys() {
            prop_assert_eq!(intersection.contains(key), b.contains(key));
        }
        for (key, value) in intersection.iter() {
            prop_assert_eq!(Some(value), a.get(key));
        }
    }

    #[test]
    fn prop_difference_excludes_other_keys(a in small_map(), b in small_map()) {
        let difference = a.difference(&b);
        prop_assert_eq!(difference.size() + a.intersection(&b).size(), a.size());
        prop_assert!(difference.keys().all(|key| !b.contains(key)));
    }
}
