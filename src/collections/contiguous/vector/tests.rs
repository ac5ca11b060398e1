#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::{assert_panics, assert_panics_with};

#[test]
fn test_construction() {
    let vec = Vector::repeat(7_u8, 4);
    assert_eq!(vec, [7, 7, 7, 7]);

    let vec = Vector::<String>::repeat_default(2);
    assert_eq!(vec, [String::new(), String::new()]);

    let vec = Vector::<u32>::with_capacity(10);
    assert!(vec.is_empty());
    assert!(vec.capacity() >= 10, "Capacity should be at least what was requested.");

    let vec: Vector<_> = (0..5).collect();
    assert_eq!(vec.size(), 5);
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([10, 20, 30]);
    assert_eq!(*vec.at(0), 10);
    assert_eq!(*vec.at(2), 30);

    *vec.at_mut(1) = 25;
    assert_eq!(vec[1], 25, "at_mut should write through to the element.");

    assert_eq!(vec.try_at(3), None);
    assert_eq!(vec.front(), Some(&10));
    assert_eq!(vec.back(), Some(&30));

    assert_panics_with!(
        {
            let vec = Vector::from([10, 20, 30]);
            vec.at(3);
        },
        "Index 3 out of bounds for collection with 3 elements!"
    );

    let empty = Vector::<u8>::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_insert_and_erase() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.insert(0, 0);
    vec.insert(4, 4);
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    vec.insert_n(2, 3, 9);
    assert_eq!(vec, [0, 1, 9, 9, 9, 2, 3, 4]);

    let removed = vec.erase_range(2..5);
    assert_eq!(removed, [9, 9, 9]);
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    vec.insert_all(1, [100, 200]);
    assert_eq!(vec, [0, 100, 200, 1, 2, 3, 4]);

    assert_eq!(vec.erase(1), 100);
    assert_eq!(vec.erase(1), 200);
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    assert_panics!({
        let mut vec = Vector::from([1, 2, 3]);
        vec.insert(4, 0);
    });
    assert_panics!({
        let mut vec = Vector::from([1, 2, 3]);
        vec.erase(3);
    });
}

#[test]
fn test_push_pop_resize() {
    let mut vec = Vector::new();
    for i in 0..4 {
        vec.push_back(i);
    }
    assert_eq!(vec.pop_back(), Some(3));
    assert_eq!(vec.size(), 3);

    vec.resize(5);
    assert_eq!(vec, [0, 1, 2, 0, 0], "Growing should fill with default values.");

    vec.resize_with_value(7, 8);
    assert_eq!(vec, [0, 1, 2, 0, 0, 8, 8]);

    vec.resize(2);
    assert_eq!(vec, [0, 1], "Shrinking should drop the excess elements.");

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.pop_back(), None);
}

#[test]
fn test_swap_and_append() {
    let mut a = Vector::from([1, 2]);
    let mut b = Vector::from([3]);
    a.swap_with(&mut b);
    assert_eq!(a, [3]);
    assert_eq!(b, [1, 2]);

    a.append(b);
    assert_eq!(a, [3, 1, 2]);
}

#[test]
fn test_functional_helpers() {
    let vec = Vector::from([3, 1, 4, 1, 5, 9, 2, 6]);

    assert_eq!(vec.map(|i| i * 2), [6, 2, 8, 2, 10, 18, 4, 12]);
    assert_eq!(vec.filter(|i| *i > 3), [4, 5, 9, 6]);
    assert_eq!(vec.reduce(0, |acc, i| acc + i), 31);
    assert_eq!(
        vec.reduce(String::new(), |acc, i| acc + &i.to_string()),
        "31415926",
        "reduce should fold from the front."
    );

    assert_eq!(vec.count_value(&1), 2);
    assert_eq!(vec.count_if(|i| i % 2 == 0), 3);

    let mut seen = Vector::new();
    vec.for_each(|i| seen.push_back(*i));
    assert_eq!(seen, vec);

    let mut vec = vec;
    vec.for_each_mut(|i| *i += 1);
    assert_eq!(vec, [4, 2, 5, 2, 6, 10, 3, 7]);
}

#[test]
fn test_sort_and_reverse() {
    let mut vec = Vector::from([5, 3, 8, 1]);
    vec.sort();
    assert_eq!(vec, [1, 3, 5, 8]);

    vec.sort_by(|a, b| b.cmp(a));
    assert_eq!(vec, [8, 5, 3, 1]);

    vec.reverse();
    assert_eq!(vec, [1, 3, 5, 8]);
}

#[test]
fn test_find_first_index() {
    let vec = Vector::from(["a", "b", "c", "b"]);
    assert_eq!(vec.find_first_index(&"b"), 1);
    assert_eq!(vec.find_first_index(&"z"), NOT_FOUND);
    assert_eq!(vec.find_first_index_if(|s| *s > "a"), 1);
    assert_eq!(vec.find_first_index_if(|s| s.is_empty()), NOT_FOUND);
    assert_eq!(NOT_FOUND, usize::MAX);
}

#[test]
fn test_comparison() {
    let a = Vector::from([1, 2, 3]);
    let b = Vector::from([1, 2, 4]);
    assert!(a < b, "Vectors should compare lexicographically.");
    assert!(a.equals(&a.clone()));
    assert!(!a.equals(&b));
    assert_eq!(Vector::from([1, 2]).max_size(), isize::MAX as usize / size_of::<i32>());
}

#[test]
fn test_vec_round_trip() {
    let original = vec![4, 8, 15, 16, 23, 42];
    let vec = Vector::from(original.clone());
    let back: Vec<_> = vec.into();
    assert_eq!(back, original);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_transparent() {
    let vec = Vector::from([1, 2, 3]);
    let json = serde_json::to_string(&vec).expect("serialization failed");
    assert_eq!(json, "[1,2,3]");
    let back: Vector<i32> = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back, vec);
}

proptest! {
    #[test]
    fn prop_filter_matches_count_if(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let vec = Vector::from(items);
        let even = |i: &i32| i % 2 == 0;
        let filtered = vec.filter(even);
        prop_assert!(filtered.iter().all(even));
        prop_assert_eq!(filtered.size(), vec.count_if(even));
    }

    #[test]
    fn prop_map_preserves_size_and_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let vec = Vector::from(items);
        let mapped = vec.map(|i| i.wrapping_mul(3));
        prop_assert_eq!(mapped.size(), vec.size());
        for i in 0..vec.size() {
            prop_assert_eq!(mapped[i], vec[i].wrapping_mul(3));
        }
    }
}
