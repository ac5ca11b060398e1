use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Bound, Index};

use super::{
    Iter, IterMut, KeyOrder, Keys, Natural, OrderedKey, Range, Values, ValuesMut,
};
use crate::collections::contiguous::Vector;
use crate::util::error::KeyNotFound;
use crate::util::result::ResultExtension;

/// A map of unique keys to values, kept sorted by the [`KeyOrder`] `O`. By default, keys are
/// sorted in ascending order according to their [`Ord`] implementation.
///
/// The entries are stored in a [`BTreeMap`]. On top of the usual map operations, OrderedMap
/// provides set-like operations between maps ([`merge`](OrderedMap::merge),
/// [`difference`](OrderedMap::difference) and [`intersection`](OrderedMap::intersection)) and
/// functional helpers, all of which leave their operands untouched and return a new map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the OrderedMap.
/// - `m`: The number of entries in the other OrderedMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `get` / `at` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `lower_bound` / `upper_bound` | `O(log n)` |
/// | `merge` | `O(n + m log(n + m))` |
/// | `difference` / `intersection` | `O(n log m)` |
/// | `get_keys` / `get_values` / `get_entries` | `O(n)` |
pub struct OrderedMap<K, V, O = Natural> {
    pub(crate) inner: BTreeMap<OrderedKey<K, O>, V>,
}

impl<K, V, O> OrderedMap<K, V, O> {
    /// Creates a new, empty OrderedMap. No memory is allocated until the first insertion.
    pub const fn new() -> OrderedMap<K, V, O> {
        OrderedMap {
            inner: BTreeMap::new(),
        }
    }

    /// Returns the number of entries in the OrderedMap.
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the OrderedMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all entries from the OrderedMap.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Swaps the contents of two OrderedMaps.
    pub fn swap_with(&mut self, other: &mut OrderedMap<K, V, O>) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns an iterator over all entries, in order.
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Returns an iterator over all entries, in order, with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, O> {
        IterMut {
            inner: self.inner.iter_mut(),
        }
    }

    /// Returns an iterator over all keys, in order.
    pub fn keys(&self) -> Keys<'_, K, V, O> {
        Keys {
            inner: self.inner.iter(),
        }
    }

    /// Returns an iterator over all values, in key order.
    pub fn values(&self) -> Values<'_, K, V, O> {
        Values {
            inner: self.inner.iter(),
        }
    }

    /// Returns an iterator over mutable references to all values, in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, O> {
        ValuesMut {
            inner: self.inner.iter_mut(),
        }
    }

    /// Calls `func` with each key and value, in order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut func: F) {
        for (key, value) in self.iter() {
            func(key, value);
        }
    }

    /// Calls `func` with each key and a mutable reference to its value, in order.
    pub fn for_each_mut<F: FnMut(&K, &mut V)>(&mut self, mut func: F) {
        for (key, value) in self.iter_mut() {
            func(key, value);
        }
    }

    /// Creates a snapshot of all keys, in order.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let scores: OrderedMap<_, _> = [("Charlie", 92), ("Alice", 95), ("Bob", 87)].into();
    /// assert_eq!(scores.get_keys(), ["Alice", "Bob", "Charlie"]);
    /// ```
    pub fn get_keys(&self) -> Vector<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Creates a snapshot of all values, in key order.
    pub fn get_values(&self) -> Vector<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Creates a snapshot of all entries, in order.
    pub fn get_entries(&self) -> Vector<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, O: KeyOrder<K>> OrderedMap<K, V, O> {
    /// Returns the entry with the first key in the map's order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first_key_value().map(|(k, v)| (&k.key, v))
    }

    /// Returns the entry with the last key in the map's order.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last_key_value().map(|(k, v)| (&k.key, v))
    }

    /// Inserts the provided `key`-`value` pair into the OrderedMap. If the key was already
    /// associated with a value, that value is replaced and returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(OrderedKey::new(key), value)
    }

    /// Inserts the provided `key`-`value` pair only if the key isn't already present, returning
    /// whether the insertion took place. An existing value is left untouched.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        match self.inner.entry(OrderedKey::new(key)) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            },
            Entry::Occupied(_) => false,
        }
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the default value
    /// first if the key isn't present.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let mut counts = OrderedMap::<char, usize>::new();
    /// for c in "hello".chars() {
    ///     *counts.get_or_insert_default(c) += 1;
    /// }
    /// assert_eq!(counts[&'l'], 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.inner.entry(OrderedKey::new(key)).or_default()
    }

    /// Returns a reference to the value associated with `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(OrderedKey::from_ref(key))
    }

    /// Returns a mutable reference to the value associated with `key`, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(OrderedKey::from_ref(key))
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the key isn't present in the OrderedMap.
    #[track_caller]
    pub fn at(&self, key: &K) -> &V
    where
        K: Debug,
    {
        self.get(key)
            .ok_or_else(|| KeyNotFound::new(key, self.size()))
            .throw()
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the key isn't present in the OrderedMap.
    #[track_caller]
    pub fn at_mut(&mut self, key: &K) -> &mut V
    where
        K: Debug,
    {
        let len = self.size();
        self.get_mut(key)
            .ok_or_else(|| KeyNotFound::new(key, len))
            .throw()
    }

    /// Returns the stored entry for `key`, if present.
    pub fn find(&self, key: &K) -> Option<(&K, &V)> {
        self.inner
            .get_key_value(OrderedKey::from_ref(key))
            .map(|(k, v)| (&k.key, v))
    }

    /// Returns true if the OrderedMap contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(OrderedKey::from_ref(key))
    }

    /// Returns the number of entries with the provided key, which is always 0 or 1.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains(key))
    }

    /// Returns the first entry whose key is not ordered before `key`.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let map: OrderedMap<_, _> = [(10, 'a'), (20, 'b'), (30, 'c')].into();
    /// assert_eq!(map.lower_bound(&20), Some((&20, &'b')));
    /// assert_eq!(map.lower_bound(&21), Some((&30, &'c')));
    /// assert_eq!(map.upper_bound(&20), Some((&30, &'c')));
    /// assert_eq!(map.upper_bound(&30), None);
    /// ```
    pub fn lower_bound(&self, key: &K) -> Option<(&K, &V)> {
        self.range_from(Bound::Included(OrderedKey::from_ref(key))).next()
    }

    /// Returns the first entry whose key is ordered after `key`.
    pub fn upper_bound(&self, key: &K) -> Option<(&K, &V)> {
        self.range_from(Bound::Excluded(OrderedKey::from_ref(key))).next()
    }

    /// Returns an iterator over all entries with a key equal to `key`, which yields at most one
    /// entry because keys are unique.
    pub fn equal_range(&self, key: &K) -> Range<'_, K, V, O> {
        let key = OrderedKey::from_ref(key);
        Range {
            inner: self.inner.range::<OrderedKey<K, O>, _>((
                Bound::Included(key),
                Bound::Included(key),
            )),
        }
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(OrderedKey::from_ref(key))
    }

    /// Removes the entry for `key`, returning the stored key and value if it was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.inner
            .remove_entry(OrderedKey::from_ref(key))
            .map(|(k, v)| (k.into_key(), v))
    }

    /// Removes the entry for `key`, returning the number of entries removed (0 or 1).
    pub fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Retains only the entries for which `pred` holds, removing the rest in place.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut pred: F) {
        self.inner.retain(|k, v| pred(&k.key, v));
    }

    /// Creates a new map with the same keys, where every value has been replaced by the result of
    /// `func`.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let scores: OrderedMap<_, _> = [("Alice", 95), ("Bob", 87)].into();
    /// let passed = scores.map_values(|score| *score >= 90);
    /// assert_eq!(passed.get_values(), [true, false]);
    /// ```
    pub fn map_values<R, F: FnMut(&V) -> R>(&self, mut func: F) -> OrderedMap<K, R, O>
    where
        K: Clone,
    {
        OrderedMap {
            inner: self.inner.iter().map(|(k, v)| (k.clone(), func(v))).collect(),
        }
    }

    /// Creates a new map containing clones of the entries for which `pred` holds.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let scores: OrderedMap<_, _> = [("Alice", 95), ("Bob", 87), ("Charlie", 92)].into();
    /// let high = scores.filter_entries(|_, score| *score >= 90);
    /// assert_eq!(high.get_keys(), ["Alice", "Charlie"]);
    /// ```
    pub fn filter_entries<F: FnMut(&K, &V) -> bool>(&self, mut pred: F) -> OrderedMap<K, V, O>
    where
        K: Clone,
        V: Clone,
    {
        OrderedMap {
            inner: self
                .inner
                .iter()
                .filter(|(k, v)| pred(&k.key, *v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Creates the union of both maps. When a key is present in both, the value from `self` is
    /// kept.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::ordered::OrderedMap;
    /// let a: OrderedMap<_, _> = [(1, "a1"), (2, "a2")].into();
    /// let b: OrderedMap<_, _> = [(2, "b2"), (3, "b3")].into();
    /// assert_eq!(a.merge(&b).get_entries(), [(1, "a1"), (2, "a2"), (3, "b3")]);
    /// ```
    pub fn merge(&self, other: &OrderedMap<K, V, O>) -> OrderedMap<K, V, O>
    where
        K: Clone,
        V: Clone,
    {
        let mut result = self.clone();
        for (key, value) in other.iter() {
            if !result.contains(key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }

    /// Creates a new map with the entries of `self` whose keys are not present in `other`.
    pub fn difference(&self, other: &OrderedMap<K, V, O>) -> OrderedMap<K, V, O>
    where
        K: Clone,
        V: Clone,
    {
        self.filter_entries(|key, _| !other.contains(key))
    }

    /// Creates a new map with the entries of `self` whose keys are also present in `other`. Values
    /// are always taken from `self`.
    pub fn intersection(&self, other: &OrderedMap<K, V, O>) -> OrderedMap<K, V, O>
    where
        K: Clone,
        V: Clone,
    {
        self.filter_entries(|key, _| other.contains(key))
    }

    fn range_from(&self, start: Bound<&OrderedKey<K, O>>) -> Range<'_, K, V, O> {
        Range {
            inner: self.inner.range::<OrderedKey<K, O>, _>((start, Bound::Unbounded)),
        }
    }
}

impl<K, V, O> Default for OrderedMap<K, V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, O> Clone for OrderedMap<K, V, O> {
    fn clone(&self) -> Self {
        OrderedMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Debug, V, O: KeyOrder<K>> Index<&K> for OrderedMap<K, V, O> {
    type Output = V;

    /// # Panics
    /// Panics if the key isn't present in the OrderedMap.
    #[track_caller]
    fn index(&self, key: &K) -> &Self::Output {
        self.at(key)
    }
}

impl<K, V, O: KeyOrder<K>> Extend<(K, V)> for OrderedMap<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, O: KeyOrder<K>> FromIterator<(K, V)> for OrderedMap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, O: KeyOrder<K>, const N: usize> From<[(K, V); N]> for OrderedMap<K, V, O> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for OrderedMap<K, V, Natural> {
    fn from(value: BTreeMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Ord, V> From<OrderedMap<K, V, Natural>> for BTreeMap<K, V> {
    fn from(value: OrderedMap<K, V, Natural>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: PartialEq, V: PartialEq, O> PartialEq for OrderedMap<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, O> Eq for OrderedMap<K, V, O> {}

impl<K: PartialOrd, V: PartialOrd, O> PartialOrd for OrderedMap<K, V, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, O> Ord for OrderedMap<K, V, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: Hash, V: Hash, O> Hash for OrderedMap<K, V, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size());
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<K: Debug, V: Debug, O> Debug for OrderedMap<K, V, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Debug, V: Debug, O> Display for OrderedMap<K, V, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
