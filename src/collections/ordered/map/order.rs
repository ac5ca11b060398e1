use std::cmp::Ordering;
use std::marker::PhantomData;

/// Defines the order of keys in an [`OrderedMap`](super::OrderedMap).
///
/// Orders are types rather than values, so a map never stores its comparator. Implementations must
/// describe a total order; an inconsistent comparison is a logic error, in the same way as an
/// inconsistent [`Ord`] implementation is for a [`BTreeMap`](std::collections::BTreeMap).
pub trait KeyOrder<K: ?Sized> {
    /// Compares two keys.
    fn compare(lhs: &K, rhs: &K) -> Ordering;
}

/// Ascending order, as defined by the key's [`Ord`] implementation. This is the default order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> KeyOrder<K> for Natural {
    fn compare(lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Descending order, the reverse of [`Natural`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed;

impl<K: Ord + ?Sized> KeyOrder<K> for Reversed {
    fn compare(lhs: &K, rhs: &K) -> Ordering {
        rhs.cmp(lhs)
    }
}

/// A key stored alongside the order that it should be sorted by, so that the standard BTreeMap can
/// sort it without knowing about [`KeyOrder`].
#[repr(transparent)]
pub(crate) struct OrderedKey<K, O> {
    pub key: K,
    _order: PhantomData<fn() -> O>,
}

impl<K, O> OrderedKey<K, O> {
    pub const fn new(key: K) -> OrderedKey<K, O> {
        OrderedKey {
            key,
            _order: PhantomData,
        }
    }

    /// Reinterprets a reference to a key as a reference to an OrderedKey, so that lookups don't
    /// need an owned key.
    pub fn from_ref(key: &K) -> &OrderedKey<K, O> {
        // SAFETY: OrderedKey is repr(transparent) over K, with the only other field being a ZST
        // with alignment 1. The pointer is derived from a valid reference and the returned
        // reference has the same lifetime.
        unsafe { &*(key as *const K).cast::<OrderedKey<K, O>>() }
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: Clone, O> Clone for OrderedKey<K, O> {
    fn clone(&self) -> Self {
        OrderedKey::new(self.key.clone())
    }
}

impl<K, O: KeyOrder<K>> PartialEq for OrderedKey<K, O> {
    fn eq(&self, other: &Self) -> bool {
        O::compare(&self.key, &other.key) == Ordering::Equal
    }
}

impl<K, O: KeyOrder<K>> Eq for OrderedKey<K, O> {}

impl<K, O: KeyOrder<K>> PartialOrd for OrderedKey<K, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, O: KeyOrder<K>> Ord for OrderedKey<K, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::compare(&self.key, &other.key)
    }
}
