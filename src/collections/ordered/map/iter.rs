use std::collections::btree_map;
use std::iter::FusedIterator;

use super::{OrderedKey, OrderedMap};

macro_rules! impl_entry_iter {
    ($name:ident<$lt:lifetime>, $item:ty, |$k:ident, $v:ident| $map:expr) => {
        impl<$lt, K, V, O> Iterator for $name<$lt, K, V, O> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|($k, $v)| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$lt, K, V, O> DoubleEndedIterator for $name<$lt, K, V, O> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|($k, $v)| $map)
            }
        }

        impl<$lt, K, V, O> FusedIterator for $name<$lt, K, V, O> {}
    };
}

/// A borrowed iterator over the entries of an [`OrderedMap`], in order.
pub struct Iter<'a, K, V, O> {
    pub(crate) inner: btree_map::Iter<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(Iter<'a>, (&'a K, &'a V), |k, v| (&k.key, v));

impl<K, V, O> ExactSizeIterator for Iter<'_, K, V, O> {}

/// A borrowed iterator over the entries of an [`OrderedMap`] with mutable access to the values.
pub struct IterMut<'a, K, V, O> {
    pub(crate) inner: btree_map::IterMut<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(IterMut<'a>, (&'a K, &'a mut V), |k, v| (&k.key, v));

impl<K, V, O> ExactSizeIterator for IterMut<'_, K, V, O> {}

/// A borrowed iterator over the keys of an [`OrderedMap`], in order.
pub struct Keys<'a, K, V, O> {
    pub(crate) inner: btree_map::Iter<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(Keys<'a>, &'a K, |k, _v| &k.key);

impl<K, V, O> ExactSizeIterator for Keys<'_, K, V, O> {}

/// A borrowed iterator over the values of an [`OrderedMap`], in key order.
pub struct Values<'a, K, V, O> {
    pub(crate) inner: btree_map::Iter<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(Values<'a>, &'a V, |_k, v| v);

impl<K, V, O> ExactSizeIterator for Values<'_, K, V, O> {}

/// A borrowed iterator over mutable references to the values of an [`OrderedMap`], in key order.
pub struct ValuesMut<'a, K, V, O> {
    pub(crate) inner: btree_map::IterMut<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(ValuesMut<'a>, &'a mut V, |_k, v| v);

impl<K, V, O> ExactSizeIterator for ValuesMut<'_, K, V, O> {}

/// A borrowed iterator over a sub-range of the entries of an [`OrderedMap`].
pub struct Range<'a, K, V, O> {
    pub(crate) inner: btree_map::Range<'a, OrderedKey<K, O>, V>,
}

impl_entry_iter!(Range<'a>, (&'a K, &'a V), |k, v| (&k.key, v));

/// An owned iterator over the entries of an [`OrderedMap`], in order.
pub struct IntoIter<K, V, O> {
    pub(crate) inner: btree_map::IntoIter<OrderedKey<K, O>, V>,
}

impl<K, V, O> Iterator for IntoIter<K, V, O> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.into_key(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, O> DoubleEndedIterator for IntoIter<K, V, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.into_key(), v))
    }
}

impl<K, V, O> ExactSizeIterator for IntoIter<K, V, O> {}

impl<K, V, O> FusedIterator for IntoIter<K, V, O> {}

impl<K, V, O> IntoIterator for OrderedMap<K, V, O> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, K, V, O> IntoIterator for &'a OrderedMap<K, V, O> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, O> IntoIterator for &'a mut OrderedMap<K, V, O> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
