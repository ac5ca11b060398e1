use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut, RangeBounds};

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The index returned by [`Vector::find_first_index`] and [`Vector::find_first_index_if`] when no
/// element matches. No Vector can hold this many elements, so it is never a valid index.
pub const NOT_FOUND: usize = usize::MAX;

const MAX_SIZE: usize = isize::MAX as usize;

/// A variable size contiguous collection, backed by a [`Vec<T>`].
///
/// Vector dereferences to a slice, so all of the read-only slice API (iteration, unchecked
/// indexing, searching) is available directly. The methods defined here are the checked and
/// functional additions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `size` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_all` | `O(n-i+m)` |
/// | `erase` | `O(n-i)` |
/// | `map` / `filter` / `reduce` | `O(n)` |
/// | `sort` | `O(n log n)` |
/// | `find_first_index` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take `O(n)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector<T> {
    pub(crate) inner: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with size and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.size(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            inner: Vec::new(),
        }
    }

    /// Creates a new Vector with at least the provided capacity, allowing values to be added
    /// without reallocation.
    pub fn with_capacity(cap: usize) -> Vector<T> {
        Vector {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Creates a Vector containing `count` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::repeat("ea", 3);
    /// assert_eq!(vec, ["ea", "ea", "ea"]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        Vector {
            inner: vec![value; count],
        }
    }

    /// Creates a Vector containing `count` default values.
    pub fn repeat_default(count: usize) -> Vector<T>
    where
        T: Default,
    {
        iter::repeat_with(T::default).take(count).collect()
    }

    /// Returns the number of elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the theoretical maximum number of elements a Vector of `T` can hold, limited by the
    /// maximum size of an allocation.
    pub const fn max_size(&self) -> usize {
        match size_of::<T>() {
            0 => MAX_SIZE,
            size => MAX_SIZE / size,
        }
    }

    /// Returns the current capacity of the Vector.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= size + extra.
    ///
    /// # Panics
    /// Panics if the new capacity exceeds [`isize::MAX`] bytes.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra);
    }

    /// Shrinks the capacity of the Vector as close to its size as the allocator allows.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::from(['a', 'b', 'c']);
    /// assert_eq!(*vec.at(1), 'b');
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.check_index(index);
        &self.inner[index]
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.inner[index]
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn try_at(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the first element of the Vector, if any.
    pub fn front(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns a mutable reference to the first element of the Vector, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.first_mut()
    }

    /// Returns the last element of the Vector, if any.
    pub fn back(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns a mutable reference to the last element of the Vector, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.last_mut()
    }

    /// Returns the contents of the Vector as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns the underlying [`Vec`].
    pub const fn as_vec(&self) -> &Vec<T> {
        &self.inner
    }

    /// Returns the underlying [`Vec`] mutably.
    pub fn as_mut_vec(&mut self) -> &mut Vec<T> {
        &mut self.inner
    }

    /// Removes all elements from the Vector, keeping its capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Pushes the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector wasn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Inserts the provided value at the given index, moving all following elements back by one.
    /// An index equal to the size of the Vector appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the size of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(vec, [0, 200, 100, 1, 2, 300]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.check_position(index);
        self.inner.insert(index, value);
    }

    /// Inserts `count` clones of `value` at the given index.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the size of the Vector.
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T)
    where
        T: Clone,
    {
        self.check_position(index);
        self.inner.splice(index..index, iter::repeat_n(value, count));
    }

    /// Inserts every item produced by `items` at the given index, keeping their order.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the size of the Vector.
    #[track_caller]
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) {
        self.check_position(index);
        self.inner.splice(index..index, items);
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1), 'e');
    /// assert_eq!(vec.erase(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> T {
        self.check_index(index);
        self.inner.remove(index)
    }

    /// Removes the elements in `range`, returning them as a new Vector.
    ///
    /// # Panics
    /// Panics if the range is decreasing or extends past the end of the Vector.
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Vector<T> {
        self.inner.drain(range).collect()
    }

    /// Resizes the Vector to `new_size`, filling new slots with default values or dropping the
    /// excess elements.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        self.inner.resize_with(new_size, T::default);
    }

    /// Resizes the Vector to `new_size`, filling new slots with clones of `value` or dropping the
    /// excess elements.
    pub fn resize_with_value(&mut self, new_size: usize, value: T)
    where
        T: Clone,
    {
        self.inner.resize(new_size, value);
    }

    /// Swaps the contents of two Vectors without moving any elements.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Moves all elements from `other` onto the end of self.
    pub fn append(&mut self, mut other: Vector<T>) {
        self.inner.append(&mut other.inner);
    }

    /// Returns the number of elements equal to `value`.
    pub fn count_value(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.inner.iter().filter(|item| *item == value).count()
    }

    /// Returns the number of elements for which `pred` holds.
    pub fn count_if<F: FnMut(&T) -> bool>(&self, mut pred: F) -> usize {
        self.inner.iter().filter(|item| pred(*item)).count()
    }

    /// Creates a new Vector by applying `func` to each element in order. The result always has the
    /// same size as self.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.map(|i| i.to_string()), ["1", "2", "3"].map(String::from));
    /// ```
    pub fn map<U, F: FnMut(&T) -> U>(&self, func: F) -> Vector<U> {
        self.inner.iter().map(func).collect()
    }

    /// Creates a new Vector containing clones of the elements for which `pred` holds, preserving
    /// their relative order.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(vec.filter(|i| i % 2 == 0), [2, 4, 6]);
    /// ```
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Vector<T>
    where
        T: Clone,
    {
        self.inner.iter().filter(|item| pred(*item)).cloned().collect()
    }

    /// Folds every element into an accumulator, starting with `init` and working from the front.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4]);
    /// assert_eq!(vec.reduce(0, |acc, i| acc + i), 10);
    /// ```
    pub fn reduce<A, F: FnMut(A, &T) -> A>(&self, init: A, op: F) -> A {
        self.inner.iter().fold(init, op)
    }

    /// Calls `func` with a reference to each element in order.
    pub fn for_each<F: FnMut(&T)>(&self, func: F) {
        self.inner.iter().for_each(func);
    }

    /// Calls `func` with a mutable reference to each element in order.
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, func: F) {
        self.inner.iter_mut().for_each(func);
    }

    /// Sorts the Vector in ascending order. The sort is stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.inner.sort();
    }

    /// Sorts the Vector with the provided comparator. The sort is stable.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.inner.sort_by(compare);
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Returns the index of the first element equal to `value`, or [`NOT_FOUND`] if there isn't
    /// one.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::collections::contiguous::{Vector, NOT_FOUND};
    /// let vec = Vector::from([5, 3, 5]);
    /// assert_eq!(vec.find_first_index(&5), 0);
    /// assert_eq!(vec.find_first_index(&4), NOT_FOUND);
    /// ```
    pub fn find_first_index(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.find_first_index_if(|item| item == value)
    }

    /// Returns the index of the first element for which `pred` holds, or [`NOT_FOUND`] if there
    /// isn't one.
    pub fn find_first_index_if<F: FnMut(&T) -> bool>(&self, pred: F) -> usize {
        self.inner.iter().position(pred).unwrap_or(NOT_FOUND)
    }

    /// Returns true if both Vectors contain equal elements in the same order.
    pub fn equals(&self, other: &Vector<T>) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    /// Checks that the provided index refers to an existing element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.size() {
            Err(IndexOutOfBounds {
                index,
                len: self.size(),
            }).throw()
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes the end.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the size.
    #[track_caller]
    pub(crate) fn check_position(&self, index: usize) {
        if index > self.size() {
            Err(IndexOutOfBounds {
                index,
                len: self.size(),
            }).throw()
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.inner.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        Vector {
            inner: Vec::from_iter(value),
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector {
            inner: value,
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.inner
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector {
            inner: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector {
            inner: value.to_vec(),
        }
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        *self.inner == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        *self.inner == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Vector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.inner == *other
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.inner)
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
