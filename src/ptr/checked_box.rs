use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use super::NullPointerAccess;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An exclusively owning pointer which may be null, backed by an `Option<Box<T>>`.
///
/// CheckedBox dereferences to `T` like a [`Box`], except that dereferencing a null CheckedBox
/// panics with a [`NullPointerAccess`] rather than requiring an unwrap at every use. Use
/// [`try_deref`](CheckedBox::try_deref) or [`get`](CheckedBox::get) to handle the null case
/// without panicking.
///
/// Methods on CheckedBox take precedence over methods of the same name on `T`, so a method like
/// `T::get` is called as `(*ptr).get()`.
///
/// # Examples
/// ```
/// # use ergo_std::ptr::CheckedBox;
/// let mut ptr = CheckedBox::new(String::from("Hello"));
/// ptr.push_str(", World!");
/// assert_eq!(ptr.len(), 13);
///
/// ptr.reset();
/// assert!(ptr.is_null());
/// assert!(ptr.try_deref().is_err());
/// ```
pub struct CheckedBox<T: ?Sized> {
    inner: Option<Box<T>>,
}

impl<T> CheckedBox<T> {
    /// Allocates `value` on the heap and returns a CheckedBox owning it.
    pub fn new(value: T) -> CheckedBox<T> {
        CheckedBox {
            inner: Some(Box::new(value)),
        }
    }

    /// Drops the currently held value (if any) and takes ownership of `value` instead.
    pub fn reset_with(&mut self, value: T) {
        self.inner = Some(Box::new(value));
    }

    /// Takes ownership of `value`, returning a CheckedBox with whatever was held before.
    pub fn replace(&mut self, value: T) -> CheckedBox<T> {
        CheckedBox {
            inner: self.inner.replace(Box::new(value)),
        }
    }

    /// Consumes the CheckedBox, moving the held value out of the heap.
    pub fn into_inner(self) -> Option<T> {
        self.inner.map(|boxed| *boxed)
    }
}

impl<T: ?Sized> CheckedBox<T> {
    /// Creates a CheckedBox which doesn't hold anything.
    pub const fn null() -> CheckedBox<T> {
        CheckedBox {
            inner: None,
        }
    }

    /// Returns true if the CheckedBox doesn't hold a value.
    pub const fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns true if the CheckedBox holds a value.
    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns a reference to the held value, or [`None`] if null.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Returns a mutable reference to the held value, or [`None`] if null.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_deref_mut()
    }

    /// Returns a reference to the held value, or a [`NullPointerAccess`] if null.
    pub fn try_deref(&self) -> Result<&T, NullPointerAccess> {
        self.get().ok_or_else(NullPointerAccess::new)
    }

    /// Returns a mutable reference to the held value, or a [`NullPointerAccess`] if null.
    pub fn try_deref_mut(&mut self) -> Result<&mut T, NullPointerAccess> {
        self.get_mut().ok_or_else(NullPointerAccess::new)
    }

    /// Drops the held value, leaving the CheckedBox null.
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Gives up ownership of the held value without dropping it, leaving the CheckedBox null.
    pub fn release(&mut self) -> Option<Box<T>> {
        self.inner.take()
    }

    /// Swaps the contents of two CheckedBoxes.
    pub fn swap(&mut self, other: &mut CheckedBox<T>) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Consumes the CheckedBox, returning the underlying [`Box`] if there is one.
    pub fn into_box(self) -> Option<Box<T>> {
        self.inner
    }
}

impl<T> CheckedBox<[T]> {
    /// Allocates a slice of `len` default values.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::ptr::CheckedBox;
    /// let mut slice = CheckedBox::<[u32]>::new_slice(3);
    /// slice[1] = 5;
    /// assert_eq!(*slice, [0, 5, 0]);
    /// ```
    pub fn new_slice(len: usize) -> CheckedBox<[T]>
    where
        T: Default,
    {
        CheckedBox::from_vec(iter::repeat_with(T::default).take(len).collect())
    }

    /// Takes ownership of the elements of `values` as a boxed slice.
    pub fn from_vec(values: Vec<T>) -> CheckedBox<[T]> {
        CheckedBox {
            inner: Some(values.into_boxed_slice()),
        }
    }

    /// Returns the number of elements in the held slice, or 0 if null.
    pub fn len(&self) -> usize {
        self.inner.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns true if the CheckedBox is null or holds an empty slice.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, [`None`] if the index is out of bounds, or
    /// a [`NullPointerAccess`] if null.
    pub fn try_index(&self, index: usize) -> Result<Option<&T>, NullPointerAccess> {
        Ok(self.try_deref()?.get(index))
    }

    /// Returns a mutable reference to the element at `index`, [`None`] if the index is out of
    /// bounds, or a [`NullPointerAccess`] if null.
    pub fn try_index_mut(&mut self, index: usize) -> Result<Option<&mut T>, NullPointerAccess> {
        Ok(self.try_deref_mut()?.get_mut(index))
    }
}

impl<T: ?Sized> Deref for CheckedBox<T> {
    type Target = T;

    /// # Panics
    /// Panics with a [`NullPointerAccess`] if the CheckedBox is null.
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.try_deref().throw()
    }
}

impl<T: ?Sized> DerefMut for CheckedBox<T> {
    /// # Panics
    /// Panics with a [`NullPointerAccess`] if the CheckedBox is null.
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.try_deref_mut().throw()
    }
}

impl<T> Index<usize> for CheckedBox<[T]> {
    type Output = T;

    /// # Panics
    /// Panics if the CheckedBox is null or `index` is out of bounds.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        let slice = self.try_deref().throw();
        let len = slice.len();
        slice.get(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T> IndexMut<usize> for CheckedBox<[T]> {
    /// # Panics
    /// Panics if the CheckedBox is null or `index` is out of bounds.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let slice = self.try_deref_mut().throw();
        let len = slice.len();
        slice.get_mut(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T: ?Sized> Default for CheckedBox<T> {
    fn default() -> Self {
        CheckedBox::null()
    }
}

impl<T: ?Sized> From<Box<T>> for CheckedBox<T> {
    fn from(value: Box<T>) -> Self {
        CheckedBox {
            inner: Some(value),
        }
    }
}

impl<T: ?Sized> From<Option<Box<T>>> for CheckedBox<T> {
    fn from(value: Option<Box<T>>) -> Self {
        CheckedBox {
            inner: value,
        }
    }
}

impl<T> From<Vec<T>> for CheckedBox<[T]> {
    fn from(value: Vec<T>) -> Self {
        CheckedBox::from_vec(value)
    }
}

impl<T: ?Sized + Debug> Debug for CheckedBox<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("CheckedBox").field(&value).finish(),
            None => write!(f, "CheckedBox(null)"),
        }
    }
}
