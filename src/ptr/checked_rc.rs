use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::Deref;
use std::rc::Rc;

use super::{CheckedBox, NullPointerAccess};
use crate::util::result::ResultExtension;

/// A reference-counted pointer which may be null, backed by an `Option<Rc<T>>`.
///
/// Cloning a CheckedRc shares the held value, which is dropped along with its last owner.
/// Dereferencing a null CheckedRc panics with a [`NullPointerAccess`].
///
/// # Examples
/// ```
/// # use ergo_std::ptr::CheckedRc;
/// let first = CheckedRc::new(vec![1, 2, 3]);
/// let second = first.clone();
/// assert_eq!(first.use_count(), 2);
/// assert!(first.ptr_eq(&second));
/// assert_eq!(second.len(), 3);
/// ```
pub struct CheckedRc<T: ?Sized> {
    inner: Option<Rc<T>>,
}

impl<T> CheckedRc<T> {
    /// Moves `value` into a new reference-counted allocation.
    pub fn new(value: T) -> CheckedRc<T> {
        CheckedRc {
            inner: Some(Rc::new(value)),
        }
    }

    /// Releases this CheckedRc's share of the current value (if any) and takes ownership of
    /// `value` instead.
    pub fn reset_with(&mut self, value: T) {
        self.inner = Some(Rc::new(value));
    }
}

impl<T: ?Sized> CheckedRc<T> {
    /// Creates a CheckedRc which doesn't hold anything.
    pub const fn null() -> CheckedRc<T> {
        CheckedRc {
            inner: None,
        }
    }

    /// Returns true if the CheckedRc doesn't hold a value.
    pub const fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns true if the CheckedRc holds a value.
    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns a reference to the held value, or [`None`] if null.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Returns a reference to the held value, or a [`NullPointerAccess`] if null.
    pub fn try_deref(&self) -> Result<&T, NullPointerAccess> {
        self.get().ok_or_else(NullPointerAccess::new)
    }

    /// Releases this CheckedRc's share of the held value, leaving it null.
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Returns the number of CheckedRcs (and [`Rc`]s) sharing the held value, or 0 if null.
    pub fn use_count(&self) -> usize {
        self.inner.as_ref().map_or(0, Rc::strong_count)
    }

    /// Swaps the contents of two CheckedRcs.
    pub fn swap(&mut self, other: &mut CheckedRc<T>) {
        mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns another [`Rc`] sharing the held value, if there is one.
    pub fn to_rc(&self) -> Option<Rc<T>> {
        self.inner.clone()
    }

    /// Consumes the CheckedRc, returning the underlying [`Rc`] if there is one.
    pub fn into_rc(self) -> Option<Rc<T>> {
        self.inner
    }

    /// Returns true if both CheckedRcs share the same allocation, or are both null.
    pub fn ptr_eq(&self, other: &CheckedRc<T>) -> bool {
        match (&self.inner, &other.inner) {
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }

    /// Converts the held [`Rc`] with `func`, usually to coerce it into a trait object. A null
    /// CheckedRc stays null without calling `func`.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::ptr::CheckedRc;
    /// # use std::fmt::Display;
    /// # use std::rc::Rc;
    /// let number = CheckedRc::new(42);
    /// let display: CheckedRc<dyn Display> = number.cast(|rc| rc as Rc<dyn Display>);
    /// assert_eq!(display.to_string(), "42");
    /// ```
    pub fn cast<U: ?Sized, F: FnOnce(Rc<T>) -> Rc<U>>(self, func: F) -> CheckedRc<U> {
        CheckedRc {
            inner: self.inner.map(func),
        }
    }
}

impl CheckedRc<dyn Any> {
    /// Attempts to downcast the held value to a concrete type, sharing it on success. The result
    /// is null if this CheckedRc is null or holds a value of another type. Either way, this
    /// CheckedRc is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::ptr::CheckedRc;
    /// # use std::any::Any;
    /// # use std::rc::Rc;
    /// let any: CheckedRc<dyn Any> = CheckedRc::new(7_u8).cast(|rc| rc as Rc<dyn Any>);
    /// assert_eq!(*any.downcast::<u8>(), 7);
    /// assert!(any.downcast::<String>().is_null());
    /// ```
    pub fn downcast<U: Any>(&self) -> CheckedRc<U> {
        CheckedRc {
            inner: self.inner.clone().and_then(|rc| rc.downcast::<U>().ok()),
        }
    }
}

impl<T: ?Sized> Deref for CheckedRc<T> {
    type Target = T;

    /// # Panics
    /// Panics with a [`NullPointerAccess`] if the CheckedRc is null.
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.try_deref().throw()
    }
}

impl<T: ?Sized> Clone for CheckedRc<T> {
    fn clone(&self) -> Self {
        CheckedRc {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> Default for CheckedRc<T> {
    fn default() -> Self {
        CheckedRc::null()
    }
}

impl<T: ?Sized> From<Rc<T>> for CheckedRc<T> {
    fn from(value: Rc<T>) -> Self {
        CheckedRc {
            inner: Some(value),
        }
    }
}

impl<T: ?Sized> From<Option<Rc<T>>> for CheckedRc<T> {
    fn from(value: Option<Rc<T>>) -> Self {
        CheckedRc {
            inner: value,
        }
    }
}

impl<T: ?Sized> From<CheckedBox<T>> for CheckedRc<T> {
    fn from(value: CheckedBox<T>) -> Self {
        CheckedRc {
            inner: value.into_box().map(Rc::from),
        }
    }
}

impl<T: ?Sized + Debug> Debug for CheckedRc<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("CheckedRc").field(&value).finish(),
            None => write!(f, "CheckedRc(null)"),
        }
    }
}
