//! Owning pointers which check for emptiness before every dereference.
//!
//! [`CheckedBox`] wraps an `Option<Box<T>>` and [`CheckedRc`] wraps an `Option<Rc<T>>`. Both can
//! be null, and both dereference like the pointer they wrap. Where a plain `Option` would need to
//! be unwrapped first, these panic with a [`NullPointerAccess`] when empty, and offer a `try_`
//! method that returns the error instead.
//!
//! [`CheckedBox<[T]>`](CheckedBox) also indexes its slice, checking emptiness and then bounds.
#![warn(missing_docs)]

mod checked_box;
mod checked_rc;
mod error;
mod tests;

pub use checked_box::*;
pub use checked_rc::*;
pub use error::*;
