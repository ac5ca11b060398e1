//! Contiguous collection types. Namely [`Vector`], a growable sequence backed by [`Vec`].
#![warn(missing_docs)]

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
#[doc(inline)]
pub use vector::NOT_FOUND;
