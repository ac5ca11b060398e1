//! A module containing [`OrderedMap`] and associtated types.
//!
//! The other included types provide owned and borrowed iteration over entries, keys or values, as
//! well as the [`KeyOrder`] trait and its two provided orders, [`Natural`] and [`Reversed`].
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of an OrderedMap in
//! place would break its ordering.
//!
//! [`OrderedMap`] is also re-exported under the parent module.

mod iter;
mod order;
mod ordered_map;
#[cfg(feature = "serde")]
mod serialize;
mod tests;

pub use iter::*;
pub use order::*;
pub use ordered_map::*;
