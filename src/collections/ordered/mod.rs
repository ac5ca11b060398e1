//! Ordered collection types. Namely [`OrderedMap`], a sorted map backed by
//! [`BTreeMap`](std::collections::BTreeMap) whose order is chosen through a [`KeyOrder`].
#![warn(missing_docs)]

pub mod map;

#[doc(inline)]
pub use map::{KeyOrder, Natural, OrderedMap, Reversed};
