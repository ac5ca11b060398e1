//! Various general-purpose collection types.
//!
//! # Purpose
//! These types keep a standard collection as their storage and add the operations I keep writing
//! by hand: functional helpers returning new collections, set-like operations and snapshots into
//! other collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref), which saves me from
//! re-exposing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "ordered")]
pub mod ordered;
