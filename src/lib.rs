//! This crate wraps some of the standard library's containers and smart pointers with a friendlier,
//! more explicit surface.
//!
//! # Purpose
//! Rust's [`Vec`], [`BTreeMap`](std::collections::BTreeMap), [`String`], [`Box`] and
//! [`Rc`](std::rc::Rc) are excellent, but some of the things I reach for constantly aren't there
//! (or are spread across the iterator API). The types here keep the standard containers as their
//! storage and just add the conveniences: `map`/`filter`/`reduce` on a Vector that return another
//! Vector, set-like operations between ordered maps, string splitting straight into collections and
//! pointers which check for emptiness before dereferencing.
//!
//! # Method
//! None of the types here implement any storage themselves. Each one is a thin value type around a
//! std container, delegating everything that it can. Where it makes sense, a wrapper implements
//! [`Deref`](std::ops::Deref) to its inner slice or str, which saves me from re-exporting most of
//! the read-only API by hand.
//!
//! # Error Handling
//! As with std, it is more ergonomic for some operations to panic than to return a [`Result`].
//! Indexing out of bounds or dereferencing an empty [`CheckedBox`](ptr::CheckedBox) will panic,
//! but with a message built from a strongly typed error. Everywhere a panic like that can occur,
//! there is also a `try_` counterpart which returns the error (or an [`Option`]) instead.
//!
//! The only public error type is [`NullPointerAccess`](ptr::NullPointerAccess), raised by the
//! checked pointers when they are empty.
//!
//! # Logging
//! This crate logs through the [`log`] facade and never installs a logger itself. Only failure
//! paths are logged, so a well-behaved program produces no output at all.
//!
//! # Features
//! - `contiguous`: [`Vector`](collections::contiguous::Vector).
//! - `ordered`: [`OrderedMap`](collections::ordered::OrderedMap), requires `contiguous`.
//! - `text`: [`Text`](text::Text), requires both collections.
//! - `ptr`: [`CheckedBox`](ptr::CheckedBox) and [`CheckedRc`](ptr::CheckedRc).
//! - `serde`: Serialization support for the collections and [`Text`](text::Text).

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "ptr")]
pub mod ptr;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;
