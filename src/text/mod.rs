//! A module containing [`Text`], a growable UTF-8 string backed by [`String`].
//!
//! Text converts straight into this crate's collections: splitting produces a
//! [`Vector`](crate::collections::contiguous::Vector) of segments, while
//! [`to_map`](Text::to_map) and the counting methods produce an
//! [`OrderedMap`](crate::collections::ordered::OrderedMap).
#![warn(missing_docs)]

mod text;

pub use text::*;
