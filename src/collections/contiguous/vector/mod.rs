//! A module containing [`Vector`] and associtated types.
//!
//! Iteration reuses the standard types: [`IntoIter`](std::vec::IntoIter) for owned iteration and
//! [`Iter`](std::slice::Iter) / [`IterMut`](std::slice::IterMut) from [`std::slice`] for borrowed
//! iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
