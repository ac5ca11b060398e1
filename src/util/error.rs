use std::error::Error;
use std::fmt::{self, Display, Formatter};
#[cfg(feature = "ordered")]
use std::fmt::Debug;

#[cfg(feature = "ordered")]
use derive_more::{Display, Error};

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The key requested from an ordered collection isn't present. The key itself is rendered into the
/// message up front so that the error doesn't need to carry the key's type.
#[cfg(feature = "ordered")]
#[derive(Debug, Display, Error)]
#[display("Key {key} not found in collection with {len} entries!")]
pub struct KeyNotFound {
    pub key: String,
    pub len: usize,
}

#[cfg(feature = "ordered")]
impl KeyNotFound {
    pub fn new<K: Debug>(key: &K, len: usize) -> KeyNotFound {
        KeyNotFound {
            key: format!("{:?}", key),
            len,
        }
    }
}
