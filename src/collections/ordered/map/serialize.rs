use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{KeyOrder, OrderedMap};

impl<K: Serialize, V: Serialize, O> Serialize for OrderedMap<K, V, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V, O> Deserialize<'de> for OrderedMap<K, V, O>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    O: KeyOrder<K>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

type MapMarker<K, V, O> = PhantomData<fn() -> OrderedMap<K, V, O>>;

struct OrderedMapVisitor<K, V, O>(MapMarker<K, V, O>);

impl<'de, K, V, O> Visitor<'de> for OrderedMapVisitor<K, V, O>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    O: KeyOrder<K>,
{
    type Value = OrderedMap<K, V, O>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        // Later duplicates overwrite earlier ones, matching insert.
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}
