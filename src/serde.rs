use crate::hashtable::{Hashtable, DEFAULT_CAPACITY};

use serde::de::{Deserialize, Error, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserializer;

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

// Upper bound on the bucket count taken from an input's length claim; the
// table never resizes, so an inflated hint would stay allocated.
const MAX_HINTED_CAPACITY: usize = 1 << 12;

pub struct HashtableVisitor<K, V, S> {
    marker: PhantomData<fn() -> Hashtable<K, V, S>>,
}

impl<K, V, S> HashtableVisitor<K, V, S> {
    fn new() -> Self {
        HashtableVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V, S> Visitor<'de> for HashtableVisitor<K, V, S>
where
    K: Deserialize<'de> + Ord + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = Hashtable<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        // Bucket count is fixed for the table's lifetime; size it once here.
        let capacity = access
            .size_hint()
            .unwrap_or(0)
            .clamp(DEFAULT_CAPACITY, MAX_HINTED_CAPACITY);
        let mut table = Hashtable::with_capacity_and_hasher(capacity, S::default());

        while let Some((key, value)) = access.next_entry()? {
            if !table.put(key, value) {
                return Err(M::Error::custom("duplicate key in map"));
            }
        }

        Ok(table)
    }
}

impl<'de, K, V, S> Deserialize<'de> for Hashtable<K, V, S>
where
    K: Deserialize<'de> + Ord + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HashtableVisitor::<K, V, S>::new())
    }
}

/// Serialized as a map in ascending key order.
impl<K, V, H> Serialize for Hashtable<K, V, H>
where
    K: Serialize + Ord,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
