//! Entry: the owned key/value pair stored in a bucket chain.

use core::cmp::Ordering;

/// Elements a [`Chain`](crate::chain::Chain) can probe by key.
///
/// Key equivalence is `Ord::cmp(..) == Ordering::Equal`, not `PartialEq`.
pub trait Keyed {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Ord, V> Keyed for Entry<K, V> {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.key
    }
}

/// Ascending order by key; used to sort snapshots.
#[inline]
pub(crate) fn by_key<K: Ord, V>(a: &&Entry<K, V>, b: &&Entry<K, V>) -> Ordering {
    a.key.cmp(&b.key)
}
