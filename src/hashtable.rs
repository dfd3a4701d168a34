//! Hashtable: fixed-capacity separate-chaining dictionary.

use crate::chain::Chain;
use crate::cursor::{Generation, KeyCursor, ValueCursor};
use crate::entry::{by_key, Entry};
use crate::error::DuplicateKey;
use crate::iter::{Iter, Keys, Values};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};

/// Bucket count used by [`Hashtable::new`] and `Default`.
pub const DEFAULT_CAPACITY: usize = 16;

// Distinguishes tables so a cursor cannot be replayed against another one.
static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

/// A dictionary of unique keys over a fixed number of bucket chains.
///
/// The bucket count is chosen at construction and never changes; the
/// number of entries is unbounded, so [`is_full`](Self::is_full) is always
/// `false`. Keys are compared with `Ord` and placed with `Hash`, so the two
/// must agree on equality.
pub struct Hashtable<K, V, S = DefaultHashBuilder> {
    buckets: Box<[Chain<Entry<K, V>>]>,
    len: usize,
    mod_count: u64,
    id: u64,
    hasher: S,
}

impl<K, V> Hashtable<K, V>
where
    K: Ord + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for Hashtable<K, V>
where
    K: Ord + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Hashtable<K, V, S> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always `false`: only the bucket count is fixed, not the entry count.
    pub fn is_full(&self) -> bool {
        false
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Removes every entry. Counts as a single structural modification.
    pub fn clear(&mut self) {
        let dropped = self.len;
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
        self.mod_count += 1;
        debug!(
            "hashtable clear: dropped {dropped} entries, mod_count={}",
            self.mod_count
        );
    }

    pub(crate) fn generation(&self) -> Generation {
        Generation::new(self.id, self.mod_count)
    }
}

impl<K, V, S> Hashtable<K, V, S>
where
    K: Ord,
{
    /// Every entry, in ascending key order.
    pub(crate) fn snapshot(&self) -> Vec<&Entry<K, V>> {
        debug_assert_eq!(
            self.buckets.iter().map(Chain::len).sum::<usize>(),
            self.len
        );
        let mut entries = Vec::with_capacity(self.len);
        for bucket in self.buckets.iter().filter(|b| !b.is_empty()) {
            entries.extend(bucket.iter());
        }
        entries.sort_by(by_key);
        trace!(
            "hashtable snapshot: {} entries at mod_count={}",
            entries.len(),
            self.mod_count
        );
        entries
    }

    /// Keys in ascending order. The table cannot be mutated while the
    /// iterator is alive.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.snapshot())
    }

    /// Values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.snapshot())
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.snapshot())
    }

    /// Owned, sorted key snapshot that checks for structural modification
    /// on every step. See [`KeyCursor`].
    pub fn key_cursor(&self) -> KeyCursor<K>
    where
        K: Clone,
    {
        let keys = self.snapshot().into_iter().map(|e| e.key.clone()).collect();
        KeyCursor::new(self.generation(), keys)
    }

    /// Like [`key_cursor`](Self::key_cursor), but each step looks the
    /// value up in the live table.
    pub fn value_cursor(&self) -> ValueCursor<K>
    where
        K: Clone,
    {
        ValueCursor::new(self.key_cursor())
    }
}

impl<K, V, S> Hashtable<K, V, S>
where
    K: Ord + Hash,
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        assert!(capacity > 0, "hashtable capacity must be non-zero");
        let buckets = std::iter::repeat_with(Chain::new).take(capacity).collect();
        let id = NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed);
        debug!("hashtable {id}: created with {capacity} buckets");
        Self {
            buckets,
            len: 0,
            mod_count: 0,
            id,
            hasher,
        }
    }

    fn bucket_index<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        // u64 is already non-negative; the modulo bounds it to the table.
        (self.hasher.hash_one(q) % self.buckets.len() as u64) as usize
    }

    /// Inserts `key -> value` unless an equal key is present. Returns
    /// whether the entry was added; a rejected pair is dropped.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.try_put(key, value).is_ok()
    }

    /// Like [`put`](Self::put), but hands a rejected pair back.
    pub fn try_put(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];
        if bucket.contains(&key) {
            return Err(DuplicateKey { key, value });
        }
        bucket.push_back(Entry::new(key, value));
        self.len += 1;
        self.mod_count += 1;
        trace!(
            "hashtable put: bucket={idx} len={} mod_count={}",
            self.len,
            self.mod_count
        );
        Ok(())
    }

    /// Removes the entry for `key`. Returns whether one was removed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Ord,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and returns the owned pair.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Ord,
    {
        if self.is_empty() {
            return None;
        }
        let idx = self.bucket_index(key);
        let entry = self.buckets[idx].remove(key)?;
        self.len -= 1;
        self.mod_count += 1;
        trace!(
            "hashtable delete: bucket={idx} len={} mod_count={}",
            self.len,
            self.mod_count
        );
        Some(entry.into_pair())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Ord,
    {
        self.buckets[self.bucket_index(key)]
            .find(key)
            .map(|e| &e.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Ord,
    {
        self.buckets[self.bucket_index(key)].contains(key)
    }

    /// Reverse lookup: the first key (bucket order, then chain order) whose
    /// value equals `value`. O(n).
    pub fn get_key(&self, value: &V) -> Option<&K>
    where
        V: Eq,
    {
        if self.is_empty() {
            return None;
        }
        self.buckets
            .iter()
            .flat_map(Chain::iter)
            .find(|e| e.value == *value)
            .map(|e| &e.key)
    }
}

impl<'a, K: Ord, V, S> IntoIterator for &'a Hashtable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equal when both hold the same key/value pairs; bucket count and hasher
/// are ignored.
impl<K, V, S> PartialEq for Hashtable<K, V, S>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq, S> Eq for Hashtable<K, V, S> {}

impl<K, V, S> fmt::Debug for Hashtable<K, V, S>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
