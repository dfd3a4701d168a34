//! Borrow-checked snapshot iterators.
//!
//! Each iterator owns a vector of entry references collected from every
//! bucket and sorted by key when it was created. Because it also borrows the
//! table, no structural modification can happen while it is alive, so these
//! iterators need no runtime staleness check. For the owned, fail-fast
//! variant see [`crate::cursor`].

use crate::entry::Entry;
use core::iter::FusedIterator;
use std::vec;

/// Keys in ascending order. Created by [`Hashtable::keys`](crate::Hashtable::keys).
pub struct Keys<'a, K, V> {
    inner: vec::IntoIter<&'a Entry<K, V>>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(sorted: Vec<&'a Entry<K, V>>) -> Self {
        Self {
            inner: sorted.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| &e.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| &e.key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values in ascending order of their keys. Created by
/// [`Hashtable::values`](crate::Hashtable::values).
///
/// The snapshot holds references into the live table, so each value read is
/// the value currently stored for that key.
pub struct Values<'a, K, V> {
    inner: vec::IntoIter<&'a Entry<K, V>>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(sorted: Vec<&'a Entry<K, V>>) -> Self {
        Self {
            inner: sorted.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| &e.value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// `(key, value)` pairs in ascending key order.
pub struct Iter<'a, K, V> {
    inner: vec::IntoIter<&'a Entry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(sorted: Vec<&'a Entry<K, V>>) -> Self {
        Self {
            inner: sorted.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (&e.key, &e.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
