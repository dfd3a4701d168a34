//! Generation-stamped snapshot cursors.
//!
//! A cursor owns a sorted copy of the table's keys plus the table identity
//! and modification count observed when it was created. It does not borrow
//! the table, so the table stays mutable; instead every query takes
//! `&Hashtable` and fails fast once the table has been structurally
//! modified (put, delete, clear) since the snapshot.
//!
//! Protocol
//! - `has_next` validates the generation, then reports whether keys remain.
//! - `next` validates, fails with `Exhausted` past the end, then advances.
//! - `remove` is never supported.
//! - After a `Stale` result the cursor stays stale: modification counts
//!   only grow.

use crate::error::IterError;
use crate::hashtable::Hashtable;
use core::hash::{BuildHasher, Hash};
use log::debug;
use std::vec;

/// Identity of a table at one point in its history.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Generation {
    table: u64,
    mod_count: u64,
}

impl Generation {
    pub(crate) fn new(table: u64, mod_count: u64) -> Self {
        Self { table, mod_count }
    }

    #[cfg(test)]
    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    fn check(&self, live: Generation) -> Result<(), IterError> {
        if live.table != self.table {
            return Err(IterError::WrongTable);
        }
        if live.mod_count != self.mod_count {
            debug!(
                "hashtable {}: stale cursor (snapshot mod_count={}, live={})",
                self.table, self.mod_count, live.mod_count
            );
            return Err(IterError::Stale);
        }
        Ok(())
    }
}

/// Fail-fast cursor over a sorted key snapshot. Created by
/// [`Hashtable::key_cursor`].
#[derive(Debug)]
pub struct KeyCursor<K> {
    keys: vec::IntoIter<K>,
    baseline: Generation,
}

impl<K> KeyCursor<K> {
    pub(crate) fn new(baseline: Generation, keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter(),
            baseline,
        }
    }

    /// Keys left in the snapshot, without validating the table.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn has_next<V, S>(&self, table: &Hashtable<K, V, S>) -> Result<bool, IterError> {
        self.baseline.check(table.generation())?;
        Ok(self.keys.len() > 0)
    }

    pub fn next<V, S>(&mut self, table: &Hashtable<K, V, S>) -> Result<K, IterError> {
        if !self.has_next(table)? {
            return Err(IterError::Exhausted);
        }
        self.keys.next().ok_or(IterError::Exhausted)
    }

    /// Always fails: cursors are read-only views.
    pub fn remove(&mut self) -> Result<(), IterError> {
        Err(IterError::Unsupported)
    }
}

/// Fail-fast cursor yielding values in ascending key order. Created by
/// [`Hashtable::value_cursor`].
///
/// Each step re-queries the live table for the next key's value, so the
/// result is the value stored for that key at the time of the call. Because
/// the generation is validated first, a successful step always sees the
/// table exactly as snapshotted; `None` is only possible for a key the table
/// no longer holds.
#[derive(Debug)]
pub struct ValueCursor<K> {
    keys: KeyCursor<K>,
}

impl<K> ValueCursor<K> {
    pub(crate) fn new(keys: KeyCursor<K>) -> Self {
        Self { keys }
    }

    pub fn remaining(&self) -> usize {
        self.keys.remaining()
    }

    pub fn has_next<V, S>(&self, table: &Hashtable<K, V, S>) -> Result<bool, IterError> {
        self.keys.has_next(table)
    }

    pub fn next<'t, V, S>(
        &mut self,
        table: &'t Hashtable<K, V, S>,
    ) -> Result<Option<&'t V>, IterError>
    where
        K: Ord + Hash,
        S: BuildHasher,
    {
        let key = self.keys.next(table)?;
        Ok(table.get(&key))
    }

    pub fn remove(&mut self) -> Result<(), IterError> {
        Err(IterError::Unsupported)
    }
}
