//! chain-dict: a fixed-capacity, separate-chaining dictionary with sorted
//! snapshot iteration.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a dictionary of unique, ordered keys whose bucket count is fixed
//!   at construction, with iteration that is deterministic (ascending key
//!   order) regardless of how keys hash.
//! - Layers:
//!   - Chain<T>: singly-linked bucket list. Nodes live in a per-chain
//!     `SlotMap` and link through generational keys; elements are probed
//!     by key equivalence via `Keyed`.
//!   - Hashtable<K, V, S>: a boxed slice of chains plus a live-entry count
//!     and a structural modification count. Placement is
//!     `hash(key) % capacity`.
//!   - Snapshot views: `Keys`/`Values`/`Iter` borrow the table and walk a
//!     sorted vector of entry references; `KeyCursor`/`ValueCursor` own a
//!     sorted key copy and validate the table's generation on every step.
//!
//! Constraints
//! - Single-threaded; no internal synchronization.
//! - No resizing or rehashing: `capacity()` never changes, entry count is
//!   unbounded, `is_full()` is always false.
//! - Unique keys: duplicate puts are rejected without side effects.
//! - Key equivalence is `Ord::cmp == Equal`; `Hash` must agree with it.
//!
//! Modification counting
//! - put (successful), delete (successful), and clear each bump the
//!   modification count by exactly one. Reads and rejected writes never do.
//! - Cursors record `(table id, mod count)` and fail with
//!   `IterError::Stale` once it moves, or `IterError::WrongTable` when
//!   queried with a different table.
//!
//! Iteration
//! - Snapshots are collected bucket by bucket, then stable-sorted by key.
//!   Construction is O(n log n); each step is O(1) (value cursors add one
//!   lookup).
//! - Borrowing iterators need no runtime check: the borrow checker rejects
//!   mutation while they are alive.
//!
//! Notes and non-goals
//! - No persistence beyond the optional `serde` feature.
//! - Reverse lookup (`get_key`) is a linear scan and requires `V: Eq`.

mod chain;
pub mod cursor;
pub mod dictionary;
mod entry;
mod error;
pub mod hashtable;
#[cfg(test)]
mod hashtable_proptest;
pub mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public surface
pub use cursor::{KeyCursor, ValueCursor};
pub use dictionary::Dictionary;
pub use error::{DuplicateKey, IterError};
pub use hashtable::{Hashtable, DEFAULT_CAPACITY};
