use core::fmt;
use thiserror::Error;

/// Iterator-protocol violations raised by snapshot cursors.
///
/// The table itself is never affected; only the offending cursor becomes
/// unusable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterError {
    #[error("table was structurally modified after the snapshot was taken")]
    Stale,
    #[error("no more elements in snapshot")]
    Exhausted,
    #[error("snapshot cursors are read-only")]
    Unsupported,
    #[error("cursor queried with a table it was not created from")]
    WrongTable,
}

/// Rejected insert: the key was already present. Carries the pair back to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> DuplicateKey<K, V> {
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V> fmt::Display for DuplicateKey<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key {:?}", self.key)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> std::error::Error for DuplicateKey<K, V> {}
