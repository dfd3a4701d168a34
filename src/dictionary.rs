//! Abstract dictionary interface.

use crate::hashtable::Hashtable;
use crate::iter::{Keys, Values};
use core::hash::{BuildHasher, Hash};

/// A key/value dictionary with unique keys, reverse lookup, and sorted
/// key/value views.
///
/// Absence and duplication are reported through return values, never as
/// errors.
pub trait Dictionary<K, V> {
    /// Iterator over keys in ascending order.
    type Keys<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;

    /// Iterator over values in ascending order of their keys.
    type Values<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    /// Adds `key -> value`; `false` if the key is already present.
    fn put(&mut self, key: K, value: V) -> bool;

    /// Removes `key`; `false` if it was absent.
    fn delete(&mut self, key: &K) -> bool;

    fn get(&self, key: &K) -> Option<&V>;

    /// Some key mapped to `value`, if any.
    fn get_key(&self, value: &V) -> Option<&K>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool;

    fn clear(&mut self);

    fn keys(&self) -> Self::Keys<'_>;

    fn values(&self) -> Self::Values<'_>;
}

impl<K, V, S> Dictionary<K, V> for Hashtable<K, V, S>
where
    K: Ord + Hash,
    V: Eq,
    S: BuildHasher,
{
    type Keys<'a>
        = Keys<'a, K, V>
    where
        Self: 'a,
        K: 'a;

    type Values<'a>
        = Values<'a, K, V>
    where
        Self: 'a,
        V: 'a;

    fn put(&mut self, key: K, value: V) -> bool {
        Hashtable::put(self, key, value)
    }

    fn delete(&mut self, key: &K) -> bool {
        Hashtable::delete(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Hashtable::get(self, key)
    }

    fn get_key(&self, value: &V) -> Option<&K> {
        Hashtable::get_key(self, value)
    }

    fn len(&self) -> usize {
        Hashtable::len(self)
    }

    fn is_empty(&self) -> bool {
        Hashtable::is_empty(self)
    }

    fn is_full(&self) -> bool {
        Hashtable::is_full(self)
    }

    fn clear(&mut self) {
        Hashtable::clear(self)
    }

    fn keys(&self) -> Self::Keys<'_> {
        Hashtable::keys(self)
    }

    fn values(&self) -> Self::Values<'_> {
        Hashtable::values(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::Hashtable;

    // Exercised only through the trait, as a generic caller would.
    fn fill<D: Dictionary<u8, char>>(d: &mut D) {
        for (i, c) in "dacb".chars().enumerate() {
            assert!(d.put(i as u8 * 3, c));
        }
        assert!(!d.put(0, 'z'));
    }

    #[test]
    fn hashtable_through_trait() {
        let mut t: Hashtable<u8, char> = Hashtable::with_capacity(2);
        fill(&mut t);

        assert_eq!(Dictionary::len(&t), 4);
        assert_eq!(Dictionary::keys(&t).copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(
            Dictionary::values(&t).copied().collect::<String>(),
            "dacb"
        );
        assert_eq!(Dictionary::get_key(&t, &'c'), Some(&6));
        assert!(Dictionary::delete(&mut t, &6));
        assert_eq!(Dictionary::get(&t, &6), None);
        assert!(!Dictionary::is_full(&t));
        Dictionary::clear(&mut t);
        assert!(Dictionary::is_empty(&t));
    }
}
