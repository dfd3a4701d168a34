//! Chain: singly-linked bucket list with arena-backed nodes.
//!
//! Nodes live in a per-chain `SlotMap` and link to their successor through
//! generational keys, so the list is built without raw pointers. Elements
//! are probed by key equivalence through [`Keyed`].

use crate::entry::Keyed;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

struct Node<T> {
    data: T,
    next: Option<DefaultKey>,
}

pub struct Chain<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `data` after the current tail. O(1).
    pub fn push_back(&mut self, data: T) {
        let k = self.nodes.insert(Node { data, next: None });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    /// Drops every node and resets the links.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Forward iteration in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.nodes.len(),
        }
    }
}

impl<T: Keyed> Chain<T> {
    /// First element whose key compares equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.iter().find(|e| matches(*e, key))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).is_some()
    }

    /// Unlinks and returns the first element whose key compares equal to
    /// `key`, or `None` after scanning the whole chain.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if matches(&node.data, key) {
                let node = self.nodes.remove(k)?;
                match prev {
                    Some(p) => self.nodes[p].next = node.next,
                    None => self.head = node.next,
                }
                if self.tail == Some(k) {
                    self.tail = prev;
                }
                return Some(node.data);
            }
            prev = cur;
            cur = node.next;
        }
        None
    }
}

fn matches<T, Q>(elem: &T, key: &Q) -> bool
where
    T: Keyed,
    T::Key: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let k: &Q = elem.key().borrow();
    k.cmp(key) == Ordering::Equal
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a chain's elements, head to tail.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur?)?;
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
