/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context.

Examples:
- Few elements spread over all of `u64` -> `FxHashSet`
- Many elements clustered in ranges -> `RoaringTreemap`

The module includes:
- [`Set<T>`]: trait for generic set-like operations
- Concrete implementations: `HashSet` (any hasher) and `RoaringTreemap`.
- [`ContactSet`]: the default deduplicating set over identifiers.
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

use fxhash::FxHashSet;
use roaring::{RoaringTreemap, treemap};

use crate::node::*;

/// The default set of identifiers used to track already seen contacts
pub type ContactSet = FxHashSet<Node>;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries, iteration, and bulk operations.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    /// May clone elements depending on the underlying data structure.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Set<Node> for RoaringTreemap {
    fn insert(&mut self, value: Node) -> bool {
        !RoaringTreemap::insert(self, value)
    }

    fn remove(&mut self, value: &Node) -> bool {
        RoaringTreemap::remove(self, *value)
    }

    type SetIter<'a>
        = treemap::Iter<'a>
    where
        Self: 'a,
        Node: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        RoaringTreemap::iter(self)
    }

    fn contains(&self, value: &Node) -> bool {
        RoaringTreemap::contains(self, *value)
    }

    fn clear(&mut self) {
        RoaringTreemap::clear(self);
    }

    fn len(&self) -> usize {
        RoaringTreemap::len(self) as usize
    }
}
