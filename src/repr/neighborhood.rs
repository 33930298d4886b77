use std::{borrow::Cow, iter::Copied, mem::size_of, slice::Iter};

use roaring::{RoaringTreemap, treemap};
use smallvec::{Array, SmallVec};

use super::*;

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    fn num_of_neighbors(&self) -> NumContacts {
        self.0.len() as NumContacts
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn as_contacts(&self) -> Contacts<'_> {
        Cow::Borrowed(self.0.as_slice())
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn heap_size(&self) -> usize {
        self.0.capacity() * size_of::<Node>()
    }
}

impl NeighborhoodSlice for ArrNeighborhood {
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if most contact books are known to be tiny; capacity hints are ignored so
/// that short books stay inline.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn with_capacity(_capacity: usize) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumContacts {
        self.0.len() as NumContacts
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn as_contacts(&self) -> Contacts<'_> {
        Cow::Borrowed(self.0.as_slice())
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn heap_size(&self) -> usize {
        if self.0.spilled() {
            self.0.capacity() * size_of::<Node>()
        } else {
            0
        }
    }
}

impl<const N: usize> NeighborhoodSlice for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// A Neighborhood represented by a compressed 64-bit roaring bitmap.
/// Neighbors are always iterated in ascending order.
#[derive(Default, Clone)]
pub struct BitNeighborhood(pub RoaringTreemap);

impl Neighborhood for BitNeighborhood {
    fn with_capacity(_capacity: usize) -> Self {
        Self(RoaringTreemap::new())
    }

    fn num_of_neighbors(&self) -> NumContacts {
        self.0.len() as NumContacts
    }

    type NeighborhoodIter<'a>
        = treemap::Iter<'a>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter()
    }

    fn as_contacts(&self) -> Contacts<'_> {
        Cow::Owned(self.0.iter().collect())
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.contains(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        !self.0.insert(u)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.insert(u);
    }

    fn heap_size(&self) -> usize {
        // The portable serialization is a close upper bound of the in-memory containers
        self.0.serialized_size()
    }
}
