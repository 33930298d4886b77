/*!
# Graph Representations

All graphs share one arena layout (see [`ContactGraphImpl`]) and differ only in how a single
contact book is stored. That choice is captured by the [`Neighborhood`] trait:

- [`ArrNeighborhood`]: a plain `Vec<Node>` with cheap appends. Lookups are borrowed views.
- [`SparseNeighborhood`]: a `SmallVec<[Node; N]>`, like the above but inline for tiny books.
- [`BitNeighborhood`]: a compressed `RoaringTreemap`, deduplicating and compact over sparse
  64-bit identifiers, but lookups have to materialize a vector.

Every representation deduplicates: adding a contact twice leaves a single occurrence.
*/

use std::{fmt::Display, str::FromStr};

use crate::{ops::*, *};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;

/// Trait for methods on a single contact book
pub trait Neighborhood: Clone + Default {
    /// Creates an empty Neighborhood that may reserve space for `capacity` contacts
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumContacts;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the neighbors as a sequence, borrowed whenever the storage allows it
    fn as_contacts(&self) -> Contacts<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node);

    /// Returns an estimate of the heap bytes owned by the Neighborhood
    fn heap_size(&self) -> usize;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a slice-reference of the neighborhood
    fn as_slice(&self) -> &[Node];
}

/// Selects one of the provided representations at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// [`ArrayGraph`]
    #[default]
    Array,
    /// [`SparseArrayGraph`]
    SparseArray,
    /// [`BitmapGraph`]
    Bitmap,
}

impl Backend {
    /// All available backends
    pub const ALL: [Backend; 3] = [Backend::Array, Backend::SparseArray, Backend::Bitmap];

    /// Creates an empty graph of this representation behind the common contract
    pub fn build(self, config: GraphConfig) -> Box<dyn ContactGraph> {
        match self {
            Backend::Array => Box::new(ArrayGraph::with_config(config)),
            Backend::SparseArray => Box::new(SparseArrayGraph::with_config(config)),
            Backend::Bitmap => Box::new(BitmapGraph::with_config(config)),
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Backend::Array => "array",
            Backend::SparseArray => "sparse",
            Backend::Bitmap => "bitmap",
        })
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "array" => Ok(Backend::Array),
            "sparse" => Ok(Backend::SparseArray),
            "bitmap" | "roaring" => Ok(Backend::Bitmap),
            _ => Err(Error::UnknownBackend(s.to_string())),
        }
    }
}
