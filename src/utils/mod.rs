/*!
# Utilities

Provides abstractions over [`Set`] for more flexibility in algorithms and the
[`FromCapacity`] helper to construct them pre-sized.

You probably do not need to interact with this module directly.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use roaring::RoaringTreemap;

pub mod set;

pub use set::{ContactSet, Set};

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self;
}

impl<T> FromCapacity for Vec<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl FromCapacity for RoaringTreemap {
    fn from_capacity(_capacity: usize) -> Self {
        // Containers are allocated on demand
        Self::new()
    }
}
