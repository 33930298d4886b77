/*!
# Directed Contact Graphs

A contact graph stores, for every subscriber, both the contacts it lists (`to`) and the
subscribers listing it (`from`). Keeping the reverse direction redundantly makes reverse
lookups as cheap as forward lookups.

## Layout
Nodes live in an arena (`Vec<ContactNode<_>>`) and are addressed by a dense [`NodeIdx`].
A `FxHashMap<Node, NodeIdx>` maps phone numbers to their slot. Nodes are created lazily the
first time they appear as either endpoint of an edge and are never removed.

## Provided Representations
- [`ArrayGraph`]: adjacency arrays (`Vec<Node>`) pre-sized to the configured contact capacity.
- [`SparseArrayGraph`]: inline small vectors for tiny contact books.
- [`BitmapGraph`]: compressed roaring bitmaps over 64-bit identifiers.

## Invariant
For every edge `(s, t)`: `t` is in `s.to` exactly once and `s` is in `t.from` exactly once.
Both writes happen inside [`ContactEditing::try_add_contact`], the only mutating operation.
*/

use std::{collections::hash_map::Entry, mem::size_of};

use fxhash::{FxBuildHasher, FxHashMap};
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// Adjacency record of a single subscriber
#[derive(Clone)]
struct ContactNode<Nbs: Neighborhood> {
    id: Node,
    to: Nbs,
    from: Nbs,
}

impl<Nbs: Neighborhood> ContactNode<Nbs> {
    fn new(id: Node, contact_capacity: usize) -> Self {
        Self {
            id,
            to: Nbs::with_capacity(contact_capacity),
            from: Nbs::with_capacity(contact_capacity),
        }
    }
}

/// A directed graph over phone numbers storing **outgoing and incoming** contact books.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for both directions.
#[derive(Clone)]
pub struct ContactGraphImpl<Nbs>
where
    Nbs: Neighborhood,
{
    index: FxHashMap<Node, NodeIdx>,
    nodes: Vec<ContactNode<Nbs>>,
    num_edges: NumEdges,
    contact_capacity: usize,
}

/// Contact graph using adjacency arrays (`Vec<Node>`).
pub type ArrayGraph = ContactGraphImpl<ArrNeighborhood>;

/// Contact graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseArrayGraph = ContactGraphImpl<SparseNeighborhood>;

/// Contact graph using compressed roaring bitmaps (`RoaringTreemap`).
pub type BitmapGraph = ContactGraphImpl<BitNeighborhood>;

impl<Nbs: Neighborhood> Default for ContactGraphImpl<Nbs> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<Nbs: Neighborhood> ContactGraphImpl<Nbs> {
    /// Returns the arena slot of `u`, if `u` is known
    #[inline]
    fn slot_of(&self, u: Node) -> Option<&ContactNode<Nbs>> {
        self.index.get(&u).map(|&idx| &self.nodes[idx as usize])
    }

    /// Either gets the slot of an existing node or appends a new, pre-sized one
    fn slot_or_insert(&mut self, u: Node) -> NodeIdx {
        match self.index.entry(u) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let idx = self.nodes.len() as NodeIdx;
                self.nodes.push(ContactNode::new(u, self.contact_capacity));
                entry.insert(idx);
                idx
            }
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for ContactGraphImpl<Nbs> {
    fn with_config(config: GraphConfig) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(config.nodes(), FxBuildHasher::default()),
            nodes: Vec::with_capacity(config.nodes()),
            num_edges: 0,
            contact_capacity: config.contacts(),
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for ContactGraphImpl<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn has_node(&self, u: Node) -> bool {
        self.index.contains_key(&u)
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().map(|node| node.id)
    }
}

impl<Nbs: Neighborhood> ContactList for ContactGraphImpl<Nbs> {
    fn contacts_of(&self, u: Node) -> Contacts<'_> {
        self.slot_of(u)
            .map_or_else(no_contacts, |node| node.to.as_contacts())
    }

    fn in_contacts_of(&self, u: Node) -> Contacts<'_> {
        self.slot_of(u)
            .map_or_else(no_contacts, |node| node.from.as_contacts())
    }

    fn degree_of(&self, u: Node) -> NumContacts {
        self.slot_of(u).map_or(0, |node| node.to.num_of_neighbors())
    }

    fn in_degree_of(&self, u: Node) -> NumContacts {
        self.slot_of(u).map_or(0, |node| node.from.num_of_neighbors())
    }

    fn has_contact(&self, u: Node, v: Node) -> bool {
        self.slot_of(u).is_some_and(|node| node.to.has_neighbor(v))
    }
}

impl<Nbs: Neighborhood> ContactEditing for ContactGraphImpl<Nbs> {
    fn try_add_contact(&mut self, u: Node, v: Node) -> bool {
        let source = self.slot_or_insert(u) as usize;
        let target = self.slot_or_insert(v) as usize;

        if self.nodes[source].to.try_add_neighbor(v) {
            trace!(source = u, target = v, "contact already present");
            return true;
        }

        // `from` mirrors `to`, so `u` cannot be in `v.from` yet
        self.nodes[target].from.add_neighbor(u);
        self.num_edges += 1;
        false
    }
}

impl<Nbs: Neighborhood> MemoryFootprint for ContactGraphImpl<Nbs> {
    fn estimated_heap_size(&self) -> usize {
        let index = self.index.capacity() * (size_of::<Node>() + size_of::<NodeIdx>());
        let arena = self.nodes.capacity() * size_of::<ContactNode<Nbs>>();
        let books: usize = self
            .nodes
            .iter()
            .map(|node| node.to.heap_size() + node.from.heap_size())
            .sum();

        index + arena + books
    }
}

impl<Nbs: NeighborhoodSlice> ContactGraphImpl<Nbs> {
    /// Returns the contacts of `u` as a slice of the underlying storage.
    /// Only available for array-backed representations.
    pub fn contacts_slice_of(&self, u: Node) -> &[Node] {
        self.slot_of(u).map_or(&[] as &[Node], |node| node.to.as_slice())
    }

    /// Returns the subscribers listing `u` as a slice of the underlying storage.
    /// Only available for array-backed representations.
    pub fn in_contacts_slice_of(&self, u: Node) -> &[Node] {
        self.slot_of(u).map_or(&[] as &[Node], |node| node.from.as_slice())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_array_graph,
    ArrayGraph,
    (
        GraphNew,
        Scenario,
        Symmetry,
        Absence,
        Suggest,
        Duplicates,
        SelfContact
    )
);

test_graph_ops!(
    test_sparse_array_graph,
    SparseArrayGraph,
    (
        GraphNew,
        Scenario,
        Symmetry,
        Absence,
        Suggest,
        Duplicates,
        SelfContact
    )
);

test_graph_ops!(
    test_bitmap_graph,
    BitmapGraph,
    (
        GraphNew,
        Scenario,
        Symmetry,
        Absence,
        Suggest,
        Duplicates,
        SelfContact
    )
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_lookups_are_views() {
        let graph = ArrayGraph::from_edges([Edge(1, 5), Edge(1, 3), Edge(2, 5)]);
        assert!(matches!(graph.contacts_of(1), Contacts::Borrowed(_)));
        assert_eq!(graph.contacts_slice_of(1), &[5, 3]);
        assert_eq!(graph.in_contacts_slice_of(5), &[1, 2]);
        assert!(graph.contacts_slice_of(42).is_empty());
    }

    #[test]
    fn bitmap_lookups_are_ascending() {
        let graph = BitmapGraph::from_edges([Edge(1, 5), Edge(1, 3), Edge(1, u64::MAX), Edge(1, 0)]);
        assert_eq!(graph.contacts_of(1).to_vec(), vec![0, 3, 5, u64::MAX]);
    }

    #[test]
    fn vertices_in_first_reference_order() {
        let graph = BitmapGraph::from_edges([Edge(9, 4), Edge(4, 7), Edge(1, 9)]);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![9, 4, 7, 1]);
        assert!(graph.has_node(7));
        assert!(!graph.has_node(5));
    }

    #[test]
    fn heap_size_grows() {
        let mut graph = ArrayGraph::with_config(GraphConfig::new().contact_capacity(2));
        let empty = graph.estimated_heap_size();
        graph.add_contacts((0..100).map(|v| Edge(0, v)));
        assert!(graph.estimated_heap_size() > empty);

        let mut bitmap = BitmapGraph::new();
        let empty = bitmap.estimated_heap_size();
        bitmap.add_contacts((0..100).map(|v| Edge(0, v)));
        assert!(bitmap.estimated_heap_size() > empty);
    }
}
