use std::borrow::Cow;

use crate::{algo::Suggestions, *};

/// Contacts of a node as returned by lookups.
///
/// Array-backed graphs hand out a borrowed view of their storage while compressed
/// representations materialize an owned vector.
pub type Contacts<'a> = Cow<'a, [Node]>;

/// Returns the contacts of an unknown node
#[inline]
pub fn no_contacts<'a>() -> Contacts<'a> {
    Cow::Borrowed(&[])
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with default capacity hints
    fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph reserving space for `n` subscribers
    fn with_capacity(n: usize) -> Self {
        Self::with_config(GraphConfig::new().node_capacity(n))
    }

    /// Creates an empty graph from the given capacity hints
    fn with_config(config: GraphConfig) -> Self;
}

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of subscribers ever referenced by an edge
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of distinct directed edges
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if `u` has been referenced by any edge
    fn has_node(&self, u: Node) -> bool;

    /// Returns an iterator over all known subscribers in order of their first reference
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Traits pertaining getters for contact books
pub trait ContactList: GraphNodeOrder {
    /// Returns the contacts listed by `u` (outgoing edges).
    /// Unknown nodes have no contacts.
    fn contacts_of(&self, u: Node) -> Contacts<'_>;

    /// Returns the subscribers listing `u` as a contact (incoming edges).
    /// Unknown nodes have no contacts.
    fn in_contacts_of(&self, u: Node) -> Contacts<'_>;

    /// Returns the number of contacts listed by `u`
    fn degree_of(&self, u: Node) -> NumContacts;

    /// Returns the number of subscribers listing `u`
    fn in_degree_of(&self, u: Node) -> NumContacts;

    /// Returns *true* if `u` lists `v`
    fn has_contact(&self, u: Node, v: Node) -> bool {
        self.contacts_of(u).contains(&v)
    }

    /// Returns the sum of in- and out-degree of `u`
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumContacts {
        self.degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over all edges in order of the first reference of their source
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.contacts_of(u)
                .into_owned()
                .into_iter()
                .map(move |v| Edge(u, v))
        })
    }
}

/// Provides functions to insert edges.
/// Graphs only grow: there is no way to remove nodes or edges.
pub trait ContactEditing {
    /// Adds the edge `(u, v)`, creating both nodes if necessary.
    /// Returns *true* exactly if the edge was present before, in which case nothing changes.
    fn try_add_contact(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_contacts(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_contact(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch {
    /// Create a graph from an iterator over edges
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + ContactEditing> GraphFromScratch for G {
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new();
        graph.add_contacts(edges);
        graph
    }
}

/// Reports how much heap memory a structure holds on to
pub trait MemoryFootprint {
    /// Returns an estimate of the heap bytes owned by `self`
    fn estimated_heap_size(&self) -> usize;
}

/// The four-operation contract shared by all representations.
///
/// This trait is object-safe: drivers may hold a `Box<dyn ContactGraph>` and stay unaware of
/// the representation in use. It is implemented for every graph providing [`ContactList`] and
/// [`ContactEditing`].
///
/// Graphs carry no internal synchronization. Concurrent callers must serialize all access
/// to a given instance themselves.
pub trait ContactGraph {
    /// Adds the edge `source -> target`.
    /// Adding an edge that already exists is a no-op.
    fn add_contact(&mut self, source: Node, target: Node);

    /// Returns the contacts listed by `id`, empty if `id` is unknown
    fn lookup(&self, id: Node) -> Contacts<'_>;

    /// Returns the subscribers listing `id`, empty if `id` is unknown
    fn rlookup(&self, id: Node) -> Contacts<'_>;

    /// Returns up to ten second-degree contacts of `id` in ascending order.
    /// See [`Suggestions`] for the exact policy.
    fn suggest(&self, id: Node) -> Vec<Node>;

    /// Returns the number of subscribers
    fn node_count(&self) -> NumNodes;

    /// Returns the number of distinct edges
    fn edge_count(&self) -> NumEdges;

    /// Returns an estimate of the heap bytes held by the graph
    fn heap_size(&self) -> usize;
}

impl<G> ContactGraph for G
where
    G: ContactList + ContactEditing + MemoryFootprint,
{
    #[inline]
    fn add_contact(&mut self, source: Node, target: Node) {
        self.try_add_contact(source, target);
    }

    #[inline]
    fn lookup(&self, id: Node) -> Contacts<'_> {
        self.contacts_of(id)
    }

    #[inline]
    fn rlookup(&self, id: Node) -> Contacts<'_> {
        self.in_contacts_of(id)
    }

    fn suggest(&self, id: Node) -> Vec<Node> {
        Suggestions::new().compute(self, id)
    }

    fn node_count(&self) -> NumNodes {
        self.number_of_nodes()
    }

    fn edge_count(&self) -> NumEdges {
        self.number_of_edges()
    }

    fn heap_size(&self) -> usize {
        self.estimated_heap_size()
    }
}
