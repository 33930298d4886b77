/*!
Second-degree contact suggestions ("who might `u` know").

A suggestion for `u` is a contact of one of `u`'s contacts that is neither `u` itself nor
already listed by `u`. The traversal is shared by every representation and only relies on
[`ContactList::contacts_of`].

# Discovery order
First-degree contacts are visited in ascending order, and the contacts of each of them in
ascending order as well. The first `limit` distinct candidates found this way are kept. Since
array-backed graphs store contacts in insertion order, their books are sorted on the fly; this
makes the kept candidates identical across representations.
*/

use std::borrow::Cow;

use tracing::trace;

use super::*;

/// Maximum number of suggestions returned by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Configurable second-degree traversal.
///
/// # Example
/// ```
/// use contactgraph::{algo::*, prelude::*};
///
/// let graph = BitmapGraph::from_edges((10..30).map(|v| Edge(1, v)).chain([Edge(0, 1)]));
/// let top = Suggestions::new().limit(3).compute(&graph, 0);
/// assert_eq!(top, vec![10, 11, 12]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Suggestions {
    limit: usize,
    sorted: bool,
}

impl Default for Suggestions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
            sorted: true,
        }
    }
}

impl Suggestions {
    /// Creates a traversal returning at most ten suggestions in ascending order
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of suggestions
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// If *false*, suggestions are returned in discovery order instead of ascending order
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Computes the suggestions of `u` using the default [`ContactSet`]
    pub fn compute<G>(&self, graph: &G, u: Node) -> Vec<Node>
    where
        G: ContactList,
    {
        self.compute_with::<G, ContactSet>(graph, u)
    }

    /// Computes the suggestions of `u`, tracking seen identifiers in a set of type `S`.
    ///
    /// Unknown nodes and nodes without contacts have no suggestions.
    pub fn compute_with<G, S>(&self, graph: &G, u: Node) -> Vec<Node>
    where
        G: ContactList,
        S: Set<Node> + FromCapacity,
    {
        let first_degree = ascending(graph.contacts_of(u));
        if first_degree.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        // Holds `u`, its contacts and every accepted suggestion
        let reserve = self.limit.min(DEFAULT_SUGGESTION_LIMIT);
        let mut seen = S::from_capacity(first_degree.len() + reserve + 1);
        seen.insert(u);
        seen.insert_multiple(first_degree.iter().copied());

        let mut suggestions = Vec::with_capacity(reserve);
        'search: for &v in first_degree.iter() {
            for &w in ascending(graph.contacts_of(v)).iter() {
                if !seen.insert(w) {
                    suggestions.push(w);
                    if suggestions.len() == self.limit {
                        break 'search;
                    }
                }
            }
        }

        trace!(
            node = u,
            first_degree = first_degree.len(),
            found = suggestions.len(),
            "computed suggestions"
        );

        if self.sorted {
            suggestions.sort_unstable();
        }
        suggestions
    }
}

/// Returns the contacts in ascending order, only copying them if they are not sorted yet
fn ascending(contacts: Contacts<'_>) -> Contacts<'_> {
    if contacts.is_sorted() {
        contacts
    } else {
        let mut contacts = contacts.into_owned();
        contacts.sort_unstable();
        Cow::Owned(contacts)
    }
}

/// Suggestions with default settings, available on every graph
pub trait Suggest: ContactList + Sized {
    /// Returns up to ten second-degree contacts of `u` in ascending order
    fn suggestions_of(&self, u: Node) -> Vec<Node> {
        Suggestions::new().compute(self, u)
    }

    /// Returns all second-degree contacts of `u` in ascending order
    fn all_suggestions_of(&self, u: Node) -> Vec<Node> {
        Suggestions::new().limit(usize::MAX).compute(self, u)
    }
}

impl<G: ContactList> Suggest for G {}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use roaring::RoaringTreemap;

    use super::*;

    /// `0` knows `1..=3`, each of which knows a disjoint block of 10 identifiers
    fn blocks<G: GraphNew + ContactEditing>() -> G {
        let mut graph = G::new();
        for v in 1..=3 {
            graph.try_add_contact(0, v);
            for w in 0..10 {
                graph.try_add_contact(v, 100 * v + w);
            }
        }
        graph
    }

    #[test]
    fn friends_of_friends() {
        // 1 -> 2 -> {1, 3, 4}, 1 -> 4
        let graph = ArrayGraph::from_edges([Edge(1, 2), Edge(1, 4), Edge(2, 1), Edge(2, 3), Edge(2, 4)]);
        assert_eq!(graph.suggestions_of(1), vec![3]);
        assert!(graph.suggestions_of(3).is_empty());
        assert!(graph.suggestions_of(99).is_empty());
    }

    #[test]
    fn cap_keeps_first_discovered() {
        let graph: ArrayGraph = blocks();
        assert_eq!(graph.suggestions_of(0), (100..110).collect_vec());
        assert_eq!(graph.all_suggestions_of(0).len(), 30);

        let graph: BitmapGraph = blocks();
        assert_eq!(graph.suggestions_of(0), (100..110).collect_vec());
    }

    #[test]
    fn discovery_order_ignores_insertion_order() {
        // Contacts inserted in descending order are still visited in ascending order
        let mut graph = ArrayGraph::new();
        for v in (1..=3).rev() {
            graph.try_add_contact(0, v);
            for w in (0..10).rev() {
                graph.try_add_contact(v, 100 * v + w);
            }
        }

        let suggestions = Suggestions::new().limit(4).sorted(false).compute(&graph, 0);
        assert_eq!(suggestions, vec![100, 101, 102, 103]);
    }

    #[test]
    fn unsorted_keeps_discovery_order() {
        let graph = BitmapGraph::from_edges([Edge(0, 1), Edge(0, 2), Edge(1, 50), Edge(2, 7)]);
        assert_eq!(Suggestions::new().sorted(false).compute(&graph, 0), vec![50, 7]);
        assert_eq!(Suggestions::new().compute(&graph, 0), vec![7, 50]);
    }

    #[test]
    fn zero_limit() {
        let graph: ArrayGraph = blocks();
        assert!(Suggestions::new().limit(0).compute(&graph, 0).is_empty());
    }

    #[test]
    fn exclusion_set_types_agree() {
        let graph: SparseArrayGraph = blocks();
        let suggestions = Suggestions::new().limit(15);

        let expected = suggestions.compute(&graph, 0);
        assert_eq!(expected.len(), 15);
        assert_eq!(suggestions.compute_with::<_, FxHashSet<Node>>(&graph, 0), expected);
        assert_eq!(suggestions.compute_with::<_, RoaringTreemap>(&graph, 0), expected);
    }
}
