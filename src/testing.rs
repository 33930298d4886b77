/// Every graph should implement `GraphNew`, `ContactList` and `ContactEditing`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::test_graph_ops, utils::*};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates `m` random edges between identifiers `offset..offset + n`
            fn random_edges<R: Rng>(rng: &mut R, offset: Node, n: Node, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = offset + rng.random_range(0..n);
                    let v = offset + rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in [0usize, 1, 50] {
                let graph = <$graph>::with_capacity(n);

                assert!(graph.is_empty());
                assert_eq!(graph.number_of_nodes(), 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.vertices().count(), 0);
            }

            let graph = <$graph>::with_config(GraphConfig::new().contact_capacity(0));
            assert!(graph.is_empty());
        }
    };
    ($graph:ident: Scenario) => {
        #[test]
        fn scenario() {
            let [x, y, z, p] = ['x', 'y', 'z', 'p'].map(|c| c as Node);

            let mut graph = <$graph>::new();
            for (u, v) in [(x, y), (x, z), (y, x), (y, z), (p, x)] {
                graph.add_contact(u, v);
            }

            let sorted = |contacts: Contacts<'_>| contacts.iter().copied().sorted().collect_vec();

            assert_eq!(sorted(graph.lookup(x)), vec![y, z]);
            assert_eq!(sorted(graph.lookup(y)), vec![x, z]);
            assert!(graph.lookup(z).is_empty());
            assert_eq!(sorted(graph.lookup(p)), vec![x]);

            assert_eq!(sorted(graph.rlookup(x)), vec![p, y]);
            assert_eq!(sorted(graph.rlookup(y)), vec![x]);
            assert_eq!(sorted(graph.rlookup(z)), vec![x, y]);
            assert!(graph.rlookup(p).is_empty());

            assert_eq!(graph.suggest(p), vec![y, z]);
            assert!(graph.suggest(x).is_empty());
            assert!(graph.suggest(y).is_empty());
            assert!(graph.suggest(z).is_empty());

            assert_eq!(graph.node_count(), 4);
            assert_eq!(graph.edge_count(), 5);
        }
    };
    ($graph:ident: Symmetry) => {
        #[test]
        fn symmetry() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as Node, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    let offset = rng.random_range(0..u64::MAX - n);
                    let edges = random_edges(rng, offset, n, m);
                    let graph = <$graph>::from_edges(edges.iter());

                    let distinct = edges.iter().copied().unique().collect_vec();
                    assert_eq!(graph.number_of_edges(), distinct.len() as NumEdges);

                    for &Edge(u, v) in &distinct {
                        assert!(graph.has_contact(u, v));
                        assert!(graph.lookup(u).contains(&v));
                        assert!(graph.rlookup(v).contains(&u));
                    }

                    // No contact appears twice and every reverse entry has a forward edge
                    for u in graph.vertices() {
                        let out = graph.contacts_of(u);
                        let inc = graph.in_contacts_of(u);
                        assert_eq!(out.iter().unique().count(), out.len());
                        assert_eq!(inc.iter().unique().count(), inc.len());
                        assert_eq!(graph.degree_of(u) as usize, out.len());
                        assert_eq!(graph.in_degree_of(u) as usize, inc.len());
                        assert!(inc.iter().all(|&w| graph.has_contact(w, u)));
                    }

                    let total: NumEdges = graph.vertices().map(|u| graph.in_degree_of(u) as NumEdges).sum();
                    assert_eq!(total, graph.number_of_edges());

                    assert_eq!(
                        graph.edges().sorted().collect_vec(),
                        distinct.into_iter().sorted().collect_vec()
                    );
                }
            }
        }
    };
    ($graph:ident: Absence) => {
        #[test]
        fn absence() {
            let mut graph = <$graph>::new();
            for id in [0, 1, u64::MAX] {
                assert!(graph.lookup(id).is_empty());
                assert!(graph.rlookup(id).is_empty());
                assert!(graph.suggest(id).is_empty());
                assert!(!graph.has_node(id));
            }

            graph.add_contact(1, 2);
            assert!(graph.lookup(3).is_empty());
            assert!(graph.rlookup(3).is_empty());
            assert!(graph.suggest(3).is_empty());

            // Queries never create nodes
            assert!(!graph.has_node(3));
            assert_eq!(graph.node_count(), 2);

            // Sinks exist but have no contacts
            assert!(graph.has_node(2));
            assert!(graph.lookup(2).is_empty());
            assert!(graph.rlookup(1).is_empty());
        }
    };
    ($graph:ident: Suggest) => {
        #[test]
        fn suggest() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as Node, 30, 100] {
                for m in [n * 2, n * 5] {
                    let edges = random_edges(rng, 1_000, n, m);
                    let graph = <$graph>::from_edges(edges);

                    for u in graph.vertices() {
                        let direct: ContactSet = graph.contacts_of(u).iter().copied().collect();
                        let all = graph.all_suggestions_of(u);
                        let top = graph.suggest(u);

                        assert!(top.len() <= DEFAULT_SUGGESTION_LIMIT);
                        assert_eq!(top.len(), all.len().min(DEFAULT_SUGGESTION_LIMIT));
                        assert!(top.iter().tuple_windows().all(|(a, b)| a < b));
                        assert!(all.iter().tuple_windows().all(|(a, b)| a < b));

                        for &w in &all {
                            assert_ne!(w, u);
                            assert!(!direct.contains(&w));
                            assert!(direct.iter().any(|&v| graph.has_contact(v, w)));
                        }
                        assert!(top.iter().all(|w| all.binary_search(w).is_ok()));
                    }
                }
            }
        }
    };
    ($graph:ident: Duplicates) => {
        #[test]
        fn duplicates() {
            let mut graph = <$graph>::new();

            assert!(!graph.try_add_contact(7, 9));
            for _ in 0..3 {
                assert!(graph.try_add_contact(7, 9));
                graph.add_contact(7, 9);
            }

            assert_eq!(graph.edge_count(), 1);
            assert_eq!(graph.degree_of(7), 1);
            assert_eq!(graph.in_degree_of(9), 1);
            assert_eq!(graph.lookup(7).to_vec(), vec![9]);
            assert_eq!(graph.rlookup(9).to_vec(), vec![7]);

            // The opposite direction is a different edge
            assert!(!graph.try_add_contact(9, 7));
            assert_eq!(graph.edge_count(), 2);
            assert_eq!(graph.node_count(), 2);
        }
    };
    ($graph:ident: SelfContact) => {
        #[test]
        fn self_contact() {
            let mut graph = <$graph>::new();
            graph.add_contact(5, 5);
            graph.add_contact(5, 6);
            graph.add_contact(6, 5);

            assert_eq!(graph.node_count(), 2);
            assert_eq!(graph.edge_count(), 3);
            assert!(graph.has_contact(5, 5));
            assert_eq!(graph.rlookup(5).iter().copied().sorted().collect_vec(), vec![5, 6]);

            // Self and direct contacts are never suggested
            assert!(graph.suggest(5).is_empty());
            assert!(graph.suggest(6).is_empty());
        }
    };
}

pub(crate) use test_graph_ops;
