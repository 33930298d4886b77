//! All representations must agree on every observable result.

use contactgraph::{algo::*, gens::*, prelude::*};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn random_edges<R: Rng>(rng: &mut R, ids: &[Node], m: usize) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(ids[rng.random_range(0..ids.len())], ids[rng.random_range(0..ids.len())]))
        .collect()
}

fn build_all(edges: &[Edge]) -> Vec<Box<dyn ContactGraph>> {
    Backend::ALL
        .iter()
        .map(|backend| {
            let mut graph = backend.build(GraphConfig::new());
            for &Edge(u, v) in edges {
                graph.add_contact(u, v);
            }
            graph
        })
        .collect()
}

fn sorted(contacts: Contacts<'_>) -> Vec<Node> {
    contacts.iter().copied().sorted().collect()
}

#[test]
fn backends_agree_on_random_graphs() {
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for n in [5usize, 40, 200] {
        // Sparse identifiers spread over the whole `u64` range
        let ids = (0..n).map(|_| rng.random::<u64>()).collect_vec();

        for m in [n, n * 4, n * 16] {
            let edges = random_edges(rng, &ids, m);
            let graphs = build_all(&edges);
            let (reference, others) = graphs.split_first().unwrap();

            for other in others {
                assert_eq!(other.node_count(), reference.node_count());
                assert_eq!(other.edge_count(), reference.edge_count());

                for &u in ids.iter().chain([&0, &u64::MAX]) {
                    assert_eq!(sorted(other.lookup(u)), sorted(reference.lookup(u)));
                    assert_eq!(sorted(other.rlookup(u)), sorted(reference.rlookup(u)));
                    assert_eq!(other.suggest(u), reference.suggest(u));
                }
            }
        }
    }
}

#[test]
fn insertion_order_does_not_change_suggestions() {
    let rng = &mut Pcg64Mcg::seed_from_u64(3);
    let ids = (1_000..1_060).collect_vec();
    let edges = random_edges(rng, &ids, 600);

    let forward = ArrayGraph::from_edges(edges.iter());
    let backward = ArrayGraph::from_edges(edges.iter().rev());
    let bitmap = BitmapGraph::from_edges(edges.iter());

    for &u in &ids {
        let expected = forward.suggestions_of(u);
        assert_eq!(backward.suggestions_of(u), expected);
        assert_eq!(bitmap.suggestions_of(u), expected);
    }
}

#[test]
fn sliding_window_population() {
    let generator = SlidingWindow::new().nodes(300).window(20);

    for backend in Backend::ALL {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut graph = backend.build(GraphConfig::new().node_capacity(300));
        let report = graph.populate(&generator, rng).unwrap();

        assert_eq!(report.nodes, graph.node_count());
        assert_eq!(report.edges, graph.edge_count());

        // 150 lists 131..=169, self included
        assert_eq!(sorted(graph.lookup(150)), (131..=169).collect_vec());
        assert_eq!(sorted(graph.rlookup(150)), (131..=169).collect_vec());

        // Contacts of contacts reach 112..=188; the ten smallest new ones are kept
        assert_eq!(graph.suggest(150), (112..=121).collect_vec());

        // Subtraction wraps for small subscribers
        assert!(graph.lookup(3).contains(&(u64::MAX - 15)));
        assert!(graph.rlookup(u64::MAX).contains(&0));
    }
}

#[test]
fn random_books_population() {
    let generator = RandomContactBooks::new()
        .nodes(500)
        .offset(33_600_000_000)
        .contact_count(20.0, 4.0)
        .unwrap();

    let reports = Backend::ALL.map(|backend| {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let mut graph = backend.build(GraphConfig::new());
        graph.populate(&generator, rng).unwrap()
    });

    assert!(reports.iter().all(|r| r.edges == reports[0].edges));
    assert!(reports.iter().all(|r| r.nodes == reports[0].nodes));
    assert!(reports[0].nodes <= 500);
    assert!(reports[0].edges > 5_000);
}

#[test]
fn small_population_is_rejected() {
    let mut graph = Backend::Array.build(GraphConfig::new());
    let err = graph
        .populate(&SlidingWindow::new().nodes(10), &mut Pcg64Mcg::seed_from_u64(3))
        .unwrap_err();

    assert_eq!(
        err,
        contactgraph::Error::PopulationTooSmall {
            required: MIN_POPULATION,
            actual: 10
        }
    );
    assert_eq!(err.to_string(), "population requires at least 100 subscribers, got 10");
    assert_eq!(graph.node_count(), 0);
}
