//! Benchmarks for the four graph operations on every representation.
//!
//! Graphs are populated with the sliding-window pattern: subscriber `i` lists its 50
//! predecessors and successors.

use std::hint::black_box;

use contactgraph::{gens::*, prelude::*};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [u64; 4] = [50, 100, 500, 1000];

fn populated(backend: Backend, n: u64) -> Box<dyn ContactGraph> {
    let mut graph = backend.build(GraphConfig::new().node_capacity(n as usize));
    for Edge(u, v) in SlidingWindow::new().nodes(n).stream() {
        graph.add_contact(u, v);
    }
    graph
}

fn bench_add_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_contact");

    for backend in Backend::ALL {
        for n in SIZES {
            let edges: Vec<Edge> = SlidingWindow::new().nodes(n).stream().collect();
            group.throughput(Throughput::Elements(edges.len() as u64));

            group.bench_with_input(BenchmarkId::new(backend.to_string(), n), &edges, |b, edges| {
                b.iter(|| {
                    let mut graph = backend.build(GraphConfig::new().node_capacity(n as usize));
                    for &Edge(u, v) in edges {
                        graph.add_contact(u, v);
                    }
                    black_box(graph.edge_count())
                });
            });
        }
    }

    group.finish();
}

fn lookup(graph: &dyn ContactGraph, u: Node) -> usize {
    graph.lookup(u).len()
}

fn rlookup(graph: &dyn ContactGraph, u: Node) -> usize {
    graph.rlookup(u).len()
}

fn suggest(graph: &dyn ContactGraph, u: Node) -> usize {
    graph.suggest(u).len()
}

type Query = fn(&dyn ContactGraph, Node) -> usize;

fn bench_queries(c: &mut Criterion) {
    let queries: [(&str, Query); 3] = [("lookup", lookup), ("rlookup", rlookup), ("suggest", suggest)];

    for (name, query) in queries {
        let mut group = c.benchmark_group(name);

        for backend in Backend::ALL {
            for n in SIZES {
                let graph = populated(backend, n);
                group.throughput(Throughput::Elements(n));

                group.bench_with_input(BenchmarkId::new(backend.to_string(), n), &n, |b, &n| {
                    b.iter(|| (0..n).map(|u| query(graph.as_ref(), black_box(u))).sum::<usize>());
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_add_contact, bench_queries);
criterion_main!(benches);
