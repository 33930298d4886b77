use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::*;

/// Progress is reported in percent steps, so smaller populations are rejected
pub const MIN_POPULATION: u64 = 100;

/// Summary of a [`Populate::populate`] run
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PopulationReport {
    /// Number of subscribers whose contact books were inserted
    pub subscribers: u64,
    /// Number of distinct nodes in the graph afterwards
    pub nodes: NumNodes,
    /// Number of distinct edges in the graph afterwards
    pub edges: NumEdges,
    /// Estimated heap bytes held by the graph afterwards
    pub heap_size: usize,
    /// Wall-clock time spent inserting
    pub elapsed: Duration,
}

/// Inserts generated contact books into a graph while reporting progress via `tracing`.
///
/// Implemented for every [`ContactGraph`], including trait objects.
pub trait Populate {
    /// Adds the contact book of every subscriber of `generator`.
    ///
    /// Logs each percent of progress at `debug` level and a summary at `info` level.
    ///
    /// # Errors
    /// Fails with [`Error::PopulationTooSmall`] if the generator has fewer than
    /// [`MIN_POPULATION`] subscribers. The graph is left untouched in that case.
    fn populate<Gen, R>(&mut self, generator: &Gen, rng: &mut R) -> Result<PopulationReport>
    where
        Gen: ContactBookGenerator,
        R: Rng;
}

impl<G> Populate for G
where
    G: ContactGraph + ?Sized,
{
    fn populate<Gen, R>(&mut self, generator: &Gen, rng: &mut R) -> Result<PopulationReport>
    where
        Gen: ContactBookGenerator,
        R: Rng,
    {
        let subscribers = generator.subscribers();
        if subscribers < MIN_POPULATION {
            return Err(Error::PopulationTooSmall {
                required: MIN_POPULATION,
                actual: subscribers,
            });
        }

        let step = subscribers / 100;
        let start = Instant::now();

        for i in 0..subscribers {
            for Edge(u, v) in generator.contact_book(i, rng) {
                self.add_contact(u, v);
            }

            if i % step == 0 {
                debug!(
                    elapsed = ?start.elapsed(),
                    subscriber = i,
                    total = subscribers,
                    "populating graph"
                );
            }
        }

        let report = PopulationReport {
            subscribers,
            nodes: self.node_count(),
            edges: self.edge_count(),
            heap_size: self.heap_size(),
            elapsed: start.elapsed(),
        };

        info!(
            elapsed = ?report.elapsed,
            nodes = report.nodes,
            edges = report.edges,
            heap_size = report.heap_size,
            "done populating graph"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn rejects_small_populations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut graph = ArrayGraph::new();

        let result = graph.populate(&SlidingWindow::new().nodes(99), rng);
        assert_eq!(
            result,
            Err(Error::PopulationTooSmall {
                required: 100,
                actual: 99
            })
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn populates_every_backend_identically() {
        let generator = SlidingWindow::new().nodes(150).window(10);

        let reports = Backend::ALL.map(|backend| {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let mut graph = backend.build(GraphConfig::new().node_capacity(150));
            let report = graph.populate(&generator, rng).unwrap();

            assert_eq!(graph.lookup(75).len(), 19);
            assert_eq!(graph.rlookup(75).len(), 19);
            report
        });

        for report in &reports {
            assert_eq!(report.subscribers, 150);
            assert_eq!(report.nodes, reports[0].nodes);
            assert_eq!(report.edges, reports[0].edges);
            assert!(report.heap_size > 0);
        }
    }
}
