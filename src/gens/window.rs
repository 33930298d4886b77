use std::iter::once;

use super::*;

/// Deterministic population where subscriber `i` lists `i + j` (for `j < i`) and `i - j` for
/// every `j` in `0..window`.
///
/// Subtraction wraps around: small subscribers therefore also list identifiers close to
/// `u64::MAX`, which spreads the population over the whole identifier space.
/// Every subscriber lists itself (`j = 0`).
///
/// # Example
/// ```
/// use contactgraph::gens::*;
///
/// let edges = SlidingWindow::new().nodes(3).window(2).generate(&mut rand::rng());
/// assert_eq!(edges.len(), 9);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct SlidingWindow {
    n: u64,
    window: u64,
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self {
            n: 0,
            window: AVERAGE_CONTACT_COUNT as u64,
        }
    }
}

impl SlidingWindow {
    /// Creates a new generator with a window of [`AVERAGE_CONTACT_COUNT`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of neighbors in each direction
    pub fn window(mut self, window: u64) -> Self {
        self.window = window;
        self
    }

    /// Streams all edges without needing a source of randomness
    pub fn stream(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n).flat_map(move |i| self.book(i))
    }

    fn book(&self, i: u64) -> impl Iterator<Item = Edge> {
        (0..self.window).flat_map(move |j| {
            (i > j)
                .then(|| Edge(i, i.wrapping_add(j)))
                .into_iter()
                .chain(once(Edge(i, i.wrapping_sub(j))))
        })
    }
}

impl NumNodesGen for SlidingWindow {
    fn nodes(mut self, n: u64) -> Self {
        self.n = n;
        self
    }
}

impl ContactBookGenerator for SlidingWindow {
    fn subscribers(&self) -> u64 {
        self.n
    }

    fn contact_book<R>(&self, i: u64, _rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        self.book(i)
    }
}
