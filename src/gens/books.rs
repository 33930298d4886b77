use rand_distr::{Distribution, StandardNormal};

use super::*;

/// Random population where every subscriber owns a contact book whose size is drawn from
/// `Normal(mean, std_dev)` (rounded, clamped at zero). Contacts are chosen uniformly among all
/// subscribers.
///
/// Subscriber `i` has phone number `offset + i`, so populations can be shifted into realistic
/// number ranges without changing their structure.
///
/// # Example
/// ```
/// use contactgraph::{gens::*, prelude::*};
///
/// let generator = RandomContactBooks::new()
///     .nodes(1_000)
///     .offset(33_600_000_000)
///     .contact_count(20.0, 5.0)
///     .unwrap();
///
/// let graph = BitmapGraph::from_edges(generator.generate(&mut rand::rng()));
/// assert!(graph.number_of_edges() > 10_000);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomContactBooks {
    n: u64,
    offset: Node,
    mean: f64,
    std_dev: f64,
}

impl Default for RandomContactBooks {
    fn default() -> Self {
        Self {
            n: 0,
            offset: 0,
            mean: AVERAGE_CONTACT_COUNT as f64,
            std_dev: CONTACT_COUNT_STD as f64,
        }
    }
}

impl RandomContactBooks {
    /// Creates a generator with contact books of size `Normal(50, 10)`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phone number of the first subscriber
    pub fn offset(mut self, offset: Node) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the distribution of contact-book sizes.
    ///
    /// # Errors
    /// Fails if `mean` is not finite or `std_dev` is negative or not finite.
    pub fn contact_count(mut self, mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidDistribution(format!(
                "mean must be finite, got {mean}"
            )));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::InvalidDistribution(format!(
                "standard deviation must be finite and non-negative, got {std_dev}"
            )));
        }

        self.mean = mean;
        self.std_dev = std_dev;
        Ok(self)
    }

    fn sample_book_size<R: Rng>(&self, rng: &mut R) -> u64 {
        let z: f64 = StandardNormal.sample(rng);
        (self.mean + self.std_dev * z).round().max(0.0) as u64
    }
}

impl NumNodesGen for RandomContactBooks {
    fn nodes(mut self, n: u64) -> Self {
        self.n = n;
        self
    }
}

impl ContactBookGenerator for RandomContactBooks {
    fn subscribers(&self) -> u64 {
        self.n
    }

    fn contact_book<R>(&self, i: u64, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one subscriber must be generated!");

        let source = self.offset.wrapping_add(i);
        let size = self.sample_book_size(rng);
        let (offset, n) = (self.offset, self.n);

        (0..size).map(move |_| Edge(source, offset.wrapping_add(rng.random_range(0..n))))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn books_stay_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let generator = RandomContactBooks::new().nodes(500).offset(1_000_000);

        let edges = generator.generate(rng);
        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| {
            (1_000_000..1_000_500).contains(&e.source())
                && (1_000_000..1_000_500).contains(&e.target())
        }));

        // 500 books of roughly 50 contacts each
        let avg = edges.len() as f64 / 500.0;
        assert!((40.0..60.0).contains(&avg), "average book size {avg}");
    }

    #[test]
    fn fixed_book_size() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let generator = RandomContactBooks::new()
            .nodes(10)
            .contact_count(7.0, 0.0)
            .unwrap();

        for i in 0..10 {
            let book: Vec<Edge> = generator.contact_book(i, rng).collect();
            assert_eq!(book.len(), 7);
            assert!(book.iter().all(|e| e.source() == i));
        }
    }

    #[test]
    fn invalid_distribution() {
        assert!(matches!(
            RandomContactBooks::new().contact_count(f64::NAN, 1.0),
            Err(Error::InvalidDistribution(_))
        ));
        assert!(matches!(
            RandomContactBooks::new().contact_count(5.0, -1.0),
            Err(Error::InvalidDistribution(_))
        ));
    }
}
