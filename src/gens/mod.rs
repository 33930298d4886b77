/*!
# Population Generators

This module provides builder-style generators for synthetic contact books and a driver that
feeds them into any graph.

The typical usage workflow is:

1. Create a generator instance (e.g., `SlidingWindow::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).window(w)`).
3. Either collect the edges via `generate()` or let [`Populate::populate`] insert them with
   progress reporting.

Supported models:
- [`SlidingWindow`]: subscriber `i` knows its `window` predecessors and successors (the classic
  benchmark population, including its unsigned wrap-around for small `i`).
- [`RandomContactBooks`]: contact-book sizes follow a normal distribution, targets are uniform.
*/

use rand::Rng;

use crate::{Error, Result, prelude::*};

mod books;
mod populate;
mod window;

pub use books::*;
pub use populate::*;
pub use window::*;

/// Trait for generators that allow setting the number of subscribers.
pub trait NumNodesGen {
    /// Sets the number of subscribers owning a contact book.
    fn nodes(self, n: u64) -> Self;
}

/// General trait for generators producing one contact book per subscriber.
///
/// Subscribers are numbered `0..subscribers()`. How a subscriber number maps to a phone number
/// is up to the generator.
pub trait ContactBookGenerator {
    /// Returns the number of subscribers owning a contact book
    fn subscribers(&self) -> u64;

    /// Returns the edges of the contact book of the `i`-th subscriber
    fn contact_book<R>(&self, i: u64, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Collects the contact books of all subscribers into a list of edges
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let mut edges = Vec::new();
        for i in 0..self.subscribers() {
            edges.extend(self.contact_book(i, rng));
        }
        edges
    }
}
