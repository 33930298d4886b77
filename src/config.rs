/*!
# Graph Configuration

Capacity hints used when constructing a graph.
They only influence allocation behavior, never the semantics of any operation.
*/

/// Expected number of contacts in a single contact book
pub const AVERAGE_CONTACT_COUNT: u32 = 50;

/// Standard deviation of the contact-book size around [`AVERAGE_CONTACT_COUNT`]
pub const CONTACT_COUNT_STD: u32 = 10;

/// Initial capacity of every neighborhood: the average plus one standard deviation,
/// so that most contact books never reallocate
pub const DEFAULT_CONTACT_CAPACITY: usize = (AVERAGE_CONTACT_COUNT + CONTACT_COUNT_STD) as usize;

/// Capacity hints of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    node_capacity: usize,
    contact_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 0,
            contact_capacity: DEFAULT_CONTACT_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct subscribers to reserve space for
    pub fn node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Number of contacts every new neighborhood reserves space for.
    /// Representations without a notion of capacity ignore this.
    pub fn contact_capacity(mut self, capacity: usize) -> Self {
        self.contact_capacity = capacity;
        self
    }

    /// Returns the number of reserved subscriber slots
    pub fn nodes(&self) -> usize {
        self.node_capacity
    }

    /// Returns the initial neighborhood capacity
    pub fn contacts(&self) -> usize {
        self.contact_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = GraphConfig::new();
        assert_eq!(config.nodes(), 0);
        assert_eq!(config.contacts(), 60);

        let config = config.node_capacity(1000).contact_capacity(4);
        assert_eq!(config.nodes(), 1000);
        assert_eq!(config.contacts(), 4);
    }
}
