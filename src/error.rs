//! Errors raised at the edges of the crate.
//!
//! The graph operations themselves are total: unknown identifiers yield empty results.
//! Only parsing and the population driver can fail.

use thiserror::Error;

/// Errors of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A backend name did not match any known representation
    #[error("unknown graph backend `{0}` (expected one of: array, sparse, bitmap)")]
    UnknownBackend(String),

    /// The population driver reports progress in percent steps and needs enough subscribers
    #[error("population requires at least {required} subscribers, got {actual}")]
    PopulationTooSmall { required: u64, actual: u64 },

    /// A generator was configured with parameters its distribution rejects
    #[error("invalid contact-count distribution: {0}")]
    InvalidDistribution(String),
}

/// Shorthand for `std::result::Result<T, contactgraph::Error>`
pub type Result<T> = std::result::Result<T, Error>;
