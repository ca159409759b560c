//! Error types for quantagrid-topology.

use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a mesh layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested node count lies outside the supported range.
    #[error("node count {requested} out of range [{min}, {max}]")]
    NodeCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
}
