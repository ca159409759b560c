//! Error types for quantagrid-sim.

use thiserror::Error;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in simulation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Model label not in the catalogue
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Tick interval must be non-zero
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnknownModel("Gemma-4".into()).to_string(),
            "unknown model: Gemma-4"
        );
        assert_eq!(
            Error::ZeroTickInterval.to_string(),
            "tick interval must be greater than zero"
        );
    }
}
