//! Metrics error types.

use thiserror::Error;

/// Errors that can occur during metrics calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A precondition on the input was violated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
