use thiserror::Error;

/// Failures of a hull computation.
///
/// Degenerate inputs (empty, single point, collinear) are valid and never
/// produce an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// A point of the input is unspecified or not a finite number.
    #[error("invalid input at index {index}: {reason}")]
    InvalidInput { index: usize, reason: &'static str },

    /// An internal consistency check failed; the comparator is wrong.
    #[error("algorithm invariant violated: {0}")]
    AlgorithmInvariantViolation(String),
}
