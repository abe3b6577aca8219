//! Error types for the dm-test library.

use thiserror::Error;

/// Result type alias for Diebold-Mariano operations.
pub type Result<T> = std::result::Result<T, DmTestError>;

/// Errors that can occur while running a forecast accuracy comparison.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DmTestError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// A forecast series does not match the length of the actual series.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Horizon must satisfy 1 <= h < n.
    #[error("invalid horizon {horizon} for {n} observations (need 1 <= h < n)")]
    InvalidHorizon { horizon: usize, n: usize },

    /// Unrecognized loss function selector.
    #[error("invalid loss function: {0}")]
    InvalidLossKind(String),

    /// Power loss exponent must be positive and finite.
    #[error("invalid power exponent: {0} (must be positive and finite)")]
    InvalidPower(f64),

    /// NaN or infinite value in one of the input series.
    #[error("non-finite value in {series} at index {index}")]
    NonFiniteValue { series: &'static str, index: usize },

    /// Percentage loss is undefined for a zero actual value.
    #[error("actual value is zero at index {index}; percentage loss is undefined")]
    ZeroActual { index: usize },

    /// Long-run variance estimate is not positive.
    #[error("degenerate variance estimate: {0}")]
    DegenerateVariance(f64),

    /// Reference distribution could not be constructed or evaluated.
    #[error("distribution error: {0}")]
    Distribution(String),
}
