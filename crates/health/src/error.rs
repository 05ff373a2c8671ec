//! Domain error types.

use thiserror::Error;

/// Errors that can occur when validating body measurements.
#[derive(Debug, Error, PartialEq)]
pub enum HealthError {
    /// Weight must be strictly positive.
    #[error("weight must be positive, got {0} kg")]
    NonPositiveWeight(f64),

    /// Height must be strictly positive.
    #[error("height must be positive, got {0} m")]
    NonPositiveHeight(f64),

    /// NaN or infinite input.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}
