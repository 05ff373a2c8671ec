//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while rendering the gauge.
#[derive(Debug, Error)]
pub enum GaugeError {
    /// The backing pixmap could not be allocated.
    #[error("pixmap allocation failed")]
    Allocation,

    /// A drawing path degenerated to nothing.
    #[error("invalid gauge geometry")]
    Geometry,

    /// PNG serialization failed.
    #[error("png encoding failed: {0}")]
    Encode(String),
}
