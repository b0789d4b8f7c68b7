//! Error types for rasterization.

use thiserror::Error;

/// Result type for raster operations.
pub type RasterResult<T> = std::result::Result<T, RasterError>;

/// Errors that can occur when selecting or configuring a rasterizer.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A line algorithm was given a circle, or the circle algorithm a line.
    #[error("algorithm '{algorithm}' cannot rasterize a {shape}")]
    ShapeMismatch {
        /// Requested algorithm
        algorithm: String,
        /// Kind of shape it was handed
        shape: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
