//! Error types for pixlab-core.
//!
//! Pixel transforms themselves never fail; the only recoverable failures
//! happen when a caller hands over data that violates a buffer invariant
//! or when a raw sample file cannot be read or written.
//!
//! # Usage
//!
//! ```rust
//! use pixlab_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or addressing pixlab data.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample count does not match the declared dimensions, or the
    /// dimensions overflow the addressable buffer size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Pixel coordinates are outside the buffer.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was accessed
        x: u32,
        /// Y coordinate that was accessed
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Reading or writing a raw sample file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this is a dimension-related error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }

    /// Returns `true` if this wraps an I/O failure.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(640, 480, "expected 1228800 samples, got 12");
        let msg = err.to_string();
        assert!(msg.contains("640x480"));
        assert!(msg.contains("got 12"));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(10, 3, 8, 8);
        let msg = err.to_string();
        assert!(msg.contains("(10, 3)"));
        assert!(msg.contains("8x8"));
        assert!(!err.is_dimension_error());
    }

    #[test]
    fn test_io_from() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io_error());
        assert!(err.to_string().contains("gone"));
    }
}
