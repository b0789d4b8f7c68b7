//! Error types for color parsing.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Hex string is not `#rrggbb` / `rrggbb`.
    #[error("invalid hex color '{0}' (expected #rrggbb)")]
    InvalidHex(String),

    /// Component list could not be parsed.
    #[error("invalid {model} components '{input}': {reason}")]
    InvalidComponents {
        /// Model being parsed
        model: &'static str,
        /// Raw input
        input: String,
        /// What went wrong
        reason: String,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
