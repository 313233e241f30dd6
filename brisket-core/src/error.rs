//! Structured error types for the brisket crates.
//!
//! Encoding itself is total and never produces an error. These variants
//! cover the inbound paths: rebuilding a matrix from a caller-supplied
//! buffer and parsing data handed across a binding boundary.

use thiserror::Error;

/// Unified error type for all brisket operations.
#[derive(Debug, Error)]
pub enum BrisketError {
    /// Parse error (malformed JSON or textual input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (wrong buffer shape, values outside the one-hot domain)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the brisket crates.
pub type Result<T> = std::result::Result<T, BrisketError>;
