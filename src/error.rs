//! Error types for the tsheg library.
//!
//! All fallible operations in the crate return [`Result`], an alias over
//! [`TshegError`]. Recognition itself never fails on well-formed input:
//! an unrecognized syllable is an empty component record, not an error
//! (see [`crate::syllable::SyllableComponents`]).

use thiserror::Error;

/// The main error type for tsheg operations.
#[derive(Error, Debug)]
pub enum TshegError {
    /// The input cannot be interpreted as analyzable text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Analysis errors (segmentation, filtering, etc.)
    #[error("analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with [`TshegError`].
pub type Result<T> = std::result::Result<T, TshegError>;

impl TshegError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TshegError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TshegError::Analysis(msg.into())
    }
}
