//! Error types for anaume library.
//!
//! The formatting pipeline itself never fails. Errors only come from the
//! edges: decoding a JSON request body and reading input files.

use std::io;
use thiserror::Error;

/// Result type alias for anaume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for anaume library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or writing submissions.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// JSON was well-formed but not a submission or a list of submissions.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
