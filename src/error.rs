//! Error types for the lexsieve library.
//!
//! All fallible operations return [`LexsieveError`] through the [`Result`]
//! alias. Word-list loading never fails outright (it degrades to empty lists),
//! so most errors come from tokenization, configuration files, or I/O in the
//! command line front end.
//!
//! # Examples
//!
//! ```
//! use lexsieve::error::{LexsieveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexsieveError::invalid_config("batch_size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexsieve operations.
#[derive(Error, Debug)]
pub enum LexsieveError {
    /// I/O errors (reading documents, word lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors raised by a language pipeline while tokenizing
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A linguistic resource (stopword corpus, word list) is unavailable
    #[error("Resource error: {0}")]
    Resource(String),

    /// Operational settings that cannot be honored
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexsieveError.
pub type Result<T> = std::result::Result<T, LexsieveError>;

impl LexsieveError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexsieveError::Analysis(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        LexsieveError::Resource(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexsieveError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexsieveError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LexsieveError::Other(format!("Internal error: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexsieveError::analysis("bad input");
        assert_eq!(error.to_string(), "Analysis error: bad input");

        let error = LexsieveError::resource("stopwords/klingon");
        assert_eq!(error.to_string(), "Resource error: stopwords/klingon");

        let error = LexsieveError::invalid_config("batch_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: batch_size must be positive"
        );

        let error = LexsieveError::internal("pool");
        assert_eq!(error.to_string(), "Error: Internal error: pool");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexsieveError::from(io_error);

        match error {
            LexsieveError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
