//! Error types for the Apothecary search subsystem.
//!
//! All failures are represented by the [`ApothecaryError`] enum. The
//! variants mirror the feature's failure taxonomy: corpus loading is
//! fatal to the feature, an unfilled engine slot is transient, and query
//! execution failures are rendered inline while the session stays
//! usable. "No results" is deliberately *not* an error — it is a
//! terminal query outcome (see [`crate::search::QueryOutcome`]).
//!
//! # Examples
//!
//! ```
//! use apothecary::error::{ApothecaryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ApothecaryError::corpus("corpus file is not a JSON array"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Apothecary operations.
#[derive(Error, Debug)]
pub enum ApothecaryError {
    /// I/O errors (corpus file access, terminal I/O).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus loading or validation failed. Fatal to the search
    /// feature: no partial index is served.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A query arrived before the index was built. Transient; the next
    /// input retries implicitly.
    #[error("index not ready")]
    IndexNotReady,

    /// Query execution failed internally. Reported inline; the session
    /// remains usable for subsequent queries.
    #[error("Query error: {0}")]
    Query(String),

    /// Generic anyhow error.
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ApothecaryError.
pub type Result<T> = std::result::Result<T, ApothecaryError>;

impl ApothecaryError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        ApothecaryError::Corpus(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        ApothecaryError::Query(msg.into())
    }

    /// Whether this failure disables the feature for the session.
    ///
    /// Only corpus-level failures are fatal; everything else is reported
    /// and the session keeps accepting input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ApothecaryError::Corpus(_) | ApothecaryError::Io(_) | ApothecaryError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ApothecaryError::corpus("duplicate document id");
        assert_eq!(error.to_string(), "Corpus error: duplicate document id");

        let error = ApothecaryError::query("posting list corrupted");
        assert_eq!(error.to_string(), "Query error: posting list corrupted");

        assert_eq!(ApothecaryError::IndexNotReady.to_string(), "index not ready");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ApothecaryError::from(io_error);

        match error {
            ApothecaryError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_fatality() {
        assert!(ApothecaryError::corpus("bad").is_fatal());
        assert!(!ApothecaryError::IndexNotReady.is_fatal());
        assert!(!ApothecaryError::query("bad").is_fatal());
    }
}
