//! Error types for Typeahead
//!
//! The search path itself cannot fail (it is a local computation after a
//! delay); the fallible surface is terminal I/O.

use thiserror::Error;

/// Main error type for Typeahead operations
#[derive(Error, Debug)]
pub enum TypeaheadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Typeahead operations
pub type Result<T> = std::result::Result<T, TypeaheadError>;
