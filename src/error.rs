//! Error types for lucidshark-factors

use thiserror::Error;

/// Result type alias for factor operations
pub type Result<T> = std::result::Result<T, FactorsError>;

/// Error types for factor operations
#[derive(Error, Debug)]
pub enum FactorsError {
    /// User input could not be parsed into a list of integers
    #[error("Unable to parse the list of numbers: {0}")]
    ParseError(String),

    /// Cache file could not be written
    #[error("Cache error: {0}")]
    CacheError(String),

    /// I/O error on the interactive surface
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
