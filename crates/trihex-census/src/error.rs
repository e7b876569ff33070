//! Error types for the census.

use thiserror::Error;

/// Result type for census operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting a census.
#[derive(Debug, Error)]
pub enum Error {
    /// Signature arithmetic failed
    #[error("Signature error: {0}")]
    Signature(#[from] trihex_signature::Error),

    /// Configuration rejected
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Requested hexagon range not covered by the computed counts
    #[error("Hexagon count {requested} beyond computed bound {bound}")]
    OutOfRange {
        /// Hexagon count asked for
        requested: u64,
        /// Largest hexagon count available
        bound: u64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
