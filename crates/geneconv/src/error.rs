//! Error types for gene identifier resolution
//!
//! All store-level failures propagate to the immediate caller as error
//! values; nothing is retried or recovered internally. An empty result set
//! is not an error.

use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, GeneConvError>;

/// Error type for resolver operations
#[derive(Error, Debug)]
pub enum GeneConvError {
    /// The reference store could not be opened
    #[error("Store error: {0}. Verify the reference database path exists and is readable.")]
    Store(String),

    /// Query execution or row decoding failed (rusqlite)
    #[error("Query error: {0}")]
    Query(#[from] rusqlite::Error),

    /// Species outside the supported set was requested
    #[error("Unknown species: '{0}'. Supported species are 'human' and 'mouse'.")]
    UnknownSpecies(String),
}

impl GeneConvError {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
