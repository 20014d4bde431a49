use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors that fail a lookup.
///
/// Cache-tier failures never appear here: they degrade to a miss on read and
/// to a skipped population on write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The durable store could not answer.
    #[error("Durable store failure: {0}")]
    Repository(#[from] RepositoryError),
    /// The execution context that owns the store session is gone.
    #[error("Execution context unavailable: {0}")]
    ContextUnavailable(String),
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
