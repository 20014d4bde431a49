use thiserror::Error;

/// Errors that can occur when parsing a client document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document must not be blank")]
    Blank,
}
