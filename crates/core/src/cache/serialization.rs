//! Pure functions for serializing clients to and from cache bytes.
//!
//! Values are stored as JSON so cached entries stay human-readable when
//! inspected directly in the cache store.

use thiserror::Error;

use crate::client::Client;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a client to its cache representation.
pub fn serialize_client(client: &Client) -> Result<Vec<u8>> {
    serde_json::to_vec(client).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a client from its cache representation.
pub fn deserialize_client(bytes: &[u8]) -> Result<Client> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
