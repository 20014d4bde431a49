//! Cache contracts for the client cache tier.
//!
//! The cache is an optimization, never a source of truth: backends store
//! opaque bytes under string keys, and the functions here define how a
//! [`Client`](crate::client::Client) maps onto those keys and bytes.

mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{client_key, CLIENT_CACHE_NAME, CLIENT_KEY_PREFIX};
pub use serialization::{deserialize_client, serialize_client, SerializationError};
pub use traits::Cache;
