//! Read-through lookup contract.
//!
//! A lookup resolves a [`Client`](crate::client::Client) by document,
//! preferring the cache tier and falling back to the durable store. The
//! orchestration itself lives in the shell; this module holds the contract,
//! its outcome types and its error taxonomy.

mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{LookupError, Result};
pub use http_mapping::lookup_error_to_status_code;
pub use traits::ClientLookup;
pub use types::{LookupOutcome, LookupSource};
