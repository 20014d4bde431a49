//! Redis cache backend.
//!
//! Shared cache for multi-instance deployments, using a connection manager
//! that reconnects on its own.

mod cache;
mod error;

pub use cache::RedisCache;
