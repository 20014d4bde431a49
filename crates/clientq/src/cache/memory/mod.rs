//! In-memory cache backend.
//!
//! Bounded LRU cache with optional per-entry TTL for single-instance
//! deployments.

mod cache;

pub use cache::MemoryCache;
