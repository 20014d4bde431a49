//! Cached lookup decorators.
//!
//! Wraps the durable client store with the read-through pattern:
//!
//! - **Hit**: the cached copy is trusted and returned as-is
//! - **Miss**: fetch from the store, schedule a cache write, return the record
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("clientq.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//! let context = ContextHandle::spawn("clientq")?;
//!
//! let lookup = ReadThroughLookup::new(repo, cache, context);
//! let client = lookup.lookup(&Document::parse("12345")?).await?;
//! ```

mod client;

pub use client::ReadThroughLookup;
