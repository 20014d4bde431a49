//! Cache backend implementations.
//!
//! Concrete implementations of `clientq_core::cache::Cache`, selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): Process-local LRU cache
//! - `redis`: Shared Redis cache
//!
//! Only one cache backend can be enabled at a time.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p clientq --features memory"
);

#[cfg(any(feature = "memory", test))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(any(feature = "memory", test))]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
