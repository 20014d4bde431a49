//! Storage backend implementations.
//!
//! Concrete implementations of `clientq_core::storage::ClientRepository`,
//! selected at compile time via feature flags, plus the read-through lookup
//! that puts a cache in front of them.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): Process-local store, seeded with demo clients
//! - `sqlite`: SQLite store using `rusqlite` and `tokio-rusqlite`
//!
//! Only one storage backend can be enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite and Redis:
//! ```bash
//! cargo build -p clientq --no-default-features --features sqlite,redis
//! ```

#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p clientq --features sqlite"
);

pub mod cached;
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::ReadThroughLookup;
#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
