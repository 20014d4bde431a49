//! In-memory storage backend.
//!
//! Stores clients in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is lost
//! when the process exits, which makes it a fit for development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use clientq::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.create_client(&client).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
