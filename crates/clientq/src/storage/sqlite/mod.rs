//! SQLite storage backend.
//!
//! Uses `rusqlite` for the synchronous driver and `tokio-rusqlite` to run it
//! off the async executor.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
