//! Functional core for the clientq service.
//!
//! Pure domain types, collaborator traits and error taxonomy. Nothing in this
//! crate performs I/O; backends and orchestration live in the `clientq` crate.

pub mod cache;
pub mod client;
pub mod lookup;
pub mod storage;
