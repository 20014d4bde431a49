mod error;
mod types;

pub use error::DocumentError;
pub use types::{Client, Document};
