pub mod clients;
pub mod error;
pub mod health;

pub use error::AppError;
