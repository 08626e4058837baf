pub mod auth;
pub mod booking;
pub mod error;
pub mod slot;

pub use error::ClientError;
