pub mod models;
pub mod services;
pub mod session;

pub use models::*;
pub use services::*;
pub use session::*;
