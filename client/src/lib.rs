pub mod api;
pub mod auth;
pub mod error;

pub use api::*;
pub use auth::*;
pub use error::*;
