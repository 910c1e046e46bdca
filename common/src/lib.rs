pub mod requests;
pub mod webhooks;

pub use requests::*;
pub use webhooks::*;
