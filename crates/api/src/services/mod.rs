pub mod call;
pub mod conversation;
pub mod error;
pub mod message;

pub use error::ServiceError;
