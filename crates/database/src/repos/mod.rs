//! Database repository implementations

pub mod call_repository;
pub mod conversation_repository;
pub mod message_repository;

// Re-export all repositories for convenience
pub use call_repository::*;
pub use conversation_repository::*;
pub use message_repository::*;
