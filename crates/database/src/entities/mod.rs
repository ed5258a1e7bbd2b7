//! Domain entities for the database layer

pub mod call;
pub mod chat;
pub mod message;
pub mod user;

// Re-export all entity types
pub use call::{CallKind, CallReceipt, CallStatus, CallSummary, NewCall};
pub use chat::{Chat, ChatKind, ChatOverview, Counterpart, LatestMessage, UnreadCount};
pub use message::{ChatMessage, MessageReceipt, NewMessage};
pub use user::User;
