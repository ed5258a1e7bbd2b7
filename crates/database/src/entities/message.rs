//! Message entity definitions

use serde::{Deserialize, Serialize};

/// A chat message joined with sender identity, as returned by the
/// message-history listing. Messages are immutable once created.
///
/// `message_type` is a passthrough string ("text", "image", "audio",
/// "video", "file", ...) rather than an enum: the wire contract echoes
/// back whatever the client stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub message_type: String,
    pub content: String,
    pub file_url: Option<String>,
    pub duration: Option<i64>,
    pub created_at: String,
    pub sender_name: String,
    pub sender_avatar: Option<String>,
}

/// Payload for appending a message to a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub message_type: String,
    pub file_url: Option<String>,
    pub duration: Option<i64>,
}

/// Identifier and timestamp of a freshly inserted message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReceipt {
    pub id: i64,
    pub created_at: String,
}
