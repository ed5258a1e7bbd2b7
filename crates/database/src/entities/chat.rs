//! Chat entity definitions and the row types backing chat-list aggregation

use serde::{Deserialize, Serialize};

/// A messaging container: direct (two participants) or group (two or more).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub name: Option<String>,
    pub chat_type: ChatKind,
    pub created_at: String,
}

/// Chat kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Direct,
    Group,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::Direct => "direct",
            ChatKind::Group => "group",
        }
    }
}

impl From<&str> for ChatKind {
    fn from(s: &str) -> Self {
        match s {
            "direct" => ChatKind::Direct,
            _ => ChatKind::Group,
        }
    }
}

impl std::fmt::Display for ChatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate row for the chat list: one per chat the caller participates in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOverview {
    pub id: i64,
    pub name: Option<String>,
    pub chat_type: ChatKind,
}

/// Most recent message of a chat, at most one row per chat.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LatestMessage {
    pub chat_id: i64,
    pub content: String,
    pub created_at: String,
}

/// Count of messages not yet read by the caller, one row per chat with
/// at least one unread message.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UnreadCount {
    pub chat_id: i64,
    pub unread: i64,
}

/// A participant of a chat other than the caller, joined with identity.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Counterpart {
    pub chat_id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub status: String,
}
