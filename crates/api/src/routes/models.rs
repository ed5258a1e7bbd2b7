use serde::{Deserialize, Serialize};

use courier_database::ChatKind;

/// One entry of the chat list, with the presentation state derived from
/// normalized rows: latest-message preview, unread count, counterpart
/// identity for direct chats, and the resolved display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub id: i64,
    pub name: Option<String>,
    pub chat_type: ChatKind,
    pub last_message: Option<String>,
    pub last_message_time: Option<String>,
    pub unread_count: i64,
    pub other_user_name: Option<String>,
    pub other_user_avatar: Option<String>,
    pub other_user_status: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub chat_id: Option<i64>,
    pub sender_id: Option<i64>,
    pub content: Option<String>,
    pub message_type: Option<String>,
    pub file_url: Option<String>,
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCallRequest {
    pub chat_id: Option<i64>,
    pub initiator_id: Option<i64>,
    pub call_type: Option<String>,
}
