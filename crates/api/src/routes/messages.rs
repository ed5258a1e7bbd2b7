use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use courier_database::{ChatMessage, MessageReceipt, NewMessage};

use crate::{routes::models::SendMessageRequest, services, util::require_id, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub chat_id: Option<String>,
}

// Get the messages of a chat, oldest first
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    // Validation happens before any storage access
    let chat_id = require_id(query.chat_id.as_deref(), "chat_id required")?;

    let messages = services::message::list_messages(state.db_pool(), chat_id).await?;

    Ok(Json(messages))
}

// Append a message to a chat
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageReceipt>), ApiError> {
    let (chat_id, sender_id, content) = match (req.chat_id, req.sender_id, req.content) {
        (Some(chat_id), Some(sender_id), Some(content)) if !content.is_empty() => {
            (chat_id, sender_id, content)
        }
        _ => {
            return Err(ApiError::bad_request(
                "chat_id, sender_id and content required",
            ))
        }
    };

    let message = NewMessage {
        chat_id,
        sender_id,
        content,
        message_type: req.message_type.unwrap_or_else(|| "text".to_string()),
        file_url: req.file_url,
        duration: req.duration,
    };

    let receipt = services::message::send_message(state.db_pool(), &message).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}
