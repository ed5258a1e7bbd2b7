//! Repository for message data access operations.

use crate::entities::{ChatMessage, MessageReceipt, NewMessage};
use crate::types::StoreResult;
use sqlx::SqlitePool;
use tracing::info;

/// Repository for message database operations
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    /// Create a new message repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Messages of a chat in chronological order (oldest first), joined
    /// with the sender's identity.
    pub async fn find_by_chat_id(&self, chat_id: i64) -> StoreResult<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT m.id, m.chat_id, m.sender_id, m.message_type, m.content,
                   m.file_url, m.duration, m.created_at,
                   u.full_name AS sender_name, u.avatar_url AS sender_avatar
            FROM messages m
            JOIN users u ON m.sender_id = u.id
            WHERE m.chat_id = ?
            ORDER BY m.created_at ASC, m.id ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Append a message. One atomic insert; the caller gets the new row's
    /// id and creation timestamp back.
    pub async fn create(&self, message: &NewMessage) -> StoreResult<MessageReceipt> {
        let now = chrono::Utc::now().to_rfc3339();

        let id = sqlx::query(
            r#"
            INSERT INTO messages (chat_id, sender_id, message_type, content, file_url, duration, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.chat_id)
        .bind(message.sender_id)
        .bind(&message.message_type)
        .bind(&message.content)
        .bind(&message.file_url)
        .bind(message.duration)
        .bind(&now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!(
            message_id = id,
            chat_id = message.chat_id,
            sender_id = message.sender_id,
            message_type = %message.message_type,
            "created new message"
        );

        Ok(MessageReceipt {
            id,
            created_at: now,
        })
    }
}
