//! Repository for chat-list aggregation reads.
//!
//! The chat list derives per-conversation presentation state (latest
//! message, unread count, counterpart identity) from normalized rows.
//! Instead of correlated per-chat subqueries, each derived facet is
//! fetched in one batched query over the caller's candidate chat set and
//! joined in memory by the service layer: three round trips total,
//! independent of how many chats the caller has.

use crate::entities::{ChatKind, ChatOverview, Counterpart, LatestMessage, UnreadCount};
use crate::types::StoreResult;
use sqlx::{Row, SqlitePool};

/// Repository for chat-list database operations
pub struct ConversationRepository {
    pool: SqlitePool,
}

impl ConversationRepository {
    /// Create a new conversation repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Distinct chats the given user participates in.
    pub async fn chats_for_user(&self, user_id: i64) -> StoreResult<Vec<ChatOverview>> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT c.id, c.name, c.chat_type
            FROM chats c
            JOIN chat_participants cp ON cp.chat_id = c.id
            WHERE cp.user_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut chats = Vec::with_capacity(rows.len());
        for row in rows {
            let chat_type: String = row.try_get("chat_type")?;
            chats.push(ChatOverview {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                chat_type: ChatKind::from(chat_type.as_str()),
            });
        }

        Ok(chats)
    }

    /// Most recent message per chat for the given chat set, at most one row
    /// per chat. Ties on `created_at` break by message id for determinism.
    pub async fn latest_messages(&self, chat_ids: &[i64]) -> StoreResult<Vec<LatestMessage>> {
        if chat_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT chat_id, content, created_at
            FROM (
                SELECT chat_id, content, created_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY chat_id
                           ORDER BY created_at DESC, id DESC
                       ) AS row_no
                FROM messages
                WHERE chat_id IN ({})
            )
            WHERE row_no = 1
            "#,
            id_placeholders(chat_ids.len())
        );

        let mut query_builder = sqlx::query_as::<_, LatestMessage>(&query);
        for chat_id in chat_ids {
            query_builder = query_builder.bind(chat_id);
        }

        Ok(query_builder.fetch_all(&self.pool).await?)
    }

    /// Unread message counts for every chat the given user participates in.
    ///
    /// A message is unread when it was sent by someone else and created
    /// strictly after the caller's `last_read_at` for that chat; a NULL
    /// `last_read_at` means every non-own message counts. Chats with no
    /// unread messages produce no row.
    pub async fn unread_counts(&self, user_id: i64) -> StoreResult<Vec<UnreadCount>> {
        let rows = sqlx::query_as::<_, UnreadCount>(
            r#"
            SELECT m.chat_id, COUNT(*) AS unread
            FROM messages m
            JOIN chat_participants cp
                ON cp.chat_id = m.chat_id AND cp.user_id = ?
            WHERE m.sender_id != ?
              AND (cp.last_read_at IS NULL OR m.created_at > cp.last_read_at)
            GROUP BY m.chat_id
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Participants other than the given user for the given chat set,
    /// joined with their identity rows.
    pub async fn counterparts(
        &self,
        user_id: i64,
        chat_ids: &[i64],
    ) -> StoreResult<Vec<Counterpart>> {
        if chat_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT cp.chat_id, u.id AS user_id, u.full_name, u.avatar_url, u.status
            FROM chat_participants cp
            JOIN users u ON u.id = cp.user_id
            WHERE cp.user_id != ? AND cp.chat_id IN ({})
            ORDER BY cp.chat_id, u.id
            "#,
            id_placeholders(chat_ids.len())
        );

        let mut query_builder = sqlx::query_as::<_, Counterpart>(&query).bind(user_id);
        for chat_id in chat_ids {
            query_builder = query_builder.bind(chat_id);
        }

        Ok(query_builder.fetch_all(&self.pool).await?)
    }
}

fn id_placeholders(len: usize) -> String {
    vec!["?"; len].join(", ")
}
