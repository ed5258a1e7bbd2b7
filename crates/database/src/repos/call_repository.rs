//! Repository for call data access operations.

use crate::entities::{CallKind, CallReceipt, CallStatus, CallSummary, NewCall};
use crate::types::StoreResult;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Fixed resource bound on the call-history listing.
const CALL_HISTORY_LIMIT: i64 = 50;

/// Repository for call database operations
pub struct CallRepository {
    pool: SqlitePool,
}

impl CallRepository {
    /// Create a new call repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Call history visible to the given user: calls in chats the user
    /// participates in, newest first, capped at the 50 most recent. The
    /// initiator is inner-joined; the chat is outer-joined because a call
    /// row may outlive its chat container's name.
    pub async fn history_for_user(&self, user_id: i64) -> StoreResult<Vec<CallSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.chat_id, c.call_type, c.status, c.started_at, c.ended_at, c.duration,
                   u.full_name AS initiator_name,
                   ch.name AS chat_name
            FROM calls c
            JOIN users u ON c.initiator_id = u.id
            LEFT JOIN chats ch ON c.chat_id = ch.id
            WHERE c.chat_id IN (
                SELECT chat_id FROM chat_participants WHERE user_id = ?
            )
            ORDER BY c.started_at DESC, c.id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(CALL_HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        let mut calls = Vec::with_capacity(rows.len());
        for row in rows {
            let call_type: String = row.try_get("call_type")?;
            let status: String = row.try_get("status")?;
            calls.push(CallSummary {
                id: row.try_get("id")?,
                chat_id: row.try_get("chat_id")?,
                call_type: CallKind::from(call_type.as_str()),
                status: CallStatus::from(status.as_str()),
                started_at: row.try_get("started_at")?,
                ended_at: row.try_get("ended_at")?,
                duration: row.try_get("duration")?,
                initiator_name: row.try_get("initiator_name")?,
                chat_name: row.try_get("chat_name")?,
            });
        }

        Ok(calls)
    }

    /// Open a call record in status `active`. One atomic insert; status
    /// transitions are owned by an external collaborator.
    pub async fn create(&self, call: &NewCall) -> StoreResult<CallReceipt> {
        let now = chrono::Utc::now().to_rfc3339();

        let id = sqlx::query(
            r#"
            INSERT INTO calls (chat_id, initiator_id, call_type, status, started_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(call.chat_id)
        .bind(call.initiator_id)
        .bind(call.call_type.to_string())
        .bind(CallStatus::Active.to_string())
        .bind(&now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!(
            call_id = id,
            chat_id = call.chat_id,
            initiator_id = call.initiator_id,
            call_type = %call.call_type,
            "opened new call"
        );

        Ok(CallReceipt {
            id,
            started_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool, full_name: &str) -> i64 {
        sqlx::query("INSERT INTO users (full_name, status, created_at) VALUES (?, 'online', ?)")
            .bind(full_name)
            .bind("2024-01-01T00:00:00+00:00")
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_chat(pool: &SqlitePool, name: Option<&str>, members: &[i64]) -> i64 {
        let chat_id = sqlx::query("INSERT INTO chats (name, chat_type, created_at) VALUES (?, 'group', ?)")
            .bind(name)
            .bind("2024-01-01T00:00:00+00:00")
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid();

        for user_id in members {
            sqlx::query(
                "INSERT INTO chat_participants (chat_id, user_id, joined_at) VALUES (?, ?, ?)",
            )
            .bind(chat_id)
            .bind(user_id)
            .bind("2024-01-01T00:00:00+00:00")
            .execute(pool)
            .await
            .unwrap();
        }

        chat_id
    }

    #[tokio::test]
    async fn create_opens_an_active_call() {
        let pool = create_test_pool().await;
        let repo = CallRepository::new(pool.clone());

        let alice = seed_user(&pool, "Alice").await;
        let chat = seed_chat(&pool, Some("Standup"), &[alice]).await;

        let receipt = repo
            .create(&NewCall {
                chat_id: chat,
                initiator_id: alice,
                call_type: CallKind::Video,
            })
            .await
            .unwrap();
        assert!(receipt.id > 0);

        let history = repo.history_for_user(alice).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, receipt.id);
        assert_eq!(history[0].status, CallStatus::Active);
        assert_eq!(history[0].call_type, CallKind::Video);
        assert_eq!(history[0].ended_at, None);
        assert_eq!(history[0].initiator_name, "Alice");
        assert_eq!(history[0].chat_name.as_deref(), Some("Standup"));
    }

    #[tokio::test]
    async fn history_excludes_chats_the_user_is_not_in() {
        let pool = create_test_pool().await;
        let repo = CallRepository::new(pool.clone());

        let alice = seed_user(&pool, "Alice").await;
        let bob = seed_user(&pool, "Bob").await;
        let foreign_chat = seed_chat(&pool, None, &[bob]).await;

        repo.create(&NewCall {
            chat_id: foreign_chat,
            initiator_id: bob,
            call_type: CallKind::Audio,
        })
        .await
        .unwrap();

        assert!(repo.history_for_user(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_capped_at_fifty_newest_first() {
        let pool = create_test_pool().await;
        let repo = CallRepository::new(pool.clone());

        let alice = seed_user(&pool, "Alice").await;
        let chat = seed_chat(&pool, None, &[alice]).await;

        for n in 0..55 {
            sqlx::query(
                "INSERT INTO calls (chat_id, initiator_id, call_type, status, started_at)
                 VALUES (?, ?, 'video', 'ended', ?)",
            )
            .bind(chat)
            .bind(alice)
            .bind(format!("2024-01-01T10:{:02}:00+00:00", n))
            .execute(&pool)
            .await
            .unwrap();
        }

        let history = repo.history_for_user(alice).await.unwrap();
        assert_eq!(history.len(), 50);
        assert_eq!(history[0].started_at, "2024-01-01T10:54:00+00:00");
        assert!(history[0].started_at > history[49].started_at);
    }
}
