//! Courier Database Crate
//!
//! This crate provides database functionality for the Courier messaging
//! backend: connection management, migrations, entity definitions, and
//! repository implementations over the `users`, `chats`,
//! `chat_participants`, `messages`, and `calls` tables.

use courier_config::DatabaseConfig;
use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::{CallRepository, ConversationRepository, MessageRepository};

// Re-export entities
pub use entities::{
    call::{CallKind, CallReceipt, CallStatus, CallSummary, NewCall},
    chat::{Chat, ChatKind, ChatOverview, Counterpart, LatestMessage, UnreadCount},
    message::{ChatMessage, MessageReceipt, NewMessage},
    user::User,
};

// Re-export types
pub use types::{StoreError, StoreResult};

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> StoreResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_database_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let config = DatabaseConfig {
            url: format!("sqlite://{}", db_path.display()),
            max_connections: 1,
        };

        let pool = initialize_database(&config).await.unwrap();

        let result: (bool,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(result.0);
    }
}
