use sqlx::SqlitePool;

use courier_database::{ChatMessage, MessageReceipt, MessageRepository, NewMessage};

use super::error::ServiceError;

pub async fn list_messages(
    pool: &SqlitePool,
    chat_id: i64,
) -> Result<Vec<ChatMessage>, ServiceError> {
    let repo = MessageRepository::new(pool.clone());
    Ok(repo.find_by_chat_id(chat_id).await?)
}

pub async fn send_message(
    pool: &SqlitePool,
    message: &NewMessage,
) -> Result<MessageReceipt, ServiceError> {
    let repo = MessageRepository::new(pool.clone());
    Ok(repo.create(message).await?)
}
