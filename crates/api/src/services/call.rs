use sqlx::SqlitePool;

use courier_database::{CallReceipt, CallRepository, CallSummary, NewCall};

use super::error::ServiceError;

pub async fn list_calls(pool: &SqlitePool, user_id: i64) -> Result<Vec<CallSummary>, ServiceError> {
    let repo = CallRepository::new(pool.clone());
    Ok(repo.history_for_user(user_id).await?)
}

pub async fn create_call(pool: &SqlitePool, call: &NewCall) -> Result<CallReceipt, ServiceError> {
    let repo = CallRepository::new(pool.clone());
    Ok(repo.create(call).await?)
}
