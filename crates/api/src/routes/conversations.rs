use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{routes::models::ConversationSummary, services, util::require_id, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ConversationsQuery {
    pub user_id: Option<String>,
}

// List the caller's conversations with derived unread/preview state
pub async fn list_conversations(
    State(state): State<AppState>,
    Query(query): Query<ConversationsQuery>,
) -> Result<Json<Vec<ConversationSummary>>, ApiError> {
    let user_id = require_id(query.user_id.as_deref(), "user_id required")?;

    let summaries = services::conversation::list_conversations(state.db_pool(), user_id).await?;

    Ok(Json(summaries))
}
