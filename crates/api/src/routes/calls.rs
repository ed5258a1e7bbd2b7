use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use courier_database::{CallKind, CallReceipt, CallSummary, NewCall};

use crate::{routes::models::CreateCallRequest, services, util::require_id, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct CallsQuery {
    pub user_id: Option<String>,
}

// Get the caller's call history
pub async fn list_calls(
    State(state): State<AppState>,
    Query(query): Query<CallsQuery>,
) -> Result<Json<Vec<CallSummary>>, ApiError> {
    let user_id = require_id(query.user_id.as_deref(), "user_id required")?;

    let calls = services::call::list_calls(state.db_pool(), user_id).await?;

    Ok(Json(calls))
}

// Open a new call record
pub async fn create_call(
    State(state): State<AppState>,
    Json(req): Json<CreateCallRequest>,
) -> Result<(StatusCode, Json<CallReceipt>), ApiError> {
    let (chat_id, initiator_id) = match (req.chat_id, req.initiator_id) {
        (Some(chat_id), Some(initiator_id)) => (chat_id, initiator_id),
        _ => return Err(ApiError::bad_request("chat_id and initiator_id required")),
    };

    let call = NewCall {
        chat_id,
        initiator_id,
        call_type: req
            .call_type
            .as_deref()
            .map(CallKind::from)
            .unwrap_or(CallKind::Video),
    };

    let receipt = services::call::create_call(state.db_pool(), &call).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}
