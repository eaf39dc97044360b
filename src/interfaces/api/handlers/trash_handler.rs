use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for the trash batch endpoint
pub struct TrashHandler;

impl TrashHandler {
    /// POST /api/trash/empty — purges everything in the caller's trash
    /// and reports per-item failures without aborting the batch
    pub async fn empty(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.lifecycle_service.empty_trash(caller).await {
            Ok(report) if report.is_clean() => (StatusCode::OK, Json(report)).into_response(),
            // 207: part of the batch failed, the rest went through
            Ok(report) => (StatusCode::MULTI_STATUS, Json(report)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
