use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dtos::activity_dto::ActivityQueryDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for the activity feed
pub struct ActivityHandler;

impl ActivityHandler {
    /// GET /api/activities?limit=&offset= — the caller's actions, newest
    /// first
    pub async fn recent(
        State(state): State<AppState>,
        headers: HeaderMap,
        Query(query): Query<ActivityQueryDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state
            .activity_service
            .recent(caller, query.limit, query.offset)
            .await
        {
            Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
