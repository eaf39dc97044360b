use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for the storage gauge
pub struct StorageHandler;

impl StorageHandler {
    /// GET /api/storage
    pub async fn usage(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.storage_service.usage(caller).await {
            Ok(usage) => (StatusCode::OK, Json(usage)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
