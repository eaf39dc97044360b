use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dtos::view_dto::DriveQueryDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for the drive listing endpoint, one entry point for all five
/// derived views
pub struct DriveHandler;

impl DriveHandler {
    /// GET /api/drive/items?view=&folder_id=&search=
    pub async fn list(
        State(state): State<AppState>,
        headers: HeaderMap,
        Query(query): Query<DriveQueryDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.view_service.list(caller, query).await {
            Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
