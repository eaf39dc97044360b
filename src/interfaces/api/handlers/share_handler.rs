use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dtos::share_dto::CreateShareDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for the share ledger
pub struct ShareHandler;

impl ShareHandler {
    /// POST /api/shares — grants or updates access for one grantee,
    /// addressed by email
    pub async fn create(
        State(state): State<AppState>,
        headers: HeaderMap,
        Json(dto): Json<CreateShareDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.share_service.share(caller, dto).await {
            Ok(share) => (StatusCode::CREATED, Json(share)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// DELETE /api/shares/{item_id}/{grantee_id}
    pub async fn revoke(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path((item_id, grantee_id)): Path<(Uuid, Uuid)>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.share_service.revoke(caller, item_id, grantee_id).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/shares/{item_id} — "people with access"
    pub async fn list_grantees(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(item_id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.share_service.list_grantees(caller, item_id).await {
            Ok(grantees) => (StatusCode::OK, Json(grantees)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/shares/received — live items shared with the caller,
    /// most recently modified first
    pub async fn list_received(
        State(state): State<AppState>,
        headers: HeaderMap,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.share_service.list_shared_with_me(caller).await {
            Ok(items) => (StatusCode::OK, Json(items)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
