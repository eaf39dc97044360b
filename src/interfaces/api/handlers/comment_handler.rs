use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dtos::comment_dto::CreateCommentDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for comment threads on files
pub struct CommentHandler;

impl CommentHandler {
    /// POST /api/comments
    pub async fn add(
        State(state): State<AppState>,
        headers: HeaderMap,
        Json(dto): Json<CreateCommentDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.comment_service.add_comment(caller, dto).await {
            Ok(comment) => (StatusCode::CREATED, Json(comment)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/comments/{file_id} — the thread, oldest first
    pub async fn list(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(file_id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.comment_service.list_comments(caller, file_id).await {
            Ok(thread) => (StatusCode::OK, Json(thread)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
