use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::dtos::item_dto::CreateFolderDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{caller_id, error_response};

#[derive(Debug, Default, Deserialize)]
pub struct ListChildrenQuery {
    #[serde(default)]
    pub include_trashed: bool,
}

/// Handler for folder endpoints
pub struct FolderHandler;

impl FolderHandler {
    /// POST /api/folders
    pub async fn create(
        State(state): State<AppState>,
        headers: HeaderMap,
        Json(dto): Json<CreateFolderDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.hierarchy_service.create_folder(caller, dto).await {
            Ok(folder) => (StatusCode::CREATED, Json(folder)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/folders/{id}/children
    pub async fn list_children(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Query(query): Query<ListChildrenQuery>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state
            .hierarchy_service
            .list_children(caller, Some(id), query.include_trashed)
            .await
        {
            Ok(children) => (StatusCode::OK, Json(children)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/folders/root/children
    pub async fn list_root(
        State(state): State<AppState>,
        headers: HeaderMap,
        Query(query): Query<ListChildrenQuery>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state
            .hierarchy_service
            .list_children(caller, None, query.include_trashed)
            .await
        {
            Ok(children) => (StatusCode::OK, Json(children)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
