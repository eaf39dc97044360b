use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::dtos::item_dto::UpdateItemDto;
use crate::common::di::AppState;
use crate::common::errors::DomainError;
use crate::interfaces::api::handlers::{caller_id, error_response};

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// `true` purges immediately instead of moving to trash
    #[serde(default)]
    pub permanent: bool,
}

/// Handler for operations addressing one item: rename, move, star,
/// delete, restore and path resolution
pub struct ItemHandler;

impl ItemHandler {
    /// PATCH /api/items/{id} — rename and/or move. `parent_id: null`
    /// moves to root; an absent `parent_id` leaves the item in place.
    pub async fn update(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Json(dto): Json<UpdateItemDto>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        let mut updated = None;

        if let Some(name) = dto.name {
            match state.attribute_service.rename(caller, id, name).await {
                Ok(item) => updated = Some(item),
                Err(err) => return error_response(err),
            }
        }

        if let Some(new_parent) = dto.parent_id {
            match state
                .hierarchy_service
                .move_item(caller, id, new_parent)
                .await
            {
                Ok(item) => updated = Some(item),
                Err(err) => return error_response(err),
            }
        }

        match updated {
            Some(item) => (StatusCode::OK, Json(item)).into_response(),
            None => error_response(DomainError::validation_error(
                "Item",
                "Update body names no fields",
            )),
        }
    }

    /// POST /api/items/{id}/star — flips the star flag
    pub async fn toggle_star(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.attribute_service.toggle_star(caller, id).await {
            Ok(item) => (StatusCode::OK, Json(item)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// DELETE /api/items/{id} — trash by default, purge with ?permanent=true
    pub async fn delete(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Query(query): Query<DeleteQuery>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        if query.permanent {
            match state.lifecycle_service.purge(caller, id).await {
                Ok(()) => StatusCode::NO_CONTENT.into_response(),
                Err(err) => error_response(err),
            }
        } else {
            match state.lifecycle_service.trash(caller, id).await {
                Ok(item) => (StatusCode::OK, Json(item)).into_response(),
                Err(err) => error_response(err),
            }
        }
    }

    /// POST /api/items/{id}/restore
    pub async fn restore(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.lifecycle_service.restore(caller, id).await {
            Ok(item) => (StatusCode::OK, Json(item)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/items/{id}/path — breadcrumb, root first
    pub async fn path(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.hierarchy_service.resolve_path(caller, id).await {
            Ok(path) => (StatusCode::OK, Json(path)).into_response(),
            Err(err) => error_response(err),
        }
    }
}
