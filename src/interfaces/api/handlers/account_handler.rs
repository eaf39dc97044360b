use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dtos::account_dto::{AccountDto, RegisterAccountDto};
use crate::application::ports::outbound::AccountResolver;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::error_response;

/// Handler for the in-memory account directory. Registration needs no
/// caller header; it is how an account comes to exist in the first place.
pub struct AccountHandler;

impl AccountHandler {
    /// POST /api/accounts
    pub async fn register(
        State(state): State<AppState>,
        Json(dto): Json<RegisterAccountDto>,
    ) -> impl IntoResponse {
        match state.directory.register(dto.email, dto.name).await {
            Ok(account) => (StatusCode::CREATED, Json(AccountDto::from(account))).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/accounts/{id}
    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<Uuid>,
    ) -> impl IntoResponse {
        match state.directory.get(id).await {
            Ok(Some(account)) => (StatusCode::OK, Json(AccountDto::from(account))).into_response(),
            Ok(None) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("Account not found: {}", id) })),
            )
                .into_response(),
            Err(err) => error_response(err),
        }
    }
}
