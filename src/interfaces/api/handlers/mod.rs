use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::common::errors::{DomainError, ErrorKind};

pub mod account_handler;
pub mod activity_handler;
pub mod comment_handler;
pub mod drive_handler;
pub mod file_handler;
pub mod folder_handler;
pub mod item_handler;
pub mod share_handler;
pub mod storage_handler;
pub mod trash_handler;

/// Resolves the calling account from the `x-account-id` header. The
/// engine trusts the gateway in front of it to have authenticated the
/// account; a missing or malformed header is rejected outright.
pub fn caller_id(headers: &HeaderMap) -> Result<Uuid, Response> {
    headers
        .get("x-account-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "error": "Missing or invalid x-account-id header"
                })),
            )
                .into_response()
        })
}

/// Maps a domain error onto an HTTP response with a JSON body
pub fn error_response(err: DomainError) -> Response {
    let status = match err.kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UnknownGrantee => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::InvalidParent => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::UnsupportedTarget => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::CycleDetected => StatusCode::CONFLICT,
        ErrorKind::NotTrashed => StatusCode::CONFLICT,
        ErrorKind::BrokenChain => StatusCode::CONFLICT,
        ErrorKind::AccessDenied => StatusCode::FORBIDDEN,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(serde_json::json!({
            "error": err.to_string()
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_extraction_requires_a_well_formed_uuid() {
        let mut headers = HeaderMap::new();
        assert!(caller_id(&headers).is_err());

        headers.insert("x-account-id", "not-a-uuid".parse().unwrap());
        assert!(caller_id(&headers).is_err());

        let id = Uuid::new_v4();
        headers.insert("x-account-id", id.to_string().parse().unwrap());
        assert_eq!(caller_id(&headers).unwrap(), id);
    }

    #[test]
    fn access_denied_maps_to_forbidden() {
        let response = error_response(DomainError::access_denied("Item", "nope"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
