use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::common::di::AppState;
use crate::common::errors::DomainError;
use crate::interfaces::api::handlers::{caller_id, error_response};

/// Handler for file upload and download
pub struct FileHandler;

impl FileHandler {
    /// POST /api/files/upload — multipart form with a `file` part and an
    /// optional `parent_id` part
    pub async fn upload(
        State(state): State<AppState>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        let mut file: Option<(String, Option<String>, Bytes)> = None;
        let mut parent_id: Option<Uuid> = None;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => {
                    return error_response(DomainError::validation_error(
                        "Upload",
                        format!("Malformed multipart body: {}", err),
                    ))
                }
            };

            match field.name() {
                Some("file") => {
                    let name = field.file_name().unwrap_or("unnamed").to_string();
                    let mime = field.content_type().map(|m| m.to_string());
                    match field.bytes().await {
                        Ok(content) => file = Some((name, mime, content)),
                        Err(err) => {
                            return error_response(DomainError::validation_error(
                                "Upload",
                                format!("Failed to read file part: {}", err),
                            ))
                        }
                    }
                }
                Some("parent_id") => {
                    let text = match field.text().await {
                        Ok(text) => text,
                        Err(err) => {
                            return error_response(DomainError::validation_error(
                                "Upload",
                                format!("Failed to read parent_id part: {}", err),
                            ))
                        }
                    };
                    match Uuid::parse_str(text.trim()) {
                        Ok(id) => parent_id = Some(id),
                        Err(_) => {
                            return error_response(DomainError::validation_error(
                                "Upload",
                                format!("Invalid parent_id: {}", text),
                            ))
                        }
                    }
                }
                _ => continue,
            }
        }

        let Some((name, mime, content)) = file else {
            return error_response(DomainError::validation_error(
                "Upload",
                "Missing file part in multipart body",
            ));
        };

        match state
            .hierarchy_service
            .upload_file(caller, name, parent_id, mime, content)
            .await
        {
            Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
            Err(err) => error_response(err),
        }
    }

    /// GET /api/files/{id}/download — streams the blob back and stamps
    /// the file's last-opened time
    pub async fn download(
        State(state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> impl IntoResponse {
        let caller = match caller_id(&headers) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match state.hierarchy_service.open_file(caller, id).await {
            Ok((item, content)) => {
                let mime = item
                    .mime_type
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let disposition = format!("attachment; filename=\"{}\"", item.name);
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, mime),
                        (header::CONTENT_DISPOSITION, disposition),
                    ],
                    content,
                )
                    .into_response()
            }
            Err(err) => error_response(err),
        }
    }
}
