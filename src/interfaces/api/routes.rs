use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::common::di::AppState;
use crate::interfaces::api::handlers::account_handler::AccountHandler;
use crate::interfaces::api::handlers::activity_handler::ActivityHandler;
use crate::interfaces::api::handlers::comment_handler::CommentHandler;
use crate::interfaces::api::handlers::drive_handler::DriveHandler;
use crate::interfaces::api::handlers::file_handler::FileHandler;
use crate::interfaces::api::handlers::folder_handler::FolderHandler;
use crate::interfaces::api::handlers::item_handler::ItemHandler;
use crate::interfaces::api::handlers::share_handler::ShareHandler;
use crate::interfaces::api::handlers::storage_handler::StorageHandler;
use crate::interfaces::api::handlers::trash_handler::TrashHandler;

/// Creates API routes for the application
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        // Accounts (in-memory directory stand-in)
        .route("/api/accounts", post(AccountHandler::register))
        .route("/api/accounts/{id}", get(AccountHandler::get))
        // Derived views
        .route("/api/drive/items", get(DriveHandler::list))
        // Hierarchy
        .route("/api/folders", post(FolderHandler::create))
        .route("/api/folders/root/children", get(FolderHandler::list_root))
        .route("/api/folders/{id}/children", get(FolderHandler::list_children))
        .route("/api/files/upload", post(FileHandler::upload))
        .route("/api/files/{id}/download", get(FileHandler::download))
        // Item operations
        .route(
            "/api/items/{id}",
            patch(ItemHandler::update).delete(ItemHandler::delete),
        )
        .route("/api/items/{id}/star", post(ItemHandler::toggle_star))
        .route("/api/items/{id}/restore", post(ItemHandler::restore))
        .route("/api/items/{id}/path", get(ItemHandler::path))
        .route("/api/trash/empty", post(TrashHandler::empty))
        // Sharing
        .route("/api/shares", post(ShareHandler::create))
        .route("/api/shares/received", get(ShareHandler::list_received))
        .route("/api/shares/{item_id}", get(ShareHandler::list_grantees))
        .route(
            "/api/shares/{item_id}/{grantee_id}",
            delete(ShareHandler::revoke),
        )
        // Comments
        .route("/api/comments", post(CommentHandler::add))
        .route("/api/comments/{file_id}", get(CommentHandler::list))
        // Storage and activity
        .route("/api/storage", get(StorageHandler::usage))
        .route("/api/activities", get(ActivityHandler::recent))
}
