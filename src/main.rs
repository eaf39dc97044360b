use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cumulus - item hierarchy and lifecycle engine
///
/// A Drive-style backend: a folder tree of files and folders with
/// soft-delete (trash, restore, purge), starring, sharing at viewer /
/// commenter / editor levels, comment threads on files, and five derived
/// views (My Drive, Recent, Starred, Shared with me, Trash) projected
/// from one canonical item set.
///
/// The architecture follows the Clean/Hexagonal pattern:
///
/// - Domain Layer: entities and repository contracts (domain/*)
/// - Application Layer: use cases and DTOs (application/*)
/// - Infrastructure Layer: in-memory adapters (infrastructure/*)
/// - Interface Layer: the HTTP API (interfaces/*)
mod application;
mod common;
mod domain;
mod infrastructure;
mod interfaces;

use common::config::AppConfig;
use common::di::AppState;
use interfaces::api::routes::create_api_routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = AppConfig::from_env();
    let addr = config.server.bind_addr();

    // Wire repositories and services
    let state = AppState::assemble(config);

    let app = Router::new()
        .merge(create_api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
