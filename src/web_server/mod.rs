//! HTTP server initialization and routing
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use log::{error, info};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chat::configure_chat_routes;
use crate::shared::state::AppState;
use crate::tasks::configure_task_routes;

pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "backend-api"
        })),
    )
}

/// The presentation layer is served from a different origin, so requests are
/// accepted from anywhere. No credentials cross this boundary.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(configure_task_routes())
        .merge(configure_chat_routes())
        .layer(cors_layer())
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(
                "Failed to bind to {}: {} - is another instance running?",
                addr, e
            );
            return Err(e);
        }
    };

    info!("Backend API listening on {}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}
