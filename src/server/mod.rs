pub mod lsp;

use crate::config::ServerConfig;
use crate::error::{ConfigLspError, Result};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared with every connection
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Build the HTTP router: `/lsp` upgrades to a WebSocket carrying LSP messages
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lsp", get(lsp::lsp_handler))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the WebSocket transport until the listener fails
pub async fn start_server(addr: SocketAddr, config: ServerConfig) -> Result<()> {
    let app = router(AppState { config });

    tracing::info!("Starting LSP WebSocket server on ws://{}/lsp", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ConfigLspError::ServerError(e.to_string()))?;

    Ok(())
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
