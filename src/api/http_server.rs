// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server setup
//!
//! Builds the axum router, owns the shared handler state and runs the
//! listener. A catch-panic layer sits outermost so a panicking handler
//! answers with a generic 500 envelope instead of tearing down the
//! process.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{Html, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::chat::{chat_handler, ChatApiResponse};
use crate::chat::MessageRouter;
use crate::config::ServerConfig;

/// User-facing text for an unexpected internal failure
pub const INTERNAL_ERROR_TEXT: &str = "Something went wrong. Please try again.";

/// Embedded chat UI page, served at `/`
const CHAT_PAGE: &str = include_str!("../../static/index.html");

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat pipeline entry point
    pub router: Arc<MessageRouter>,
    /// Maximum accepted message length in characters
    pub max_message_chars: usize,
}

impl AppState {
    /// Create handler state over a message router
    pub fn new(router: Arc<MessageRouter>, max_message_chars: usize) -> Self {
        Self {
            router,
            max_message_chars,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Chat UI
        .route("/", get(index_handler))
        // Health check
        .route("/health", get(health_handler))
        // Chat endpoint
        .route("/api/chat", post(chat_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        // Added last so it wraps every other layer and handler
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Bind the listener and serve until interrupted
pub async fn start_server(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = create_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Returning here would read as a shutdown request; without
        // signal support the server runs until the process is killed
        std::future::pending::<()>().await;
    }
}

/// Convert a handler panic into a 500 with the generic envelope
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Request handler panicked: {}", detail);

    let body = serde_json::to_string(&ChatApiResponse::error(INTERNAL_ERROR_TEXT))
        .unwrap_or_default();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}
