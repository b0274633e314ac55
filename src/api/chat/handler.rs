// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, warn};

use super::request::ChatApiRequest;
use super::response::ChatApiResponse;
use crate::api::http_server::AppState;

/// POST /api/chat - Route one chat message
///
/// # Request
/// - `message`: Chat message string (required, length-limited)
///
/// # Response
/// - `status`: "ok" or "error"
/// - `text`: Reply text (Markdown) or a generic error message
///
/// # Errors
/// - 400 Bad Request: Missing, empty or over-long message
///
/// Provider failures still answer 200; the error rides inside the
/// envelope as a chat-level event.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatApiRequest>,
) -> Result<Json<ChatApiResponse>, (StatusCode, Json<ChatApiResponse>)> {
    debug!(
        "Chat request ({} chars)",
        request.message_text().chars().count()
    );

    // Validate request
    if let Err(e) = request.validate(state.max_message_chars) {
        warn!("Chat validation failed: {}", e);
        return Err((StatusCode::BAD_REQUEST, Json(ChatApiResponse::error(e))));
    }

    let envelope = state.router.route(request.message_text()).await;
    Ok(Json(envelope.into()))
}
