// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API response types

use serde::{Deserialize, Serialize};

use crate::chat::ReplyEnvelope;

/// Reply status discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    /// Normal reply
    Ok,
    /// Chat-level error carried in the text field
    Error,
}

/// Response body for POST /api/chat
///
/// Used for every outcome: normal replies, chat-level errors (still
/// HTTP 200) and validation failures (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatApiResponse {
    /// Whether the reply succeeded
    pub status: ReplyStatus,
    /// User-facing reply text (Markdown for normal replies)
    pub text: String,
}

impl ChatApiResponse {
    /// Build a success response
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Ok,
            text: text.into(),
        }
    }

    /// Build an error response
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            text: text.into(),
        }
    }
}

impl From<ReplyEnvelope> for ChatApiResponse {
    fn from(envelope: ReplyEnvelope) -> Self {
        match envelope {
            ReplyEnvelope::Ok { text } => Self::ok(text),
            ReplyEnvelope::Error { message } => Self::error(message),
        }
    }
}
