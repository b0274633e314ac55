// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API request types

use serde::{Deserialize, Serialize};

use crate::chat::EMPTY_MESSAGE_TEXT;

/// User-facing text for an over-long message
pub const MESSAGE_TOO_LONG_TEXT: &str = "Message is too long.";

/// Request body for POST /api/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatApiRequest {
    /// The chat message (required, non-empty after trimming)
    ///
    /// Kept optional so a missing or null field validates as an empty
    /// message instead of failing deserialization.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatApiRequest {
    /// The trimmed message text; a missing or null field becomes ""
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("").trim()
    }

    /// Validate the request against the configured length limit
    ///
    /// The limit counts characters, not bytes, so multi-byte input is
    /// not penalized.
    pub fn validate(&self, max_chars: usize) -> Result<(), String> {
        let text = self.message_text();
        if text.is_empty() {
            return Err(EMPTY_MESSAGE_TEXT.to_string());
        }
        if text.chars().count() > max_chars {
            return Err(MESSAGE_TOO_LONG_TEXT.to_string());
        }
        Ok(())
    }
}
