// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Reply envelope returned by the chat pipeline

/// Outcome of routing one chat message
///
/// Both variants carry user-facing text; `Error` text is always one of
/// the fixed generic messages, never raw provider output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEnvelope {
    /// Successful reply with display text
    Ok {
        /// Text to show the user (may contain Markdown)
        text: String,
    },
    /// Failed reply with a generic user-facing message
    Error {
        /// Text to show the user
        message: String,
    },
}

impl ReplyEnvelope {
    /// Build a success envelope
    pub fn ok(text: impl Into<String>) -> Self {
        Self::Ok { text: text.into() }
    }

    /// Build an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this is a success envelope
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// The carried user-facing text, for either variant
    pub fn text(&self) -> &str {
        match self {
            Self::Ok { text } => text,
            Self::Error { message } => message,
        }
    }
}
