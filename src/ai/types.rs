// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for AI text generation

use thiserror::Error;

/// Errors that can occur during AI text generation
#[derive(Debug, Error)]
pub enum AiError {
    /// Generation request timed out
    #[error("AI request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// API key rejected by the provider
    #[error("AI provider rejected credentials")]
    Auth,

    /// Rate limited by the AI provider
    #[error("Rate limited by AI provider")]
    RateLimited,

    /// API error from the AI provider
    #[error("AI API error: {status} - {message}")]
    Api {
        /// HTTP status code (0 if the request never completed)
        status: u16,
        /// Error message
        message: String,
    },

    /// Provider returned a well-formed response with no usable text
    #[error("AI provider returned no text")]
    EmptyResponse,
}
