// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AI provider trait definition

use async_trait::async_trait;

use super::types::AiError;

/// Trait for implementing AI text generation providers
///
/// The chat pipeline only depends on this trait, so the live provider
/// can be swapped for a deterministic one in tests.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a reply for a single free-form prompt
    ///
    /// Returns the generated text or an error.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;
}
