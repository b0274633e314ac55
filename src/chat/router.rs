// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat message routing
//!
//! Dispatches parsed messages to the search or AI provider and wraps
//! every outcome in a [`ReplyEnvelope`]. Provider failures are logged
//! with full detail server-side but surface to the user only as fixed
//! generic messages.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::ai::AiProvider;
use crate::search::SearchProvider;

use super::command::{parse_message, ChatCommand};
use super::envelope::ReplyEnvelope;
use super::formatter::format_search_results;

/// User-facing text for an empty or missing message
pub const EMPTY_MESSAGE_TEXT: &str = "Message cannot be empty.";

/// User-facing text for a search command without a query
pub const EMPTY_QUERY_TEXT: &str = "Please provide a search term.";

/// User-facing text for any search provider failure
pub const SEARCH_FAILED_TEXT: &str = "Search service failed";

/// User-facing text for any AI provider failure
pub const AI_FAILED_TEXT: &str = "AI service failed";

/// Routes chat messages to the configured providers
///
/// Holds no mutable state; concurrent `route` calls are independent.
pub struct MessageRouter {
    ai: Arc<dyn AiProvider>,
    search: Arc<dyn SearchProvider>,
    max_results: usize,
}

impl MessageRouter {
    /// Create a router over the given providers
    pub fn new(
        ai: Arc<dyn AiProvider>,
        search: Arc<dyn SearchProvider>,
        max_results: usize,
    ) -> Self {
        Self {
            ai,
            search,
            max_results,
        }
    }

    /// Route one chat message and produce a reply envelope
    ///
    /// The endpoint validates messages before calling this, but empty
    /// input is re-checked here so the router never forwards a blank
    /// prompt to a provider.
    pub async fn route(&self, message: &str) -> ReplyEnvelope {
        let message = message.trim();
        if message.is_empty() {
            return ReplyEnvelope::error(EMPTY_MESSAGE_TEXT);
        }

        match parse_message(message) {
            ChatCommand::Search(query) => self.handle_search(&query).await,
            ChatCommand::Prompt(prompt) => self.handle_prompt(&prompt).await,
        }
    }

    async fn handle_search(&self, query: &str) -> ReplyEnvelope {
        if query.is_empty() {
            return ReplyEnvelope::error(EMPTY_QUERY_TEXT);
        }

        debug!(
            "Dispatching search for '{}' (limit {})",
            query, self.max_results
        );
        let start = Instant::now();

        match self.search.search(query, self.max_results).await {
            Ok(results) => {
                info!(
                    "Search via {} returned {} results in {}ms",
                    self.search.name(),
                    results.len(),
                    start.elapsed().as_millis()
                );
                ReplyEnvelope::ok(format_search_results(&results))
            }
            Err(e) => {
                warn!("Search provider {} failed: {}", self.search.name(), e);
                ReplyEnvelope::error(SEARCH_FAILED_TEXT)
            }
        }
    }

    async fn handle_prompt(&self, prompt: &str) -> ReplyEnvelope {
        debug!(
            "Dispatching prompt ({} chars) to {}",
            prompt.chars().count(),
            self.ai.name()
        );
        let start = Instant::now();

        match self.ai.generate(prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("AI provider {} returned empty text", self.ai.name());
                ReplyEnvelope::error(AI_FAILED_TEXT)
            }
            Ok(text) => {
                info!(
                    "AI reply from {} ({} chars) in {}ms",
                    self.ai.name(),
                    text.chars().count(),
                    start.elapsed().as_millis()
                );
                ReplyEnvelope::ok(text)
            }
            Err(e) => {
                warn!("AI provider {} failed: {}", self.ai.name(), e);
                ReplyEnvelope::error(AI_FAILED_TEXT)
            }
        }
    }
}
