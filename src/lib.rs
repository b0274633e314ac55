// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod ai;
pub mod api;
pub mod chat;
pub mod config;
pub mod search;

// Re-export main types
pub use ai::{AiError, AiProvider, GeminiConfig, GeminiProvider};
pub use api::{
    chat_handler, create_app, start_server, AppState, ChatApiRequest, ChatApiResponse,
    HealthResponse, ReplyStatus,
};
pub use chat::{
    format_search_results, parse_message, ChatCommand, MessageRouter, ReplyEnvelope,
};
pub use config::{AppConfig, ServerConfig};
pub use search::{DuckDuckGoProvider, SearchConfig, SearchError, SearchProvider, SearchResult};
