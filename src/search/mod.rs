// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search module
//!
//! Provides the search half of the chat pipeline:
//! - `SearchProvider` trait for pluggable search backends
//! - DuckDuckGo HTML scraping provider (no API key required)
//! - Search configuration loaded from the environment

pub mod config;
pub mod duckduckgo;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use duckduckgo::DuckDuckGoProvider;
pub use provider::SearchProvider;
pub use types::{SearchError, SearchResult};
