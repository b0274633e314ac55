// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search functionality

use std::env;

/// Upper bound on results per search, regardless of configuration
pub const MAX_RESULTS_LIMIT: usize = 20;

/// Configuration for web search functionality
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of results to request per search
    pub max_results: usize,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            max_results: env::var("SEARCH_MAX_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 || self.max_results > MAX_RESULTS_LIMIT {
            return Err(format!(
                "SEARCH_MAX_RESULTS must be between 1 and {}",
                MAX_RESULTS_LIMIT
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("SEARCH_TIMEOUT_SECS must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            request_timeout_secs: 10,
        }
    }
}
