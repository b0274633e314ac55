// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Application configuration
//!
//! All settings come from environment variables (a `.env` file is
//! honored at startup). Every value has a default except the Gemini
//! API key, which must be present for the process to start.

use std::env;

use crate::ai::GeminiConfig;
use crate::search::SearchConfig;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Maximum accepted message length in characters
    pub max_message_chars: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            max_message_chars: env::var("MAX_MESSAGE_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("HOST must not be empty".to_string());
        }
        if self.max_message_chars == 0 {
            return Err("MAX_MESSAGE_CHARS must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_message_chars: 2000,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Gemini provider settings
    pub gemini: GeminiConfig,
    /// Web search settings
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            gemini: GeminiConfig::from_env(),
            search: SearchConfig::from_env(),
        }
    }

    /// Validate every section, failing on the first problem
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.gemini.validate()?;
        self.search.validate()
    }
}
