// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use std::{env, sync::Arc};

use study_planner_backend::{
    ai::GeminiProvider,
    api::{start_server, AppState},
    chat::MessageRouter,
    config::AppConfig,
    search::DuckDuckGoProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env file supplies credentials in development
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    tracing::info!(
        "Starting study planner backend (model {}, up to {} search results)",
        config.gemini.model,
        config.search.max_results
    );

    let ai = Arc::new(GeminiProvider::new(&config.gemini)?);
    let search = Arc::new(DuckDuckGoProvider::new(&config.search)?);
    let router = MessageRouter::new(ai, search, config.search.max_results);

    let state = AppState::new(Arc::new(router), config.server.max_message_chars);
    start_server(state, &config.server).await
}
