// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AI text generation module
//!
//! Provides the generation half of the chat pipeline:
//! - `AiProvider` trait for pluggable AI backends
//! - Gemini REST provider
//! - Provider configuration loaded from the environment

pub mod config;
pub mod gemini;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use config::GeminiConfig;
pub use gemini::GeminiProvider;
pub use provider::AiProvider;
pub use types::AiError;
