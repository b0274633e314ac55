// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat pipeline
//!
//! Everything between the HTTP endpoint and the providers:
//! - `parse_message` classifies a message as search command or prompt
//! - `MessageRouter` dispatches to the right provider
//! - `format_search_results` renders results as Markdown
//! - `ReplyEnvelope` carries the outcome back to the endpoint

pub mod command;
pub mod envelope;
pub mod formatter;
pub mod router;

// Re-export commonly used types
pub use command::{parse_message, ChatCommand};
pub use envelope::ReplyEnvelope;
pub use formatter::{format_search_results, NO_RESULTS_TEXT};
pub use router::{
    MessageRouter, AI_FAILED_TEXT, EMPTY_MESSAGE_TEXT, EMPTY_QUERY_TEXT, SEARCH_FAILED_TEXT,
};
