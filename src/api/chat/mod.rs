// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint
//!
//! Provides the `/api/chat` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::chat_handler;
pub use request::{ChatApiRequest, MESSAGE_TOO_LONG_TEXT};
pub use response::{ChatApiResponse, ReplyStatus};
