// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod chat;
pub mod http_server;

pub use chat::{chat_handler, ChatApiRequest, ChatApiResponse, ReplyStatus, MESSAGE_TOO_LONG_TEXT};
pub use http_server::{
    create_app, start_server, AppState, HealthResponse, INTERNAL_ERROR_TEXT,
};
