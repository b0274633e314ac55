// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat message parsing
//!
//! Splits incoming messages into search commands and free-form prompts.
//! A message is a search command when it starts (case-insensitively)
//! with `search:` or `/search`; everything else goes to the AI model.

/// Recognized search command prefixes, matched case-insensitively
const SEARCH_PREFIXES: [&str; 2] = ["search:", "/search"];

/// A parsed chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Web search with the extracted query (may be empty)
    Search(String),
    /// Free-form prompt for the AI model
    Prompt(String),
}

/// Parse a chat message into a command
///
/// The message is trimmed first, so prefix matching ignores leading
/// whitespace. For search commands the query is what remains after the
/// prefix, minus any leading colon or whitespace. The query may come
/// out empty (`"search:"` alone); callers decide how to answer that.
pub fn parse_message(message: &str) -> ChatCommand {
    let trimmed = message.trim();

    for prefix in SEARCH_PREFIXES {
        if let Some(remainder) = strip_prefix_ignore_case(trimmed, prefix) {
            let query = remainder
                .trim_start_matches(|c: char| c.is_whitespace() || c == ':')
                .trim();
            return ChatCommand::Search(query.to_string());
        }
    }

    ChatCommand::Prompt(trimmed.to_string())
}

/// Strip an ASCII prefix, ignoring case
///
/// Returns `None` when the prefix does not match or would split a
/// multi-byte character.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
