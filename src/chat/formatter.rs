// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search result formatting
//!
//! Renders search results as a Markdown ordered list. Result fields
//! come from scraped HTML, so anything that could break the list
//! structure (brackets, backslashes, newlines, parens in URLs) is
//! escaped or encoded. Field order is preserved as returned by the
//! provider.

use crate::search::SearchResult;

/// Fixed reply for a search that returned nothing
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Render search results as a Markdown ordered list
///
/// Each entry has the shape `N. [title](url) — snippet`; the snippet
/// tail is omitted when the snippet is empty. An empty result list
/// renders as [`NO_RESULTS_TEXT`].
pub fn format_search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_TEXT.to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let title = escape_markdown_text(&result.title);
            let url = sanitize_url(&result.url);
            let snippet = escape_markdown_text(&result.snippet);

            if snippet.is_empty() {
                format!("{}. [{}]({})", i + 1, title, url)
            } else {
                format!("{}. [{}]({}) — {}", i + 1, title, url, snippet)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape characters that would break link or list syntax
///
/// Backslashes are escaped first so later escapes cannot be undone by
/// pre-existing ones. Newlines collapse to single spaces because a
/// line break would terminate the list entry.
fn escape_markdown_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            '\n' | '\r' => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Percent-encode the characters that would terminate a Markdown link
/// or break its entry across lines
///
/// Spaces and parentheses end the `(url)` span early; control
/// characters split the entry (a decoded redirect parameter can carry
/// a raw newline).
fn sanitize_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.trim().chars() {
        match c {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
            c => out.push(c),
        }
    }
    out
}
