// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search provider
//!
//! Implements web search using DuckDuckGo's HTML interface.
//! No API key required.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::form_urlencoded;

use super::config::SearchConfig;
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// Maximum snippet length in characters; longer snippets are cut and
/// marked with a trailing ellipsis
const SNIPPET_MAX_CHARS: usize = 300;

/// DuckDuckGo search provider (no API key required)
pub struct DuckDuckGoProvider {
    client: Client,
    timeout_ms: u64,
}

impl DuckDuckGoProvider {
    /// Create a new DuckDuckGo provider
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        // Use a realistic browser User-Agent to avoid being blocked
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()?;

        Ok(Self {
            client,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .client
            .post(DDG_HTML_URL)
            .form(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SearchError::Api {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status == 429 {
            return Err(SearchError::RateLimited);
        }
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: "DuckDuckGo request failed".to_string(),
            });
        }

        let html = response.text().await.map_err(|e| SearchError::Api {
            status: 0,
            message: e.to_string(),
        })?;

        Ok(parse_ddg_html(&html, max_results))
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

/// Parse DuckDuckGo HTML response to extract search results
///
/// DuckDuckGo HTML results are in `<a class="result__a">` tags with
/// `<a class="result__snippet">` for descriptions. Blocks missing a
/// usable title or URL are skipped.
fn parse_ddg_html(html: &str, max_results: usize) -> Vec<SearchResult> {
    let mut results = Vec::new();

    for part in html.split("class=\"result__a\"").skip(1) {
        if results.len() >= max_results {
            break;
        }

        // Extract URL from href
        let url = if let Some(href_start) = part.find("href=\"") {
            let url_start = href_start + 6;
            if let Some(href_end) = part[url_start..].find('"') {
                let raw_url = &part[url_start..url_start + href_end];
                // DDG uses redirect URLs, extract the actual URL
                extract_result_url(raw_url)
            } else {
                continue;
            }
        } else {
            continue;
        };

        // Extract title (text between > and </a>)
        let title = if let Some(title_start) = part.find('>') {
            if let Some(title_end) = part[title_start + 1..].find("</a>") {
                html_decode(&part[title_start + 1..title_start + 1 + title_end])
            } else {
                String::new()
            }
        } else {
            String::new()
        };

        // Extract snippet
        let snippet = if let Some(snippet_pos) = part.find("class=\"result__snippet\"") {
            if let Some(snippet_start) = part[snippet_pos..].find('>') {
                let start = snippet_pos + snippet_start + 1;
                if let Some(snippet_end) = part[start..].find("</a>") {
                    html_decode(&part[start..start + snippet_end])
                } else {
                    String::new()
                }
            } else {
                String::new()
            }
        } else {
            String::new()
        };

        if !url.is_empty() && !title.is_empty() {
            results.push(SearchResult {
                title,
                url,
                snippet: truncate_snippet(&snippet),
            });
        }
    }

    results
}

/// Extract the actual URL from DuckDuckGo's redirect URL
///
/// DDG result links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2F...&rut=...`;
/// the real destination is percent-encoded in the `uddg` parameter.
fn extract_result_url(raw_url: &str) -> String {
    if let Some((_, query)) = raw_url.split_once('?') {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == "uddg" {
                return value.into_owned();
            }
        }
    }

    if raw_url.starts_with("http") {
        raw_url.to_string()
    } else {
        String::new()
    }
}

/// Cut overly long snippets at a character boundary
fn truncate_snippet(snippet: &str) -> String {
    if snippet.chars().count() <= SNIPPET_MAX_CHARS {
        return snippet.to_string();
    }
    let truncated: String = snippet.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{}...", truncated)
}

/// Simple HTML entity decoding
fn html_decode(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        // Remove any remaining HTML tags
        .split('<')
        .map(|part| {
            if let Some(pos) = part.find('>') {
                &part[pos + 1..]
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join("")
        .trim()
        .to_string()
}
