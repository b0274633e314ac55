// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Dispatch tests for the chat pipeline
//!
//! These tests drive parser, router and formatter together through the
//! public library API with deterministic providers. They verify that:
//! - Every accepted prefix form reaches the search provider with the
//!   same extracted query
//! - Markdown-hostile provider output survives formatting intact
//! - AI text passes through the pipeline byte for byte
//! - Provider errors always map onto the same fixed reply texts

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use study_planner_backend::{
    ai::{AiError, AiProvider},
    chat::{MessageRouter, ReplyEnvelope},
    search::{SearchError, SearchProvider, SearchResult},
};

struct StubAi {
    reply: &'static str,
    fail: bool,
    calls: AtomicUsize,
}

impl StubAi {
    fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: "",
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AiProvider for StubAi {
    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AiError::Auth);
        }
        Ok(self.reply.to_string())
    }

    fn name(&self) -> &'static str {
        "stub-ai"
    }
}

struct StubSearch {
    results: Vec<SearchResult>,
    fail: bool,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubSearch {
    fn returning(results: Vec<SearchResult>) -> Arc<Self> {
        Arc::new(Self {
            results,
            fail: false,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(vec![]),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: vec![],
            fail: true,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(vec![]),
        })
    }
}

#[async_trait]
impl SearchProvider for StubSearch {
    async fn search(
        &self,
        query: &str,
        _max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(SearchError::Timeout { timeout_ms: 10000 });
        }
        Ok(self.results.clone())
    }

    fn name(&self) -> &'static str {
        "stub-search"
    }
}

fn result(title: &str, url: &str, snippet: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        url: url.to_string(),
        snippet: snippet.to_string(),
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    /// Test 1: Every prefix form extracts the same query
    #[tokio::test]
    async fn test_prefix_variants_reach_search() {
        let ai = StubAi::replying("unused");
        let search = StubSearch::returning(vec![result("A", "http://x", "s")]);
        let router = MessageRouter::new(ai.clone(), search.clone(), 5);

        let variants = [
            "search: exam tips",
            "search:exam tips",
            "SEARCH: exam tips",
            "/search exam tips",
            "/SEARCH exam tips",
            "  search:   exam tips  ",
        ];

        for message in variants {
            let envelope = router.route(message).await;
            assert!(envelope.is_ok(), "variant {:?} should succeed", message);
        }

        assert_eq!(search.calls.load(Ordering::SeqCst), variants.len());
        assert_eq!(ai.calls.load(Ordering::SeqCst), 0);

        let queries = search.queries.lock().unwrap();
        assert!(queries.iter().all(|q| q == "exam tips"));
    }

    /// Test 2: Markdown-hostile search output is escaped end to end
    #[tokio::test]
    async fn test_hostile_results_render_safely() {
        let results = vec![
            result("Chapter [1] notes", "http://a", "covers sets [A] and [B]"),
            result(
                "Rust (lang)",
                "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                "line one\nline two",
            ),
        ];
        let ai = StubAi::replying("unused");
        let search = StubSearch::returning(results);
        let router = MessageRouter::new(ai, search, 5);

        let envelope = router.route("search: anything").await;

        let expected = "1. [Chapter \\[1\\] notes](http://a) — covers sets \\[A\\] and \\[B\\]\n\
                        2. [Rust (lang)](https://en.wikipedia.org/wiki/Rust_%28programming_language%29) — line one line two";
        assert_eq!(envelope, ReplyEnvelope::ok(expected));
    }

    /// Test 3: AI text passes through the pipeline unmodified
    #[tokio::test]
    async fn test_ai_text_passes_through_verbatim() {
        let reply = "## Plan\n\n- revise algebra\n- `30 min` breaks\n\n```text\nMon: chapters 1-2\n```";
        let ai = StubAi::replying(reply);
        let search = StubSearch::returning(vec![]);
        let router = MessageRouter::new(ai, search, 5);

        let envelope = router.route("plan my study week").await;
        assert_eq!(envelope, ReplyEnvelope::ok(reply));
    }

    /// Test 4: Provider errors surface only as the fixed texts
    #[tokio::test]
    async fn test_provider_errors_use_fixed_texts() {
        let router = MessageRouter::new(
            StubAi::failing(),
            StubSearch::returning(vec![]),
            5,
        );
        let envelope = router.route("hello").await;
        assert_eq!(envelope, ReplyEnvelope::error("AI service failed"));

        let router = MessageRouter::new(
            StubAi::replying("unused"),
            StubSearch::failing(),
            5,
        );
        let envelope = router.route("search: hello").await;
        assert_eq!(envelope, ReplyEnvelope::error("Search service failed"));
        // No timeout or status detail may leak through
        assert!(!envelope.text().contains("10000"));
    }

    /// Test 5: Routing is stateless across calls
    #[tokio::test]
    async fn test_routing_is_stateless() {
        let ai = StubAi::replying("deterministic answer");
        let search = StubSearch::returning(vec![result("A", "http://x", "s")]);
        let router = MessageRouter::new(ai.clone(), search.clone(), 5);

        let prompt_first = router.route("what is a monad").await;
        let search_first = router.route("/search monads").await;
        let prompt_second = router.route("what is a monad").await;
        let search_second = router.route("/search monads").await;

        assert_eq!(prompt_first, prompt_second);
        assert_eq!(search_first, search_second);
        assert_eq!(ai.calls.load(Ordering::SeqCst), 2);
        assert_eq!(search.calls.load(Ordering::SeqCst), 2);
    }
}
