// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock backend for testing
//!
//! Replays scripted outcomes in FIFO order and records every request it
//! receives, so controller tests can assert on the wire traffic without a
//! real portal.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ApiError, CampusError, Result};

use super::api::Backend;
use super::types::{ChatReply, ChatRequest, NewsItem, SearchResult};

/// A scripted backend outcome: a payload or a canned failure message.
type Outcome<T> = std::result::Result<T, String>;

fn to_result<T>(outcome: Option<Outcome<T>>, endpoint: &str) -> Result<T> {
    match outcome {
        Some(Ok(value)) => Ok(value),
        Some(Err(message)) => Err(CampusError::Api(ApiError::Network(message))),
        None => Err(CampusError::Api(ApiError::Network(format!(
            "no scripted {} outcome",
            endpoint
        )))),
    }
}

/// A configurable mock implementation of the Backend trait.
#[derive(Clone, Default)]
pub struct MockBackend {
    chat_outcomes: Arc<Mutex<VecDeque<Outcome<ChatReply>>>>,
    news_outcomes: Arc<Mutex<VecDeque<Outcome<Vec<NewsItem>>>>>,
    search_outcomes: Arc<Mutex<VecDeque<Outcome<Vec<SearchResult>>>>>,
    chat_requests: Arc<Mutex<Vec<ChatRequest>>>,
    search_queries: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful chat reply.
    pub fn push_chat_reply(&self, session_id: impl Into<String>, response: impl Into<String>) {
        self.chat_outcomes.lock().unwrap().push_back(Ok(ChatReply {
            session_id: session_id.into(),
            response: response.into(),
        }));
    }

    /// Queue a failed chat round-trip.
    pub fn push_chat_failure(&self, message: impl Into<String>) {
        self.chat_outcomes
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Queue a successful news fetch.
    pub fn push_news(&self, items: Vec<NewsItem>) {
        self.news_outcomes.lock().unwrap().push_back(Ok(items));
    }

    /// Queue a failed news fetch.
    pub fn push_news_failure(&self, message: impl Into<String>) {
        self.news_outcomes
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Queue a successful search.
    pub fn push_search_results(&self, results: Vec<SearchResult>) {
        self.search_outcomes.lock().unwrap().push_back(Ok(results));
    }

    /// Queue a failed search.
    pub fn push_search_failure(&self, message: impl Into<String>) {
        self.search_outcomes
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Every chat request received so far, in order.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    /// Every search query received so far, in order.
    pub fn search_queries(&self) -> Vec<String> {
        self.search_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn news(&self) -> Result<Vec<NewsItem>> {
        let outcome = self.news_outcomes.lock().unwrap().pop_front();
        to_result(outcome, "news")
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        self.chat_requests.lock().unwrap().push(request);
        let outcome = self.chat_outcomes.lock().unwrap().pop_front();
        to_result(outcome, "chat")
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search_queries.lock().unwrap().push(query.to_string());
        let outcome = self.search_outcomes.lock().unwrap().pop_front();
        to_result(outcome, "search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_replays_in_order() {
        let mock = MockBackend::new();
        mock.push_chat_reply("s1", "first");
        mock.push_chat_reply("s2", "second");

        let first = mock.chat(ChatRequest::new("a", None)).await.unwrap();
        let second = mock
            .chat(ChatRequest::new("b", Some("s1".to_string())))
            .await
            .unwrap();

        assert_eq!(first.response, "first");
        assert_eq!(second.response, "second");
    }

    #[tokio::test]
    async fn test_chat_records_requests() {
        let mock = MockBackend::new();
        mock.push_chat_reply("s1", "hello");

        mock.chat(ChatRequest::new("hi", None)).await.unwrap();

        let requests = mock.chat_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "hi");
        assert!(requests[0].session_id.is_none());
    }

    #[tokio::test]
    async fn test_unscripted_call_fails() {
        let mock = MockBackend::new();
        let result = mock.news().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let mock = MockBackend::new();
        mock.push_search_failure("scripted outage");

        let error = mock.search("anything").await.unwrap_err();
        assert!(error.to_string().contains("scripted outage"));
        assert_eq!(mock.search_queries(), vec!["anything".to_string()]);
    }
}
