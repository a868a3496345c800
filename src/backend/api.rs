// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backend trait
//!
//! One async method per portal endpoint. Controllers hold an
//! `Arc<dyn Backend>` so tests can swap in the scripted mock.

use async_trait::async_trait;

use crate::error::Result;

use super::types::{ChatReply, ChatRequest, NewsItem, SearchResult};

/// Access to the three portal endpoints.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/news`: the portal news list, in server order.
    async fn news(&self) -> Result<Vec<NewsItem>>;

    /// `POST /chat`: one chat round-trip carrying the session identifier
    /// returned by the previous reply (or `None` for a fresh conversation).
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply>;

    /// `GET /search?query=...`: portal-wide search, query URL-encoded.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}
