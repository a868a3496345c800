// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wire types for the portal API
//!
//! All three endpoints are consumed as opaque JSON contracts: the client
//! deserializes the fields it renders and validates nothing beyond that.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// `session_id` is serialized as an explicit `null` on the first request of a
/// conversation; the backend keys multi-turn state off the value it returned
/// previously.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub text: String,
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Build a request continuing the given session (or opening a new one).
    pub fn new(text: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            session_id,
        }
    }
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub session_id: String,
    pub response: String,
}

/// One element of the `GET /api/news` array.
///
/// The portal spells the image field `relate_image_link`; `date` is only
/// present on newer backend revisions, so it defaults to absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    #[serde(rename = "relate_image_link")]
    pub image_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One element of the `GET /search` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}
