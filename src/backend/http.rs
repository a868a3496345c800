// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP backend implementation
//!
//! Implements the Backend trait against the real portal over reqwest.
//! Network failure and non-success statuses collapse into the same
//! "request failed" path the widgets render; decode failures are kept
//! distinct only for logging.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, CampusError, Result};

use super::api::Backend;
use super::types::{ChatReply, ChatRequest, NewsItem, SearchResult};

/// Default portal address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Portal client over HTTP.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the given portal address.
    ///
    /// The timeout covers the whole request; a hung backend resolves as a
    /// failure instead of wedging the widget that issued it.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// Create a client with the default address and timeout.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// The portal address this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a transport-level failure to the error taxonomy.
    fn map_send_error(error: reqwest::Error) -> CampusError {
        if error.is_connect() {
            CampusError::Api(ApiError::Network(format!(
                "portal unreachable: {}",
                error
            )))
        } else if error.is_timeout() {
            CampusError::Api(ApiError::Network("request timed out".to_string()))
        } else {
            CampusError::Http(error)
        }
    }

    /// Check the status and decode the body, or surface the error body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CampusError::Api(ApiError::Status {
                status: status.as_u16(),
                message,
            }));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CampusError::Api(ApiError::InvalidResponse(e.to_string())))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn news(&self) -> Result<Vec<NewsItem>> {
        let response = self
            .client
            .get(self.endpoint("/api/news"))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::decode(response).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let response = self
            .client
            .post(self.endpoint("/chat"))
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::decode(response).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .client
            .get(self.endpoint("/search"))
            .query(&[("query", query)])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let backend =
            HttpBackend::new("http://portal.example//", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.base_url(), "http://portal.example");
    }

    #[test]
    fn test_with_defaults() {
        let backend = HttpBackend::with_defaults().unwrap();
        assert_eq!(backend.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_joins_path() {
        let backend = HttpBackend::new("http://portal.example", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.endpoint("/api/news"),
            "http://portal.example/api/news"
        );
    }
}
