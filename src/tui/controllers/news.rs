// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! News loader
//!
//! Fetches the portal news list once at startup and renders it in server
//! order. Failure is logged and the pane stays empty: no retry, no
//! placeholder.

use std::sync::Arc;

use tracing::error;

use crate::backend::{Backend, NewsItem};
use crate::tui::events::EventEmitter;

/// Controller for the news feed
pub struct NewsLoader {
    backend: Arc<dyn Backend>,
    events: EventEmitter,
    items: Vec<NewsItem>,
    started: bool,
}

impl NewsLoader {
    pub fn new(backend: Arc<dyn Backend>, events: EventEmitter) -> Self {
        Self {
            backend,
            events,
            items: Vec::new(),
            started: false,
        }
    }

    /// Loaded items, in response order; empty until the fetch completes.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Issue the one startup fetch. Subsequent calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            match backend.news().await {
                Ok(items) => events.news_loaded(items),
                Err(err) => events.news_failed(&err.to_string()),
            }
        });
    }

    /// Apply the loaded list.
    pub fn handle_loaded(&mut self, items: Vec<NewsItem>) {
        self.items = items;
    }

    /// Log the failure; the pane is left as is.
    pub fn handle_failure(&self, message: &str) {
        error!(message, "news fetch failed");
    }
}
