// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the TUI
//!
//! Events let spawned request tasks communicate with the UI loop without
//! blocking it. Uses tokio mpsc channels for thread-safe messaging.

use tokio::sync::mpsc;

use crate::backend::{ChatReply, NewsItem, SearchResult};

/// Events for async communication between request tasks and the UI
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The chat round-trip succeeded
    ChatReply(ChatReply),
    /// The chat round-trip failed (network or status)
    ChatFailed(String),
    /// A search completed; `seq` identifies the submit it was issued under
    SearchCompleted {
        seq: u64,
        results: Vec<SearchResult>,
    },
    /// A search failed; `seq` identifies the submit it was issued under
    SearchFailed { seq: u64, error: String },
    /// The startup news fetch succeeded
    NewsLoaded(Vec<NewsItem>),
    /// The startup news fetch failed
    NewsFailed(String),
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<UiEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if the receiver is dropped
pub fn send_event(tx: &EventSender, event: UiEvent) {
    let _ = tx.send(event);
}

/// Wrapper that can be cloned and passed to async tasks
#[derive(Clone)]
pub struct EventEmitter {
    tx: EventSender,
}

impl EventEmitter {
    pub fn new(tx: EventSender) -> Self {
        Self { tx }
    }

    pub fn emit(&self, event: UiEvent) {
        send_event(&self.tx, event);
    }

    pub fn chat_reply(&self, reply: ChatReply) {
        self.emit(UiEvent::ChatReply(reply));
    }

    pub fn chat_failed(&self, error: &str) {
        self.emit(UiEvent::ChatFailed(error.to_string()));
    }

    pub fn search_completed(&self, seq: u64, results: Vec<SearchResult>) {
        self.emit(UiEvent::SearchCompleted { seq, results });
    }

    pub fn search_failed(&self, seq: u64, error: &str) {
        self.emit(UiEvent::SearchFailed {
            seq,
            error: error.to_string(),
        });
    }

    pub fn news_loaded(&self, items: Vec<NewsItem>) {
        self.emit(UiEvent::NewsLoaded(items));
    }

    pub fn news_failed(&self, error: &str) {
        self.emit(UiEvent::NewsFailed(error.to_string()));
    }
}
