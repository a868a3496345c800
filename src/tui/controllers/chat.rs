// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat controller
//!
//! The stateful widget: it owns the transcript, the session identifier and
//! the READY/SENDING flag. Submit appends the user entry optimistically,
//! before the request resolves; both completion paths release the flag, so
//! the send control can never stay stuck after a response.

use std::sync::Arc;

use tracing::debug;

use crate::backend::{Backend, ChatReply, ChatRequest};
use crate::tui::events::EventEmitter;
use crate::tui::state::Transcript;

/// Controller for the chat panel
pub struct ChatController {
    backend: Arc<dyn Backend>,
    events: EventEmitter,
    transcript: Transcript,
    /// Opaque token from the latest reply; absent until the first success
    session: Option<String>,
    /// True while a request is in flight; submit is a no-op in that state
    sending: bool,
}

impl ChatController {
    pub fn new(backend: Arc<dyn Backend>, events: EventEmitter) -> Self {
        Self {
            backend,
            events,
            transcript: Transcript::new(),
            session: None,
            sending: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The session identifier the next request will carry.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Submit the given field contents.
    ///
    /// Empty or whitespace-only input is a no-op, as is submitting while a
    /// request is in flight. Returns whether a request was issued; the caller
    /// clears the input field only on acceptance.
    pub fn submit(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() || self.sending {
            return false;
        }

        self.transcript.push_user(text);
        self.sending = true;

        let request = ChatRequest::new(text, self.session.clone());
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            match backend.chat(request).await {
                Ok(reply) => events.chat_reply(reply),
                Err(error) => events.chat_failed(&error.to_string()),
            }
        });

        true
    }

    /// Apply a successful reply: adopt the returned session identifier
    /// (overwriting any prior value), append the bot entry, release the flag.
    pub fn handle_reply(&mut self, reply: ChatReply) {
        debug!(session_id = %reply.session_id, "chat reply received");
        self.session = Some(reply.session_id);
        self.transcript.push_bot(reply.response);
        self.sending = false;
    }

    /// Apply a failed round-trip: append a visible system entry and release
    /// the flag. The session identifier is left as it was.
    pub fn handle_failure(&mut self, error: &str) {
        debug!(error, "chat request failed");
        self.transcript
            .push_system(format!("request failed: {}", error));
        self.sending = false;
    }
}
