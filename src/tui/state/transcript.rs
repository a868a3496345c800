// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript state for the chat panel
//!
//! The transcript is append-only and ordered by submission/response time:
//! entries are pushed, never edited or removed, and live for the process
//! lifetime only.

use std::time::SystemTime;

use uuid::Uuid;

/// Safely truncate a string at a character boundary, appending "..." if truncated.
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    System,
}

impl Sender {
    /// Label rendered in front of the entry. The bot label is the configured
    /// bot name, so it is resolved by the caller.
    pub fn label<'a>(&self, bot_name: &'a str) -> &'a str {
        match self {
            Sender::User => "you",
            Sender::Bot => bot_name,
            Sender::System => "system",
        }
    }
}

/// One rendered chat entry
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Unique ID
    pub id: Uuid,
    /// Who produced it
    pub sender: Sender,
    /// Text content; newlines render as line breaks
    pub text: String,
    /// Append time
    pub timestamp: SystemTime,
}

impl TranscriptEntry {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// The ordered, append-only sequence of chat entries
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry the user typed.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(Sender::User, text));
    }

    /// Append a bot reply.
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(Sender::Bot, text));
    }

    /// Append a system note (request failures and the like).
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.entries
            .push(TranscriptEntry::new(Sender::System, text));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
