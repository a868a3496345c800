// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal interface for the campus client
//!
//! Three independent widgets on one screen: the chat panel with its
//! transcript and message field, the search box with its results pane, and
//! the news feed. Request tasks report back through the event channel; the
//! runner owns the terminal and the loop.

pub mod controllers;
pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;

pub use events::{EventEmitter, EventSender, UiEvent};
pub use runner::{run_tui, PanelFocus, TuiState};

/// Configuration for a TUI session
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Portal address shown in the status bar
    pub backend_url: String,
    /// Label for bot transcript entries
    pub bot_name: String,
}
