// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Widgets for the TUI

pub mod input_area;
pub mod message;
pub mod news_pane;
pub mod results_pane;
pub mod status_bar;

pub use input_area::InputBox;
pub use message::TranscriptView;
pub use news_pane::NewsPane;
pub use results_pane::ResultsPane;
pub use status_bar::StatusBar;
