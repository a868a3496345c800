// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Widget state for the TUI

pub mod input;
pub mod scroll;
pub mod transcript;

pub use input::InputState;
pub use scroll::ScrollState;
pub use transcript::{truncate_string, Sender, Transcript, TranscriptEntry};
