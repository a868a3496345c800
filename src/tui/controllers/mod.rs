// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-widget controllers
//!
//! Each controller owns one widget's state and drives one portal endpoint.
//! A submit action spawns a request task; the outcome re-enters the UI loop
//! as a `UiEvent` and is handed back to the controller that issued it. The
//! three controllers are independent: a failure in one leaves the others
//! untouched.

pub mod chat;
pub mod news;
pub mod search;

pub use chat::ChatController;
pub use news::NewsLoader;
pub use search::{ResultsView, SearchController, ERROR_PLACEHOLDER, NO_RESULTS_PLACEHOLDER};
