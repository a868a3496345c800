// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Portal backend access
//!
//! The `Backend` trait is the seam between the UI controllers and the
//! network. `HttpBackend` talks to the real portal; `MockBackend` replays
//! scripted outcomes for tests.

pub mod api;
pub mod http;
pub mod mock;
pub mod types;

pub use api::Backend;
pub use http::HttpBackend;
pub use mock::MockBackend;
pub use types::{ChatReply, ChatRequest, NewsItem, SearchResult};
