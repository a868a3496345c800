// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Search controller
//!
//! Every search replaces the whole result view; nothing is merged. Submits
//! are numbered with a monotonically increasing sequence and completion
//! events carry the sequence they were issued under: only the response
//! matching the latest submit is applied, so a slow superseded search can
//! never overwrite a newer one.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::{Backend, SearchResult};
use crate::tui::events::EventEmitter;

/// Literal placeholder rendered for an empty result set.
pub const NO_RESULTS_PLACEHOLDER: &str = "no results";

/// Literal placeholder rendered when a search fails.
pub const ERROR_PLACEHOLDER: &str = "search failed, try again";

/// What the results pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing searched yet
    Idle,
    /// A non-empty result set, in server order
    Results(Vec<SearchResult>),
    /// The backend answered with an empty set
    NoResults,
    /// The latest search failed
    Failed,
}

/// Controller for the search box
pub struct SearchController {
    backend: Arc<dyn Backend>,
    events: EventEmitter,
    view: ResultsView,
    /// Sequence of the latest submit; responses under older values are stale
    seq: u64,
    in_flight: bool,
}

impl SearchController {
    pub fn new(backend: Arc<dyn Backend>, events: EventEmitter) -> Self {
        Self {
            backend,
            events,
            view: ResultsView::Idle,
            seq: 0,
            in_flight: false,
        }
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    /// Issue a search for the trimmed query.
    ///
    /// The previous view stays visible until a response for this submit
    /// arrives; there is no loading placeholder.
    pub fn submit(&mut self, raw: &str) {
        let query = raw.trim().to_string();
        self.seq += 1;
        self.in_flight = true;

        let seq = self.seq;
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            match backend.search(&query).await {
                Ok(results) => events.search_completed(seq, results),
                Err(error) => events.search_failed(seq, &error.to_string()),
            }
        });
    }

    /// Apply a completed search, unless a newer submit superseded it.
    /// Returns whether the view changed.
    pub fn handle_completed(&mut self, seq: u64, results: Vec<SearchResult>) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "dropping stale search results");
            return false;
        }

        self.in_flight = false;
        self.view = if results.is_empty() {
            ResultsView::NoResults
        } else {
            ResultsView::Results(results)
        };
        true
    }

    /// Apply a failed search, unless a newer submit superseded it.
    /// Returns whether the view changed.
    pub fn handle_failure(&mut self, seq: u64, error: &str) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "dropping stale search failure");
            return false;
        }

        warn!(error, "search failed");
        self.in_flight = false;
        self.view = ResultsView::Failed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::tui::events::{create_event_channel, EventEmitter, EventReceiver, UiEvent};

    fn controller_with(mock: &MockBackend) -> (SearchController, EventReceiver) {
        let (tx, rx) = create_event_channel();
        (
            SearchController::new(Arc::new(mock.clone()), EventEmitter::new(tx)),
            rx,
        )
    }

    fn result(url: &str, title: &str) -> SearchResult {
        SearchResult {
            url: url.to_string(),
            title: title.to_string(),
            headline: None,
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let mock = MockBackend::new();
        let (search, _rx) = controller_with(&mock);

        assert_eq!(*search.view(), ResultsView::Idle);
        assert!(!search.is_searching());
    }

    #[tokio::test]
    async fn test_results_replace_view() {
        let mock = MockBackend::new();
        mock.push_search_results(vec![result("https://a", "A")]);
        let (mut search, mut rx) = controller_with(&mock);

        search.submit("library");
        match rx.recv().await.unwrap() {
            UiEvent::SearchCompleted { seq, results } => {
                assert!(search.handle_completed(seq, results));
            }
            other => panic!("Expected SearchCompleted, got {:?}", other),
        }

        match search.view() {
            ResultsView::Results(results) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].title, "A");
            }
            other => panic!("Expected results, got {:?}", other),
        }
        assert!(!search.is_searching());
    }

    #[tokio::test]
    async fn test_empty_set_shows_no_results_view() {
        let mock = MockBackend::new();
        mock.push_search_results(Vec::new());
        let (mut search, mut rx) = controller_with(&mock);

        search.submit("library");
        match rx.recv().await.unwrap() {
            UiEvent::SearchCompleted { seq, results } => {
                search.handle_completed(seq, results);
            }
            other => panic!("Expected SearchCompleted, got {:?}", other),
        }

        assert_eq!(*search.view(), ResultsView::NoResults);
    }

    #[tokio::test]
    async fn test_failure_shows_failed_view() {
        let mock = MockBackend::new();
        mock.push_search_failure("down");
        let (mut search, mut rx) = controller_with(&mock);

        search.submit("library");
        match rx.recv().await.unwrap() {
            UiEvent::SearchFailed { seq, error } => {
                assert!(search.handle_failure(seq, &error));
            }
            other => panic!("Expected SearchFailed, got {:?}", other),
        }

        assert_eq!(*search.view(), ResultsView::Failed);
    }

    #[tokio::test]
    async fn test_query_is_trimmed() {
        let mock = MockBackend::new();
        mock.push_search_results(Vec::new());
        let (mut search, mut rx) = controller_with(&mock);

        search.submit("  library  ");
        rx.recv().await.unwrap();

        assert_eq!(mock.search_queries(), vec!["library".to_string()]);
    }

    #[tokio::test]
    async fn test_stale_results_are_dropped() {
        let mock = MockBackend::new();
        let (mut search, _rx) = controller_with(&mock);

        // Two submits; the first response arrives after the second submit.
        search.submit("a");
        search.submit("ab");

        let applied_stale = search.handle_completed(1, vec![result("https://a", "stale")]);
        let applied_fresh = search.handle_completed(2, vec![result("https://ab", "fresh")]);

        assert!(!applied_stale);
        assert!(applied_fresh);
        match search.view() {
            ResultsView::Results(results) => assert_eq!(results[0].title, "fresh"),
            other => panic!("Expected results, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fresh_view_survives_late_stale_arrival() {
        let mock = MockBackend::new();
        let (mut search, _rx) = controller_with(&mock);

        search.submit("a");
        search.submit("ab");

        // The newer response lands first, the superseded one afterwards.
        search.handle_completed(2, vec![result("https://ab", "fresh")]);
        let applied = search.handle_completed(1, vec![result("https://a", "stale")]);

        assert!(!applied);
        match search.view() {
            ResultsView::Results(results) => assert_eq!(results[0].title, "fresh"),
            other => panic!("Expected results, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_failure_is_dropped() {
        let mock = MockBackend::new();
        let (mut search, _rx) = controller_with(&mock);

        search.submit("a");
        search.submit("ab");

        search.handle_completed(2, vec![result("https://ab", "fresh")]);
        assert!(!search.handle_failure(1, "slow request died"));
        assert!(matches!(search.view(), ResultsView::Results(_)));
    }
}
