// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for the widget controllers against the scripted mock.
//!
//! These drive the same state/event plumbing the runner uses, with the
//! event channel drained by hand instead of the terminal loop.

use std::sync::Arc;

use campus::backend::{MockBackend, SearchResult};
use campus::tui::controllers::ResultsView;
use campus::tui::events::{create_event_channel, EventEmitter, EventReceiver};
use campus::tui::runner::handle_key;
use campus::tui::state::Sender;
use campus::tui::{TuiConfig, TuiState, UiEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn state_with(mock: &MockBackend) -> (TuiState, EventReceiver) {
    let (tx, rx) = create_event_channel();
    let config = TuiConfig {
        backend_url: "http://localhost:8000".to_string(),
        bot_name: "assistant".to_string(),
    };
    (
        TuiState::new(Arc::new(mock.clone()), EventEmitter::new(tx), &config),
        rx,
    )
}

fn type_text(state: &mut TuiState, text: &str) {
    for c in text.chars() {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn press(state: &mut TuiState, code: KeyCode) {
    handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
}

async fn pump(state: &mut TuiState, rx: &mut EventReceiver) {
    let event = rx.recv().await.expect("expected a completion event");
    state.handle_ui_event(event);
}

#[tokio::test]
async fn test_chat_round_trip_and_session_continuity() {
    let mock = MockBackend::new();
    mock.push_chat_reply("abc", "Hi there");
    mock.push_chat_reply("def", "Again");
    let (mut state, mut rx) = state_with(&mock);

    // First round-trip.
    type_text(&mut state, "Hello");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    let entries = state.chat.transcript().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].sender, Sender::User);
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(entries[1].sender, Sender::Bot);
    assert_eq!(entries[1].text, "Hi there");
    assert!(!state.chat.is_sending());

    // The next submit carries the identifier returned above.
    type_text(&mut state, "And again");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    let requests = mock.chat_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].session_id, None);
    assert_eq!(requests[1].session_id, Some("abc".to_string()));
    // And the stored session moved on to the latest reply.
    assert_eq!(state.chat.session(), Some("def"));
}

#[tokio::test]
async fn test_chat_failure_is_visible_and_releases_control() {
    let mock = MockBackend::new();
    mock.push_chat_failure("portal unreachable");
    let (mut state, mut rx) = state_with(&mock);

    type_text(&mut state, "Hello");
    press(&mut state, KeyCode::Enter);
    assert!(state.chat.is_sending());

    pump(&mut state, &mut rx).await;

    assert!(!state.chat.is_sending());
    let last = state.chat.transcript().last().unwrap();
    assert_eq!(last.sender, Sender::System);
    assert!(last.text.contains("portal unreachable"));
}

#[tokio::test]
async fn test_chat_failure_does_not_lose_session() {
    let mock = MockBackend::new();
    mock.push_chat_reply("abc", "Hi");
    mock.push_chat_failure("hiccup");
    mock.push_chat_reply("abc", "Recovered");
    let (mut state, mut rx) = state_with(&mock);

    type_text(&mut state, "one");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    type_text(&mut state, "two");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    type_text(&mut state, "three");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    // The failed round-trip still carried, and kept, the session.
    let requests = mock.chat_requests();
    assert_eq!(requests[1].session_id, Some("abc".to_string()));
    assert_eq!(requests[2].session_id, Some("abc".to_string()));
}

#[tokio::test]
async fn test_search_empty_set_renders_placeholder_view() {
    let mock = MockBackend::new();
    mock.push_search_results(Vec::new());
    let (mut state, mut rx) = state_with(&mock);

    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "library");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;

    assert_eq!(*state.search.view(), ResultsView::NoResults);
}

#[tokio::test]
async fn test_search_race_resolves_to_latest_submit() {
    let mock = MockBackend::new();
    let (mut state, mut rx) = state_with(&mock);

    press(&mut state, KeyCode::Tab);

    // Submit "a", then "ab" before the first response lands.
    type_text(&mut state, "a");
    press(&mut state, KeyCode::Enter);
    type_text(&mut state, "b");
    press(&mut state, KeyCode::Enter);

    // Deliver completions out of order: "ab" first, the stale "a" after.
    state.handle_ui_event(UiEvent::SearchCompleted {
        seq: 2,
        results: vec![SearchResult {
            url: "https://portal.example/ab".to_string(),
            title: "ab result".to_string(),
            headline: None,
        }],
    });
    state.handle_ui_event(UiEvent::SearchCompleted {
        seq: 1,
        results: vec![SearchResult {
            url: "https://portal.example/a".to_string(),
            title: "a result".to_string(),
            headline: None,
        }],
    });

    match state.search.view() {
        ResultsView::Results(results) => assert_eq!(results[0].title, "ab result"),
        other => panic!("Expected results, got {:?}", other),
    }

    // Drain the real (unscripted) completions without panicking.
    while rx.try_recv().is_ok() {}
}

#[tokio::test]
async fn test_news_failure_leaves_other_widgets_working() {
    let mock = MockBackend::new();
    mock.push_news_failure("backend down");
    mock.push_chat_reply("abc", "Hi there");
    let (mut state, mut rx) = state_with(&mock);

    state.news.start();
    pump(&mut state, &mut rx).await;

    // News stays empty, silently.
    assert!(state.news.items().is_empty());

    // Chat is unaffected.
    type_text(&mut state, "Hello");
    press(&mut state, KeyCode::Enter);
    pump(&mut state, &mut rx).await;
    assert_eq!(state.chat.transcript().len(), 2);
}
