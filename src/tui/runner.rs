// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! TUI runner
//!
//! Owns the terminal, the UI state and the event loop. The loop drains
//! completion events from the request tasks, draws a frame and polls the
//! terminal for input; network work never runs on this path.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event as TermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::backend::Backend;
use crate::error::Result;

use super::controllers::{ChatController, NewsLoader, SearchController};
use super::events::{create_event_channel, EventEmitter, EventReceiver, UiEvent};
use super::state::{InputState, ScrollState};
use super::TuiConfig;

mod render;

/// Which input field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Chat,
    Search,
}

/// State for the whole TUI session
pub struct TuiState {
    pub chat: ChatController,
    pub search: SearchController,
    pub news: NewsLoader,
    pub chat_input: InputState,
    pub search_input: InputState,
    pub scroll: ScrollState,
    pub focus: PanelFocus,
    pub bot_name: String,
    pub backend_url: String,
    pub should_quit: bool,
    /// Transcript area width from the last draw, for scroll math between draws
    pub chat_area_width: u16,
}

impl TuiState {
    pub fn new(backend: Arc<dyn Backend>, events: EventEmitter, config: &TuiConfig) -> Self {
        Self {
            chat: ChatController::new(Arc::clone(&backend), events.clone()),
            search: SearchController::new(Arc::clone(&backend), events.clone()),
            news: NewsLoader::new(backend, events),
            chat_input: InputState::new(),
            search_input: InputState::new(),
            scroll: ScrollState::new(),
            focus: PanelFocus::Chat,
            bot_name: config.bot_name.clone(),
            backend_url: config.backend_url.clone(),
            should_quit: false,
            chat_area_width: 80,
        }
    }

    /// Route a completion event to the controller that issued the request.
    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ChatReply(reply) => {
                self.chat.handle_reply(reply);
                self.scroll.follow();
            }
            UiEvent::ChatFailed(error) => {
                self.chat.handle_failure(&error);
                self.scroll.follow();
            }
            UiEvent::SearchCompleted { seq, results } => {
                self.search.handle_completed(seq, results);
            }
            UiEvent::SearchFailed { seq, error } => {
                self.search.handle_failure(seq, &error);
            }
            UiEvent::NewsLoaded(items) => self.news.handle_loaded(items),
            UiEvent::NewsFailed(message) => self.news.handle_failure(&message),
        }
    }

    /// Submit the focused field.
    pub fn submit_focused(&mut self) {
        match self.focus {
            PanelFocus::Chat => {
                // The field is cleared only when the submit was accepted;
                // a no-op leaves the draft in place.
                if self.chat.submit(self.chat_input.text()) {
                    self.chat_input.clear();
                    self.scroll.follow();
                }
            }
            PanelFocus::Search => {
                self.search.submit(self.search_input.text());
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Chat => PanelFocus::Search,
            PanelFocus::Search => PanelFocus::Chat,
        };
    }

    fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            PanelFocus::Chat => &mut self.chat_input,
            PanelFocus::Search => &mut self.search_input,
        }
    }

    fn transcript_total_height(&self) -> usize {
        self.scroll
            .total_height(self.chat.transcript().entries(), self.chat_area_width)
    }
}

/// Handle one key event.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            state.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Tab) => {
            state.toggle_focus();
        }
        (KeyModifiers::NONE, KeyCode::Enter) => {
            state.submit_focused();
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            state.focused_input().backspace();
        }
        (KeyModifiers::NONE, KeyCode::Delete) => {
            state.focused_input().delete();
        }
        (KeyModifiers::NONE, KeyCode::Left) => {
            state.focused_input().move_left();
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            state.focused_input().move_right();
        }
        (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            state.focused_input().move_home();
        }
        (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            state.focused_input().move_end();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            state.focused_input().clear();
        }
        (KeyModifiers::NONE, KeyCode::PageUp) => {
            state.scroll.page_up();
        }
        (KeyModifiers::NONE, KeyCode::PageDown) => {
            let total = state.transcript_total_height();
            state.scroll.page_down(total);
        }
        (KeyModifiers::CONTROL, KeyCode::Up) => {
            state.scroll.scroll_up(1);
        }
        (KeyModifiers::CONTROL, KeyCode::Down) => {
            let total = state.transcript_total_height();
            state.scroll.scroll_down(1, total);
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            state.focused_input().insert_char(c);
        }
        _ => {}
    }
}

/// Run the TUI until the user quits.
///
/// This is the main entry point for the interactive client.
pub async fn run_tui(config: TuiConfig, backend: Arc<dyn Backend>) -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(terminal_backend)?;

    let (tx, mut rx) = create_event_channel();
    let mut state = TuiState::new(backend, EventEmitter::new(tx), &config);
    state.news.start();

    let result = run_loop(&mut terminal, &mut state, &mut rx).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    rx: &mut EventReceiver,
) -> Result<()> {
    loop {
        while let Ok(event) = rx.try_recv() {
            state.handle_ui_event(event);
        }

        terminal.draw(|frame| render::draw_tui(frame, state))?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            if let TermEvent::Key(key) = crossterm::event::read()? {
                handle_key(state, key);
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
