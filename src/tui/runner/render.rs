// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use ratatui::prelude::*;

use crate::tui::widgets::{InputBox, NewsPane, ResultsPane, StatusBar, TranscriptView};

use super::{PanelFocus, TuiState};

const TITLE_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
/// Chat pane gets 55% of the width; search and news share the rest
const CHAT_PANE_RATIO: f32 = 0.55;

/// Draw the TUI
pub(super) fn draw_tui(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();

    let title_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: TITLE_HEIGHT.min(area.height),
    };
    let bar = StatusBar::new("campus", &state.backend_url)
        .session(state.chat.session())
        .sending(state.chat.is_sending())
        .searching(state.search.is_searching());
    frame.render_widget(bar, title_area);

    let body = Rect {
        x: area.x,
        y: area.y + title_area.height,
        width: area.width,
        height: area.height.saturating_sub(title_area.height),
    };
    if body.height == 0 {
        return;
    }

    let chat_width = ((body.width as f32) * CHAT_PANE_RATIO) as u16;
    let chat_area = Rect {
        width: chat_width,
        ..body
    };
    let side_area = Rect {
        x: body.x + chat_width,
        y: body.y,
        width: body.width.saturating_sub(chat_width),
        height: body.height,
    };

    draw_chat_pane(frame, state, chat_area);
    draw_side_panes(frame, state, side_area);
}

/// Transcript above, message input below.
fn draw_chat_pane(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let input_height = INPUT_HEIGHT.min(area.height);
    let transcript_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(input_height),
    };

    // Scroll math runs against the same width the widget renders at.
    state.chat_area_width = transcript_area.width;
    state.scroll.update_viewport_height(transcript_area.height);
    let total = state
        .scroll
        .total_height(state.chat.transcript().entries(), transcript_area.width);
    state.scroll.apply_follow(total);

    let transcript = TranscriptView::new(state.chat.transcript().entries(), &state.bot_name)
        .offset(state.scroll.offset);
    frame.render_widget(transcript, transcript_area);

    let input_area = Rect {
        x: area.x,
        y: area.y + transcript_area.height,
        width: area.width,
        height: input_height,
    };
    let input = InputBox::new(&state.chat_input, "message")
        .focused(state.focus == PanelFocus::Chat)
        .busy(state.chat.is_sending());
    frame.render_widget(input, input_area);
}

/// Search input and results on top, news feed below.
fn draw_side_panes(frame: &mut Frame, state: &TuiState, area: Rect) {
    let input_height = INPUT_HEIGHT.min(area.height);
    let remaining = area.height.saturating_sub(input_height);
    let results_height = remaining / 2;

    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: input_height,
    };
    let input = InputBox::new(&state.search_input, "search")
        .focused(state.focus == PanelFocus::Search);
    frame.render_widget(input, input_area);

    let results_area = Rect {
        x: area.x,
        y: area.y + input_height,
        width: area.width,
        height: results_height,
    };
    frame.render_widget(ResultsPane::new(state.search.view()), results_area);

    let news_area = Rect {
        x: area.x,
        y: area.y + input_height + results_height,
        width: area.width,
        height: remaining.saturating_sub(results_height),
    };
    frame.render_widget(NewsPane::new(state.news.items()), news_area);
}
