// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget for the TUI

use ratatui::prelude::*;

use crate::tui::state::truncate_string;

/// Widget for rendering the title/status bar
pub struct StatusBar<'a> {
    title: &'a str,
    backend_url: &'a str,
    session_id: Option<&'a str>,
    is_sending: bool,
    is_searching: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, backend_url: &'a str) -> Self {
        Self {
            title,
            backend_url,
            session_id: None,
            is_sending: false,
            is_searching: false,
        }
    }

    pub fn session(mut self, session_id: Option<&'a str>) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn sending(mut self, is_sending: bool) -> Self {
        self.is_sending = is_sending;
        self
    }

    pub fn searching(mut self, is_searching: bool) -> Self {
        self.is_searching = is_searching;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Clear the line with a dark background
        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let mut x = area.x + 1;

        let title_style = Style::default().fg(Color::White).bold().bg(Color::DarkGray);
        buf.set_string(x, area.y, self.title, title_style);
        x += self.title.len() as u16 + 1;

        let dim = Style::default().fg(Color::Gray).bg(Color::DarkGray);
        buf.set_string(x, area.y, "─", dim);
        x += 2;

        let url = truncate_string(self.backend_url, 40);
        buf.set_string(x, area.y, &url, dim);
        x += url.chars().count() as u16 + 2;

        if let Some(session_id) = self.session_id {
            let short = truncate_string(session_id, 11);
            buf.set_string(x, area.y, format!("session {}", short), dim);
            x += 8 + short.chars().count() as u16 + 2;
        }

        if self.is_sending {
            buf.set_string(
                x,
                area.y,
                "sending…",
                Style::default().fg(Color::Green).bg(Color::DarkGray),
            );
            x += 9;
        }

        if self.is_searching {
            buf.set_string(
                x,
                area.y,
                "searching…",
                Style::default().fg(Color::Green).bg(Color::DarkGray),
            );
        }
    }
}
