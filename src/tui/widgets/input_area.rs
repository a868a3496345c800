// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Text input widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::state::InputState;

/// Widget rendering one bordered single-line input field.
pub struct InputBox<'a> {
    input: &'a InputState,
    title: &'a str,
    focused: bool,
    busy: bool,
}

impl<'a> InputBox<'a> {
    pub fn new(input: &'a InputState, title: &'a str) -> Self {
        Self {
            input,
            title,
            focused: false,
            busy: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the field's request as in flight; the title shows it and the
    /// cursor is hidden since submits are no-ops until release.
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = if self.busy {
            format!(" {} (sending) ", self.title)
        } else {
            format!(" {} ", self.title)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Keep the cursor visible by windowing the text from the left.
        let width = inner.width as usize;
        let cursor = self.input.cursor();
        let skip = cursor.saturating_sub(width.saturating_sub(1));
        let visible: String = self.input.text().chars().skip(skip).take(width).collect();

        buf.set_string(inner.x, inner.y, &visible, Style::default().fg(Color::White));

        if self.focused && !self.busy {
            let cursor_x = inner.x + (cursor - skip) as u16;
            if cursor_x < inner.x + inner.width {
                let cell_char: String = self
                    .input
                    .text()
                    .chars()
                    .nth(cursor)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                buf.set_string(
                    cursor_x,
                    inner.y,
                    cell_char,
                    Style::default().fg(Color::Black).bg(Color::White),
                );
            }
        }
    }
}
