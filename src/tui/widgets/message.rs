// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript rendering widget

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::tui::state::{Sender, TranscriptEntry};

/// Widget rendering the whole transcript with a line-based scroll offset.
///
/// Each entry renders as a header line (the sender label), the entry text
/// with newlines preserved as line breaks, and a spacer line. The line
/// structure matches the heights `ScrollState` computes.
pub struct TranscriptView<'a> {
    entries: &'a [TranscriptEntry],
    bot_name: &'a str,
    offset: u16,
}

impl<'a> TranscriptView<'a> {
    pub fn new(entries: &'a [TranscriptEntry], bot_name: &'a str) -> Self {
        Self {
            entries,
            bot_name,
            offset: 0,
        }
    }

    /// Scroll offset in rendered lines from the top.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset.min(u16::MAX as usize) as u16;
        self
    }

    fn styles(sender: Sender) -> (Style, Style) {
        match sender {
            Sender::User => (
                Style::default().fg(Color::Cyan).bold(),
                Style::default().fg(Color::Cyan),
            ),
            Sender::Bot => (
                Style::default().fg(Color::White).bold(),
                Style::default().fg(Color::White),
            ),
            Sender::System => (
                Style::default().fg(Color::Yellow).bold(),
                Style::default().fg(Color::Yellow),
            ),
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        for entry in self.entries {
            let (header_style, content_style) = Self::styles(entry.sender);
            let label = entry.sender.label(self.bot_name);
            lines.push(Line::from(Span::styled(format!("  {}", label), header_style)));

            if entry.text.is_empty() {
                lines.push(Line::default());
            } else {
                for text_line in entry.text.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", text_line),
                        content_style,
                    )));
                }
            }

            lines.push(Line::default());
        }

        lines
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(Text::from(self.lines()))
            .wrap(Wrap { trim: false })
            .scroll((self.offset, 0))
            .render(area, buf);
    }
}
