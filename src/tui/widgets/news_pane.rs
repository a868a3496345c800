// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! News feed widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::backend::NewsItem;

/// Widget rendering the portal news list in response order.
///
/// An empty list renders an empty pane: the loader neither retries nor
/// shows a placeholder when the fetch failed.
pub struct NewsPane<'a> {
    items: &'a [NewsItem],
}

impl<'a> NewsPane<'a> {
    pub fn new(items: &'a [NewsItem]) -> Self {
        Self { items }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        for item in self.items {
            let mut title = vec![Span::styled(
                item.title.clone(),
                Style::default().fg(Color::White).bold(),
            )];
            if let Some(date) = &item.date {
                title.push(Span::styled(
                    format!("  {}", date),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(title));

            lines.push(Line::from(Span::styled(
                item.image_link.clone(),
                Style::default().fg(Color::DarkGray).underlined(),
            )));
            lines.push(Line::from(Span::styled(
                item.description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::default());
        }

        lines
    }
}

impl Widget for NewsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" news ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        Paragraph::new(Text::from(self.lines()))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
