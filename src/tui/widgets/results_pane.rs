// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Search results widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::controllers::{ResultsView, ERROR_PLACEHOLDER, NO_RESULTS_PLACEHOLDER};

/// Widget rendering the current search outcome.
///
/// The whole pane is replaced per search: a result list in server order, the
/// literal no-results placeholder, or the literal error placeholder.
pub struct ResultsPane<'a> {
    view: &'a ResultsView,
}

impl<'a> ResultsPane<'a> {
    pub fn new(view: &'a ResultsView) -> Self {
        Self { view }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.view {
            ResultsView::Idle => vec![Line::from(Span::styled(
                "type a query and press enter",
                Style::default().fg(Color::DarkGray),
            ))],
            ResultsView::NoResults => vec![Line::from(Span::styled(
                NO_RESULTS_PLACEHOLDER,
                Style::default().fg(Color::Gray),
            ))],
            ResultsView::Failed => vec![Line::from(Span::styled(
                ERROR_PLACEHOLDER,
                Style::default().fg(Color::Yellow),
            ))],
            ResultsView::Results(results) => {
                let mut lines = Vec::new();
                for result in results {
                    lines.push(Line::from(Span::styled(
                        result.title.clone(),
                        Style::default().fg(Color::White).bold(),
                    )));
                    lines.push(Line::from(Span::styled(
                        result.url.clone(),
                        Style::default().fg(Color::Cyan).underlined(),
                    )));
                    if let Some(headline) = &result.headline {
                        lines.push(Line::from(Span::styled(
                            headline.clone(),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                    lines.push(Line::default());
                }
                lines
            }
        }
    }
}

impl Widget for ResultsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" results ")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SearchResult;
    use ratatui::backend::TestBackend;

    fn render_to_text(pane: ResultsPane, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(pane, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn test_no_results_placeholder_is_literal() {
        let view = ResultsView::NoResults;
        let text = render_to_text(ResultsPane::new(&view), 40, 5);

        assert!(text.contains(NO_RESULTS_PLACEHOLDER));
    }

    #[test]
    fn test_error_placeholder_is_literal() {
        let view = ResultsView::Failed;
        let text = render_to_text(ResultsPane::new(&view), 40, 5);

        assert!(text.contains(ERROR_PLACEHOLDER));
    }

    #[test]
    fn test_results_render_in_order_with_headline() {
        let view = ResultsView::Results(vec![
            SearchResult {
                url: "https://portal.example/a".to_string(),
                title: "First".to_string(),
                headline: Some("first snippet".to_string()),
            },
            SearchResult {
                url: "https://portal.example/b".to_string(),
                title: "Second".to_string(),
                headline: None,
            },
        ]);
        let text = render_to_text(ResultsPane::new(&view), 45, 12);

        let first = text.find("First").unwrap();
        let second = text.find("Second").unwrap();
        assert!(first < second);
        assert!(text.contains("first snippet"));
        assert!(text.contains("https://portal.example/b"));
    }

    #[test]
    fn test_idle_shows_hint() {
        let view = ResultsView::Idle;
        let text = render_to_text(ResultsPane::new(&view), 40, 5);

        assert!(text.contains("type a query"));
    }
}
