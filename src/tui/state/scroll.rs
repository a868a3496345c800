// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state management for the chat panel

use super::transcript::TranscriptEntry;

/// Scroll state and viewport for the transcript area
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll position in lines from the top
    pub offset: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Whether the view follows the latest entry
    pub follow_latest: bool,
}

impl ScrollState {
    /// Create a new scroll state that follows the latest entry
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport_height: 20,
            follow_latest: true,
        }
    }

    /// Update the viewport height (called on every draw from the layout)
    pub fn update_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    /// Total rendered height of the transcript at the given width
    pub fn total_height(&self, entries: &[TranscriptEntry], width: u16) -> usize {
        entries
            .iter()
            .map(|entry| Self::entry_height(entry, width))
            .sum()
    }

    /// Rendered height of one entry: header line, wrapped content, spacer.
    pub fn entry_height(entry: &TranscriptEntry, width: u16) -> usize {
        // Content is indented two columns and keeps a two-column right margin.
        let content_width = width.saturating_sub(4).max(1) as usize;

        let content_height: usize = if entry.text.is_empty() {
            1
        } else {
            entry
                .text
                .lines()
                .map(|line| {
                    let chars = line.chars().count();
                    if chars == 0 {
                        1
                    } else {
                        (chars - 1) / content_width + 1
                    }
                })
                .sum::<usize>()
                .max(1)
        };

        1 + content_height + 1
    }

    fn max_offset(&self, total_height: usize) -> usize {
        total_height.saturating_sub(self.viewport_height as usize)
    }

    /// Scroll up; manual scrolling stops following the latest entry
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        if lines > 0 {
            self.follow_latest = false;
        }
    }

    /// Scroll down; reaching the bottom resumes following
    pub fn scroll_down(&mut self, lines: usize, total_height: usize) {
        let max_offset = self.max_offset(total_height);
        self.offset = (self.offset + lines).min(max_offset);
        if self.offset >= max_offset {
            self.follow_latest = true;
        }
    }

    /// Half-viewport page up
    pub fn page_up(&mut self) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_up(page);
    }

    /// Half-viewport page down
    pub fn page_down(&mut self, total_height: usize) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_down(page, total_height);
    }

    /// Resume following the latest entry; applied at the next draw
    pub fn follow(&mut self) {
        self.follow_latest = true;
    }

    /// Snap to the bottom when following; called before each draw
    pub fn apply_follow(&mut self, total_height: usize) {
        if self.follow_latest {
            self.offset = self.max_offset(total_height);
        }
    }

    /// Check if the view is at the bottom of the content
    pub fn is_at_bottom(&self, total_height: usize) -> bool {
        self.offset >= self.max_offset(total_height)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
