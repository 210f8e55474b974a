//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// One-line bar with a message on the left and a note on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
        }
    }

    /// Sets the message on the left.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets the note on the right.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Creates a status bar carrying an announcement.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().left(message)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let left_len = self.left.width();
        let right_len = self.right.width();

        let mut spans = vec![Span::styled(&self.left, style)];

        let padding = width.saturating_sub(left_len + right_len);
        if !self.right.is_empty() && padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(&self.right, Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
