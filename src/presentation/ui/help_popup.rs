use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::format_key;

const INTRO: &str = "Move between screens with the keyboard or by clicking the buttons.";

/// Centered dialog listing the key bindings.
pub struct HelpPopup<'a> {
    bindings: &'a [Keybind],
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    /// Creates the dialog.
    #[must_use]
    pub fn new(bindings: &'a [Keybind], theme: &'a Theme) -> Self {
        Self { bindings, theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let key_width = self
            .bindings
            .iter()
            .map(|b| format_key(&b.key).width())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from(INTRO), Line::from("")];
        lines.extend(self.bindings.iter().map(|binding| {
            let key = format_key(&binding.key);
            let pad = key_width.saturating_sub(key.width());
            Line::from(vec![
                Span::styled(format!(" {key}{} ", " ".repeat(pad)), self.theme.button_style),
                Span::raw(format!("  {}", binding.label)),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Esc or ? to close",
            self.theme.dimmed_style,
        ));
        lines
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();

        let width = 56.min(area.width.saturating_sub(2));
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.height);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(self.theme.accent));

        Clear.render(intersection, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::commands::CommandRegistry;

    #[test]
    fn test_lists_every_binding() {
        let theme = Theme::default();
        let bindings = CommandRegistry::new().help_bindings();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        HelpPopup::new(&bindings, &theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();

        assert!(text.contains("Help"));
        for binding in &bindings {
            assert!(text.contains(binding.label.as_ref()), "{}", binding.label);
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let bindings = CommandRegistry::new().help_bindings();
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);

        HelpPopup::new(&bindings, &theme).render(area, &mut buf);
    }
}
