use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// One-row bar filled to a percentage.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    percent: f64,
    style: Style,
}

impl ProgressBar {
    /// Values outside 0..=100 are clamped.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self {
            percent: if percent.is_nan() {
                0.0
            } else {
                percent.clamp(0.0, 100.0)
            },
            style: Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        }
    }

    /// Style of the filled part.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn filled_width(&self, width: u16) -> u16 {
        (f64::from(width) * self.percent / 100.0).round() as u16
    }
}

impl Widget for ProgressBar {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let filled = self.filled_width(area.width);
        let track = Style::default().fg(self.style.bg.unwrap_or(Color::DarkGray));
        let bar = Style::default().fg(self.style.fg.unwrap_or(Color::Yellow));

        for (i, x) in (area.left()..area.right()).enumerate() {
            let cell = &mut buf[(x, area.y)];
            if (i as u16) < filled {
                cell.set_char('█').set_style(bar);
            } else {
                cell.set_char('─').set_style(track);
            }
        }
    }
}
