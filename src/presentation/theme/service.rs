use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles derived from one accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color everything else derives from.
    pub accent: Color,
    /// Deck and screen titles.
    pub heading_style: Style,
    /// Screen text.
    pub body_style: Style,
    /// Aside and secondary text.
    pub dimmed_style: Style,
    /// Buttons that do nothing at the current position.
    pub disabled_style: Style,
    /// Enabled buttons.
    pub button_style: Style,
    /// Frames.
    pub border_style: Style,
    /// Filled part of the progress bar.
    pub progress_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#ffe86c")
    }
}

impl Theme {
    /// Parses the accent; unknown names fall back to yellow.
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Derives every style from `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let button_bg = ColorConverter::shade(accent, 0.18, 0.45);
        let border = ColorConverter::shade(accent, 0.45, 0.35);
        let track = ColorConverter::shade(accent, 0.1, 0.3);
        let disabled_bg = ColorConverter::shade(accent, 0.08, 0.5);

        Self {
            accent,
            heading_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            body_style: Style::default().fg(Color::Reset),
            dimmed_style: Style::default().fg(Color::DarkGray),
            disabled_style: Style::default().bg(disabled_bg).fg(Color::DarkGray),
            button_style: Style::default()
                .bg(button_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(border),
            progress_style: Style::default().fg(accent).bg(track),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "gold" => Color::Rgb(255, 232, 108),
        _ => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#ffe86c"), Color::Rgb(255, 232, 108));
        assert_eq!(parse_color("Gold"), Color::Rgb(255, 232, 108));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }

    #[test]
    fn test_theme_uses_accent() {
        let theme = Theme::new("Cyan");
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.heading_style.fg, Some(Color::Cyan));
        assert_eq!(theme.progress_style.fg, Some(Color::Cyan));
        assert_eq!(theme.disabled_style.fg, Some(Color::DarkGray));
        assert!(matches!(theme.disabled_style.bg, Some(Color::Rgb(..))));
    }
}
