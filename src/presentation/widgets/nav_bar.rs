use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Clickable buttons in the header and footer of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    /// Jump to the first screen.
    First,
    /// Previous screen.
    Previous,
    /// Next screen.
    Next,
    /// Jump to the final screen.
    JumpToEnd,
    /// Open help.
    Help,
    /// Enter presentation mode.
    Present,
}

impl NavButton {
    /// Buttons along the bottom, left to right.
    pub const FOOTER: [Self; 4] = [Self::First, Self::Previous, Self::Next, Self::JumpToEnd];
    /// Buttons at the right of the header.
    pub const HEADER: [Self; 2] = [Self::Help, Self::Present];

    /// Text drawn on the button.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::First => "|< Start",
            Self::Previous => "< Prev",
            Self::Next => "Next >",
            Self::JumpToEnd => "End >|",
            Self::Help => "? Help",
            Self::Present => "Present",
        }
    }

    const fn width(self) -> u16 {
        // caption plus one space of padding each side
        self.caption().len() as u16 + 2
    }

    const fn is_backward(self) -> bool {
        matches!(self, Self::First | Self::Previous)
    }
}

/// Colors of the navigation bar.
pub struct NavBarStyle {
    /// Bar background.
    pub background: Style,
    /// Enabled button.
    pub button: Style,
    /// Disabled button.
    pub disabled: Style,
    /// Hint text at the right.
    pub hint: Style,
}

impl NavBarStyle {
    /// Derives the colors from the theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            button: theme.button_style,
            disabled: theme.disabled_style,
            hint: theme.dimmed_style,
            ..Self::default()
        }
    }
}

impl Default for NavBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Footer with the four navigation buttons and a hint.
pub struct NavBar<'a> {
    backward_enabled: bool,
    forward_enabled: bool,
    hint: Option<&'a str>,
    style: NavBarStyle,
}

impl<'a> NavBar<'a> {
    /// Creates a bar; disabled buttons are drawn dimmed.
    #[must_use]
    pub fn new(backward_enabled: bool, forward_enabled: bool) -> Self {
        Self {
            backward_enabled,
            forward_enabled,
            hint: None,
            style: NavBarStyle::default(),
        }
    }

    /// Text shown right-aligned after the buttons.
    #[must_use]
    pub const fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    /// Overrides the colors.
    #[must_use]
    pub const fn style(mut self, style: NavBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Screen positions of the footer buttons within `area`.
    #[must_use]
    pub fn button_areas(area: Rect) -> Vec<(NavButton, Rect)> {
        button_row(area, &NavButton::FOOTER, false)
    }

    /// Footer button under a mouse position, if any.
    #[must_use]
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<NavButton> {
        hit_test_row(&Self::button_areas(area), column, row)
    }

    fn is_enabled(&self, button: NavButton) -> bool {
        match button {
            NavButton::Help | NavButton::Present => true,
            b if b.is_backward() => self.backward_enabled,
            _ => self.forward_enabled,
        }
    }
}

/// Lays out `buttons` on the first row of `area`, one cell apart, packed to
/// the left or to the right edge. Buttons that do not fit are dropped.
#[must_use]
pub fn button_row(area: Rect, buttons: &[NavButton], align_right: bool) -> Vec<(NavButton, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }

    let total: u16 = buttons
        .iter()
        .map(|b| b.width() + 1)
        .sum::<u16>()
        .saturating_sub(1);
    let mut x = if align_right {
        area.right().saturating_sub(total).max(area.x)
    } else {
        area.x
    };

    let mut areas = Vec::with_capacity(buttons.len());
    for &button in buttons {
        if x.saturating_add(button.width()) > area.right() {
            break;
        }
        areas.push((button, Rect::new(x, area.y, button.width(), 1)));
        x = x.saturating_add(button.width() + 1);
    }
    areas
}

/// Button in a laid-out row under a mouse position, if any.
#[must_use]
pub fn hit_test_row(areas: &[(NavButton, Rect)], column: u16, row: u16) -> Option<NavButton> {
    areas
        .iter()
        .find(|(_, rect)| row == rect.y && column >= rect.x && column < rect.right())
        .map(|(button, _)| *button)
}

/// Renders a laid-out row of always-enabled buttons.
pub fn render_buttons(areas: &[(NavButton, Rect)], style: Style, buf: &mut Buffer) {
    for (button, rect) in areas {
        Paragraph::new(Span::styled(format!(" {} ", button.caption()), style)).render(*rect, buf);
    }
}

/// Short display form of a key, as shown in hints and help.
#[must_use]
pub fn format_key(key: &KeyEvent) -> String {
    use std::fmt::Write;
    let mut s = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        s.push_str("A-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        s.push_str("S-");
    }

    match key.code {
        KeyCode::Char(' ') => s.push_str("Space"),
        KeyCode::Char(c) => s.push(c),
        KeyCode::Enter => s.push_str("Enter"),
        KeyCode::Esc => s.push_str("Esc"),
        KeyCode::Tab => s.push_str("Tab"),
        KeyCode::Backspace => s.push_str("Bksp"),
        KeyCode::Up => s.push('↑'),
        KeyCode::Down => s.push('↓'),
        KeyCode::Left => s.push('←'),
        KeyCode::Right => s.push('→'),
        KeyCode::PageUp => s.push_str("PgUp"),
        KeyCode::PageDown => s.push_str("PgDn"),
        KeyCode::F(n) => {
            let _ = write!(s, "F{n}");
        }
        _ => {
            let _ = write!(s, "{:?}", key.code);
        }
    }
    s
}

impl Widget for NavBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        for (button, rect) in Self::button_areas(area) {
            let style = if self.is_enabled(button) {
                self.style.button
            } else {
                self.style.disabled
            };
            Paragraph::new(Span::styled(format!(" {} ", button.caption()), style))
                .render(rect, buf);
        }

        if let Some(hint) = self.hint {
            let hint_width = hint.len() as u16;
            let buttons_end = Self::button_areas(area)
                .last()
                .map_or(area.x, |(_, r)| r.right());
            if hint_width < area.width && area.right().saturating_sub(hint_width) > buttons_end {
                let hint_area = Rect::new(
                    area.right().saturating_sub(hint_width),
                    area.y,
                    hint_width,
                    1,
                );
                Paragraph::new(Line::from(Span::styled(hint, self.style.hint)))
                    .render(hint_area, buf);
            }
        }
    }
}
