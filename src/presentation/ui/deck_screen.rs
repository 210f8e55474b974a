//! Full-frame layout of a single screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::ports::RenderSurface;
use crate::domain::screen::ScreenContent;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CrawlView, NavBar, NavBarStyle, NavButton, ProgressBar, StatusBar, button_row,
    render_buttons,
};

use super::deck_surface::DeckSurface;

const ASIDE_WIDTH: u16 = 32;
const INPUT_HEIGHT: u16 = 3;

/// Draws a [`DeckSurface`] and records where its buttons landed.
pub struct DeckScreen<'a> {
    theme: &'a Theme,
    presenting: bool,
    announcement: Option<&'a str>,
}

impl<'a> DeckScreen<'a> {
    /// Creates the widget.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            presenting: false,
            announcement: None,
        }
    }

    /// Drops the header and its buttons.
    #[must_use]
    pub const fn presenting(mut self, presenting: bool) -> Self {
        self.presenting = presenting;
        self
    }

    /// Message for the status line.
    #[must_use]
    pub const fn announcement(mut self, announcement: Option<&'a str>) -> Self {
        self.announcement = announcement;
        self
    }
}

impl StatefulWidget for DeckScreen<'_> {
    type State = DeckSurface;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let show_chrome = !state.chrome_hidden();
        let header_height = u16::from(!self.presenting);
        let progress_height = u16::from(show_chrome && state.progress().is_some());
        let nav_height = u16::from(show_chrome);

        let [header_area, body_area, progress_area, nav_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Fill(1),
            Constraint::Length(progress_height),
            Constraint::Length(nav_height),
            Constraint::Length(1),
        ])
        .areas(area);

        state.buttons.header = if self.presenting {
            Vec::new()
        } else {
            render_header(self.theme, state, header_area, buf)
        };

        render_body(self.theme, state, body_area, buf);

        if let Some(percent) = state.progress().filter(|_| show_chrome) {
            ProgressBar::new(percent)
                .style(self.theme.progress_style)
                .render(progress_area, buf);
        }

        state.buttons.footer = if show_chrome {
            let (backward, forward) = state.navigation_enabled();
            NavBar::new(backward, forward)
                .hint(Some("? help"))
                .style(NavBarStyle::from_theme(self.theme))
                .render(nav_area, buf);
            NavBar::button_areas(nav_area)
        } else {
            Vec::new()
        };

        render_status(self.announcement, state, status_area, buf);
    }
}

fn render_header(
    theme: &Theme,
    state: &DeckSurface,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<(NavButton, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }

    let buttons = button_row(area, &NavButton::HEADER, true);
    let title_width = buttons.first().map_or(area.width, |(_, r)| r.x - area.x);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", state.title()), theme.heading_style),
        Span::styled(
            state
                .visible_screen()
                .and_then(|i| state.screen_title(i))
                .map(|t| format!(" {t}"))
                .unwrap_or_default(),
            theme.dimmed_style,
        ),
    ]);
    Paragraph::new(title).render(Rect::new(area.x, area.y, title_width, 1), buf);

    render_buttons(&buttons, theme.button_style, buf);
    buttons
}

fn render_body(theme: &Theme, state: &mut DeckSurface, area: Rect, buf: &mut Buffer) {
    let aside = state
        .aside()
        .filter(|_| !state.chrome_hidden())
        .map(str::to_string);
    let aside_width = if aside.is_some() { ASIDE_WIDTH } else { 0 };

    let [slide_area, aside_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(aside_width)]).areas(area);

    if let Some(aside) = aside {
        Paragraph::new(aside)
            .wrap(Wrap { trim: false })
            .style(theme.dimmed_style)
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(theme.border_style),
            )
            .render(aside_area, buf);
    }

    let Some(index) = state.visible_screen() else {
        return;
    };

    let title = state.screen_title(index).unwrap_or_default().to_string();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .title(Span::styled(format!(" {title} "), theme.heading_style));
    let inner = block.inner(slide_area);
    block.render(slide_area, buf);

    let on_input_screen = state.input_screen() == Some(index) && state.input().is_some();
    let [text_area, confirmation_area, input_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(u16::from(on_input_screen && state.confirmation().is_some())),
        Constraint::Length(if on_input_screen { INPUT_HEIGHT } else { 0 }),
    ])
    .areas(inner);

    if on_input_screen {
        if let Some(message) = state.confirmation() {
            Paragraph::new(Span::styled(message.to_string(), theme.heading_style))
                .render(confirmation_area, buf);
        }
        if let Some(input) = state.input() {
            input.render(input_area, buf);
        }
    }

    let Some((content, crawl)) = state.body_parts_mut(index) else {
        return;
    };
    match (content, crawl) {
        (ScreenContent::Crawl(lines), Some(animation)) => {
            CrawlView::new(lines, animation)
                .style(theme.heading_style)
                .render(text_area, buf);
        }
        (content, _) => {
            let lines: Vec<Line> = content
                .lines()
                .iter()
                .map(|l| Line::styled(l.as_str(), theme.body_style))
                .collect();
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(text_area, buf);
        }
    }
}

fn render_status(announcement: Option<&str>, state: &DeckSurface, area: Rect, buf: &mut Buffer) {
    let position = state
        .visible_screen()
        .map(|i| format!("{}/{}", i + 1, state.screen_count()))
        .unwrap_or_default();

    let status = match announcement {
        Some(message) => StatusBar::info(message),
        None => StatusBar::new(),
    }
    .right(position);

    (&status).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::{Deck, Screen};
    use crate::presentation::ui::deck_surface::SurfaceOptions;

    fn surface(input_screen: Option<usize>) -> DeckSurface {
        let screens = vec![
            Screen::new(0, "Welcome", ScreenContent::Text(vec!["Hello there".into()])),
            Screen::new(1, "Ideas", ScreenContent::Text(vec!["Share one".into()])),
            Screen::new(2, "References", ScreenContent::Text(vec!["REFERENCES".into()])),
        ];
        let deck = Deck::new("Mission", screens)
            .with_aside("Side notes")
            .with_input_screen(input_screen);
        DeckSurface::new(&deck, SurfaceOptions::default())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(state: &mut DeckSurface, presenting: bool) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        DeckScreen::new(&theme)
            .presenting(presenting)
            .announcement(Some("Screen 1"))
            .render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_renders_visible_screen_with_chrome() {
        let mut state = surface(None);
        state.show(0);
        state.set_navigation_enabled(false, true);

        let text = buffer_text(&render(&mut state, false));

        assert!(text.contains("Mission"));
        assert!(text.contains("Hello there"));
        assert!(text.contains("Side notes"));
        assert!(text.contains("Next >"));
        assert!(text.contains("Present"));
        assert!(text.contains("Screen 1"));
        assert!(text.contains("1/3"));
        assert!(!state.buttons.footer.is_empty());
        assert_eq!(state.buttons.header.len(), 2);
    }

    #[test]
    fn test_presenting_drops_header() {
        let mut state = surface(None);
        state.show(0);

        let text = buffer_text(&render(&mut state, true));

        assert!(!text.contains("Present"));
        assert!(state.buttons.header.is_empty());
        assert!(text.contains("Hello there"));
    }

    #[test]
    fn test_hidden_chrome_drops_aside_and_footer() {
        let mut state = surface(None);
        state.show(2);
        state.set_chrome_hidden(true);

        let text = buffer_text(&render(&mut state, false));

        assert!(!text.contains("Side notes"));
        assert!(!text.contains("Next >"));
        assert!(state.buttons.footer.is_empty());
        assert!(state.button_at(22, 18).is_none());
    }

    #[test]
    fn test_input_screen_shows_field_and_confirmation() {
        let mut state = surface(Some(1));
        state.show(1);
        state.set_confirmation("Idea saved");

        let text = buffer_text(&render(&mut state, false));

        assert!(text.contains("Your idea"));
        assert!(text.contains("Idea saved"));
    }

    #[test]
    fn test_footer_buttons_are_clickable_after_render() {
        let mut state = surface(None);
        state.show(1);
        state.set_navigation_enabled(true, true);
        render(&mut state, false);

        let (button, rect) = state.buttons.footer[2];
        assert_eq!(button, NavButton::Next);
        assert_eq!(state.button_at(rect.x, rect.y), Some(NavButton::Next));
    }
}
