//! Terminal rendition of the screen registry.

use std::time::Duration;

use ratatui::layout::Rect;

use crate::domain::ports::RenderSurface;
use crate::domain::screen::{Deck, ScreenContent};
use crate::presentation::widgets::{CrawlAnimation, NavButton, TextInput, hit_test_row};

/// Which optional elements a [`DeckSurface`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Carry a progress bar.
    pub show_progress: bool,
    /// Carry the aside panel.
    pub show_aside: bool,
    /// Play the crawl intro effect.
    pub animations: bool,
    /// Scroll length of the crawl.
    pub crawl_duration: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_aside: true,
            animations: true,
            crawl_duration: Duration::from_secs(220),
        }
    }
}

/// Button positions from the last frame, used for mouse hit testing.
#[derive(Debug, Default, Clone)]
pub(crate) struct ButtonLayout {
    pub(crate) header: Vec<(NavButton, Rect)>,
    pub(crate) footer: Vec<(NavButton, Rect)>,
}

/// Screen registry and chrome state as the terminal UI draws it.
pub struct DeckSurface {
    title: String,
    aside: Option<String>,
    titles: Vec<String>,
    contents: Vec<ScreenContent>,
    visible: Vec<bool>,
    chrome_hidden: bool,
    progress: Option<f64>,
    backward_enabled: bool,
    forward_enabled: bool,
    input_screen: Option<usize>,
    input: Option<TextInput>,
    confirmation: Option<String>,
    crawl: Option<CrawlAnimation>,
    options: SurfaceOptions,
    pub(crate) buttons: ButtonLayout,
}

impl DeckSurface {
    /// Creates a surface with every screen hidden.
    #[must_use]
    pub fn new(deck: &Deck, options: SurfaceOptions) -> Self {
        let screens = deck.screens();
        let input = deck.input_screen().map(|_| {
            TextInput::new(" Your idea ").placeholder("Type a response and press Enter")
        });

        Self {
            title: deck.title().to_string(),
            aside: deck.aside().filter(|_| options.show_aside).map(str::to_string),
            titles: screens.iter().map(|s| s.title().to_string()).collect(),
            contents: screens.iter().map(|s| s.content().clone()).collect(),
            visible: vec![false; screens.len()],
            chrome_hidden: false,
            progress: options.show_progress.then_some(0.0),
            backward_enabled: false,
            forward_enabled: false,
            input_screen: deck.input_screen(),
            input,
            confirmation: None,
            crawl: None,
            options,
            buttons: ButtonLayout::default(),
        }
    }

    /// Deck title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Aside text, if the surface carries one.
    #[must_use]
    pub fn aside(&self) -> Option<&str> {
        self.aside.as_deref()
    }

    /// Title of a screen.
    #[must_use]
    pub fn screen_title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// The screen on display; the lowest index if several are visible.
    #[must_use]
    pub fn visible_screen(&self) -> Option<usize> {
        self.visible.iter().position(|v| *v)
    }

    /// Whether the aside and footer are hidden.
    #[must_use]
    pub const fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    /// `None` when the progress bar is turned off.
    #[must_use]
    pub const fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Backward and forward button states.
    #[must_use]
    pub const fn navigation_enabled(&self) -> (bool, bool) {
        (self.backward_enabled, self.forward_enabled)
    }

    /// Screen holding the response field.
    #[must_use]
    pub const fn input_screen(&self) -> Option<usize> {
        self.input_screen
    }

    /// Response field.
    #[must_use]
    pub fn input(&self) -> Option<&TextInput> {
        self.input.as_ref()
    }

    /// Response field, for editing.
    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        self.input.as_mut()
    }

    /// Checks whether typed characters go to the response field.
    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.input.as_ref().is_some_and(TextInput::is_focused)
            && self.input_screen.is_some()
            && self.visible_screen() == self.input_screen
    }

    /// Confirmation of the last saved response.
    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Running crawl animation.
    pub fn crawl_mut(&mut self) -> Option<&mut CrawlAnimation> {
        self.crawl.as_mut()
    }

    /// Advances running animations.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(crawl) = self.crawl.as_mut() {
            crawl.tick(delta);
        }
    }

    /// Button under a mouse position in the last rendered frame.
    #[must_use]
    pub fn button_at(&self, column: u16, row: u16) -> Option<NavButton> {
        hit_test_row(&self.buttons.header, column, row)
            .or_else(|| hit_test_row(&self.buttons.footer, column, row))
    }

    /// Content and crawl animation of a screen, borrowed together for drawing.
    pub(crate) fn body_parts_mut(
        &mut self,
        index: usize,
    ) -> Option<(&ScreenContent, Option<&mut CrawlAnimation>)> {
        let content = self.contents.get(index)?;
        Some((content, self.crawl.as_mut()))
    }
}

impl RenderSurface for DeckSurface {
    fn screen_count(&self) -> usize {
        self.contents.len()
    }

    fn contains(&self, index: usize) -> bool {
        index < self.contents.len()
    }

    fn show(&mut self, index: usize) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = true;
        }
    }

    fn hide(&mut self, index: usize) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = false;
        }
        if Some(index) == self.input_screen
            && let Some(input) = self.input.as_mut()
        {
            input.set_focused(false);
        }
    }

    fn content(&self, index: usize) -> Option<&ScreenContent> {
        self.contents.get(index)
    }

    fn set_content(&mut self, index: usize, content: ScreenContent) {
        if !self.contains(index) {
            return;
        }
        self.crawl = content
            .is_crawl()
            .then(|| CrawlAnimation::new(self.options.crawl_duration, self.options.animations));
        self.contents[index] = content;
    }

    fn set_chrome_hidden(&mut self, hidden: bool) {
        self.chrome_hidden = hidden;
    }

    fn set_progress(&mut self, percent: f64) {
        if let Some(progress) = self.progress.as_mut() {
            *progress = percent;
        }
    }

    fn set_navigation_enabled(&mut self, backward: bool, forward: bool) {
        self.backward_enabled = backward;
        self.forward_enabled = forward;
    }

    fn focus_input(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.set_focused(true);
        }
    }

    fn clear_input(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.clear();
        }
    }

    fn set_confirmation(&mut self, message: &str) {
        self.confirmation = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::Screen;

    fn deck(len: usize, input_screen: Option<usize>) -> Deck {
        let screens = (0..len)
            .map(|i| {
                Screen::new(
                    i,
                    format!("Screen {i}"),
                    ScreenContent::Text(vec![format!("line {i}")]),
                )
            })
            .collect();
        Deck::new("Test", screens)
            .with_aside("Aside")
            .with_input_screen(input_screen)
    }

    #[test]
    fn test_show_and_hide() {
        let mut surface = DeckSurface::new(&deck(3, None), SurfaceOptions::default());
        assert_eq!(surface.visible_screen(), None);

        surface.show(2);
        assert_eq!(surface.visible_screen(), Some(2));

        surface.hide_all();
        assert_eq!(surface.visible_screen(), None);

        surface.show(7);
        assert_eq!(surface.visible_screen(), None);
        assert!(!surface.contains(3));
    }

    #[test]
    fn test_progress_absent_when_disabled() {
        let options = SurfaceOptions {
            show_progress: false,
            ..SurfaceOptions::default()
        };
        let mut surface = DeckSurface::new(&deck(3, None), options);

        surface.set_progress(50.0);
        assert_eq!(surface.progress(), None);
    }

    #[test]
    fn test_aside_follows_option() {
        let options = SurfaceOptions {
            show_aside: false,
            ..SurfaceOptions::default()
        };
        assert_eq!(DeckSurface::new(&deck(2, None), options).aside(), None);
        assert_eq!(
            DeckSurface::new(&deck(2, None), SurfaceOptions::default()).aside(),
            Some("Aside")
        );
    }

    #[test]
    fn test_input_operations_skip_without_input_screen() {
        let mut surface = DeckSurface::new(&deck(3, None), SurfaceOptions::default());
        surface.focus_input();
        surface.clear_input();
        assert!(surface.input().is_none());
        assert!(!surface.is_input_focused());
    }

    #[test]
    fn test_input_focus_follows_screen() {
        let mut surface = DeckSurface::new(&deck(3, Some(1)), SurfaceOptions::default());
        surface.show(1);
        surface.focus_input();
        assert!(surface.is_input_focused());

        surface.hide(1);
        surface.show(2);
        assert!(!surface.is_input_focused());
        assert!(surface.input().is_some_and(|i| !i.is_focused()));
    }

    #[test]
    fn test_crawl_content_starts_animation() {
        let mut surface = DeckSurface::new(&deck(3, None), SurfaceOptions::default());
        surface.set_content(2, ScreenContent::Crawl(vec!["REFERENCES".into()]));
        assert!(surface.crawl_mut().is_some());

        surface.tick(Duration::from_secs(1));
        assert_eq!(
            surface.crawl_mut().map(|c| c.elapsed()),
            Some(Duration::from_secs(1))
        );

        surface.set_content(2, ScreenContent::Text(vec!["REFERENCES".into()]));
        assert!(surface.crawl_mut().is_none());
    }

    #[test]
    fn test_confirmation_and_navigation_state() {
        let mut surface = DeckSurface::new(&deck(3, Some(1)), SurfaceOptions::default());
        surface.set_confirmation("saved");
        surface.set_navigation_enabled(true, false);

        assert_eq!(surface.confirmation(), Some("saved"));
        assert_eq!(surface.navigation_enabled(), (true, false));
    }
}
