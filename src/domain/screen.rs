//! Screen and deck entities.

use serde::{Deserialize, Serialize};

/// Body of a screen as held by the rendering surface.
///
/// `Crawl` is the animated wrapper around the same informational lines that
/// `Text` shows at rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "lines", rename_all = "lowercase")]
pub enum ScreenContent {
    /// Resting content.
    Text(Vec<String>),
    /// Scrolling credits wrapper.
    Crawl(Vec<String>),
}

impl ScreenContent {
    /// Builds resting content from a multi-line string.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        Self::Text(body.lines().map(str::to_string).collect())
    }

    /// Returns the informational lines regardless of presentation.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Text(lines) | Self::Crawl(lines) => lines,
        }
    }

    /// Returns whether this is the animated wrapper.
    #[must_use]
    pub const fn is_crawl(&self) -> bool {
        matches!(self, Self::Crawl(_))
    }
}

impl Default for ScreenContent {
    fn default() -> Self {
        Self::Text(Vec::new())
    }
}

/// One addressable unit of presentation content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    index: usize,
    title: String,
    content: ScreenContent,
}

impl Screen {
    /// Creates a screen at the given position.
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>, content: ScreenContent) -> Self {
        Self {
            index,
            title: title.into(),
            content,
        }
    }

    /// Position in the deck.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Heading shown above the body.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resting body.
    #[must_use]
    pub const fn content(&self) -> &ScreenContent {
        &self.content
    }
}

/// Ordered, fixed set of screens defined at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    aside: Option<String>,
    input_screen: Option<usize>,
    screens: Vec<Screen>,
}

impl Deck {
    /// Creates a deck. Screen indices are reassigned to match their order.
    #[must_use]
    pub fn new(title: impl Into<String>, screens: Vec<Screen>) -> Self {
        let screens = screens
            .into_iter()
            .enumerate()
            .map(|(index, screen)| Screen { index, ..screen })
            .collect();

        Self {
            title: title.into(),
            aside: None,
            input_screen: None,
            screens,
        }
    }

    /// Sets the side panel text shown next to every screen.
    #[must_use]
    pub fn with_aside(mut self, aside: impl Into<String>) -> Self {
        self.aside = Some(aside.into());
        self
    }

    /// Designates the screen that captures a free-text response.
    #[must_use]
    pub const fn with_input_screen(mut self, index: Option<usize>) -> Self {
        self.input_screen = index;
        self
    }

    /// Deck title, shown in the header.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Side panel text.
    #[must_use]
    pub fn aside(&self) -> Option<&str> {
        self.aside.as_deref()
    }

    /// Index of the response screen.
    #[must_use]
    pub const fn input_screen(&self) -> Option<usize> {
        self.input_screen
    }

    /// Screens in display order.
    #[must_use]
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Number of screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Checks for a deck without screens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Index of the final (credits) screen.
    #[must_use]
    pub fn final_index(&self) -> Option<usize> {
        self.screens.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_splits_lines() {
        let content = ScreenContent::from_body("first\nsecond\n");
        assert_eq!(content.lines(), ["first", "second"]);
        assert!(!content.is_crawl());
    }

    #[test]
    fn test_deck_reindexes_screens() {
        let deck = Deck::new(
            "Deck",
            vec![
                Screen::new(7, "A", ScreenContent::default()),
                Screen::new(3, "B", ScreenContent::default()),
            ],
        );

        assert_eq!(deck.screens()[0].index(), 0);
        assert_eq!(deck.screens()[1].index(), 1);
        assert_eq!(deck.final_index(), Some(1));
    }

    #[test]
    fn test_empty_deck_has_no_final_screen() {
        let deck = Deck::new("Empty", Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.final_index(), None);
    }
}
