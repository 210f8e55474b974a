//! Deck definitions on disk.
//!
//! A deck is a TOML file with a title, an optional aside shown next to every
//! screen, an optional input-screen index and an ordered `[[screens]]` list.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::errors::DeckError;
use crate::domain::screen::{Deck, Screen, ScreenContent};

/// Input screen used when a deck long enough does not name one.
pub const DEFAULT_INPUT_SCREEN: usize = 8;

const BUILTIN_DECK: &str = include_str!("../../assets/default_deck.toml");

#[derive(Debug, Deserialize)]
struct DeckFile {
    title: String,
    #[serde(default)]
    aside: Option<String>,
    #[serde(default)]
    input_screen: Option<usize>,
    #[serde(default)]
    screens: Vec<ScreenFile>,
}

#[derive(Debug, Deserialize)]
struct ScreenFile {
    title: String,
    #[serde(default)]
    body: String,
}

/// Builds a [`Deck`] from TOML, or from the deck compiled into the binary.
pub struct DeckLoader;

impl DeckLoader {
    /// Reads and validates a deck file.
    ///
    /// # Errors
    /// Returns `DeckError` if the file cannot be read or is not a valid deck.
    pub fn load(path: &Path) -> Result<Deck, DeckError> {
        let content = fs::read_to_string(path)?;
        let deck = Self::parse(&content)?;
        info!(path = %path.display(), screens = deck.len(), "Deck loaded");
        Ok(deck)
    }

    /// The deck shipped with the binary.
    ///
    /// # Errors
    /// Returns `DeckError` if the embedded deck is invalid.
    pub fn builtin() -> Result<Deck, DeckError> {
        Self::parse(BUILTIN_DECK)
    }

    /// Loads `path` if given, falling back to the built-in deck when the
    /// file is unreadable or malformed.
    ///
    /// # Errors
    /// Returns `DeckError` for decks that parse but are unusable.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Deck, DeckError> {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(deck) => Ok(deck),
            Err(e) if e.is_recoverable() => {
                warn!(path = %path.display(), error = %e, "Falling back to built-in deck");
                Self::builtin()
            }
            Err(e) => Err(e),
        }
    }

    /// Parses deck TOML.
    ///
    /// # Errors
    /// Returns `DeckError` on malformed TOML, an empty deck or an
    /// out-of-range input screen.
    pub fn parse(content: &str) -> Result<Deck, DeckError> {
        let file: DeckFile =
            toml::from_str(content).map_err(|e| DeckError::parse(e.to_string()))?;

        if file.screens.is_empty() {
            return Err(DeckError::Empty);
        }

        let len = file.screens.len();
        let input_screen = match file.input_screen {
            Some(index) if index >= len => {
                return Err(DeckError::InputScreenOutOfRange { index, len });
            }
            Some(index) => Some(index),
            None => (len > DEFAULT_INPUT_SCREEN).then_some(DEFAULT_INPUT_SCREEN),
        };

        let screens = file
            .screens
            .into_iter()
            .enumerate()
            .map(|(index, screen)| {
                Screen::new(index, screen.title, ScreenContent::from_body(&screen.body))
            })
            .collect();

        let mut deck = Deck::new(file.title, screens).with_input_screen(input_screen);
        if let Some(aside) = file.aside.filter(|a| !a.trim().is_empty()) {
            deck = deck.with_aside(aside.trim_end());
        }
        Ok(deck)
    }
}
