//! Deck loading error types.

use thiserror::Error;

/// Deck loading error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck definition: {message}")]
    Parse { message: String },

    #[error("deck contains no screens")]
    Empty,

    #[error("input screen {index} is out of range for a deck of {len} screens")]
    InputScreenOutOfRange { index: usize, len: usize },
}

impl DeckError {
    /// Creates parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Returns whether the built-in deck is a sensible fallback.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DeckError::InputScreenOutOfRange { index: 12, len: 11 };
        assert_eq!(
            err.to_string(),
            "input screen 12 is out of range for a deck of 11 screens"
        );
        assert_eq!(DeckError::Empty.to_string(), "deck contains no screens");
    }

    #[test]
    fn test_recoverable() {
        assert!(DeckError::parse("bad").is_recoverable());
        assert!(!DeckError::Empty.is_recoverable());
    }
}
