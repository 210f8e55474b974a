//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Edit applied to the response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Typed character.
    Insert(char),
    /// Delete before the cursor.
    Backspace,
    /// Delete under the cursor.
    Delete,
    /// Home.
    CursorStart,
    /// End.
    CursorEnd,
}

/// Classifies raw terminal keys.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is the unconditional quit chord.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Key releases and repeats from terminals reporting them are dropped.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Maps a key to a text edit while the response field has focus.
    ///
    /// Arrow keys are not edits: they keep navigating between screens.
    #[must_use]
    pub fn text_edit(key: &KeyEvent) -> Option<TextEdit> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Some(TextEdit::Insert(c)),
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Home => Some(TextEdit::CursorStart),
            KeyCode::End => Some(TextEdit::CursorEnd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_event() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_text_edits() {
        assert_eq!(
            EventHandler::text_edit(&make_key_event(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TextEdit::Insert('q'))
        );
        assert_eq!(
            EventHandler::text_edit(&make_key_event(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(TextEdit::Insert('Q'))
        );
        assert_eq!(
            EventHandler::text_edit(&make_key_event(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(TextEdit::Backspace)
        );
        assert_eq!(
            EventHandler::text_edit(&make_key_event(KeyCode::Right, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            EventHandler::text_edit(&make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_is_not_press() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!EventHandler::is_press(&release));
    }
}
