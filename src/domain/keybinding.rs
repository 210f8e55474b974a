//! User-triggerable actions and their key bindings.

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Something a key press or button click can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Open or close the key binding dialog.
    ToggleHelp,
    /// Enter or leave presentation mode.
    ToggleFullscreen,

    // Navigation
    /// Next screen.
    Next,
    /// Previous screen.
    Previous,
    /// First screen.
    First,
    /// Final screen.
    JumpToEnd,

    // Input
    /// Enter: start the deck, or save a response on the input screen.
    Confirm,
    /// Esc: close dialogs or leave presentation mode.
    Cancel,
}

impl Action {
    /// Short label used in the help dialog.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleHelp => "Help",
            Self::ToggleFullscreen => "Present",
            Self::Next => "Next",
            Self::Previous => "Prev",
            Self::First => "First",
            Self::JumpToEnd => "End",
            Self::Confirm => "Enter",
            Self::Cancel => "Cancel",
        }
    }
}

/// A key bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key that triggers the action.
    pub key: KeyEvent,
    /// Action triggered.
    pub action: Action,
    /// Help dialog label.
    pub label: Cow<'static, str>,
}

impl Keybind {
    /// Creates a binding.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
