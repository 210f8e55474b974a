use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Maps key presses to actions.
///
/// Each action has one key shown in help; any number of keys may trigger it.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );

        register(
            Action::Next,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Next,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Next,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Next,
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Previous,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Previous,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Previous,
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            false,
        );
        register(
            Action::First,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            true,
        );
        register(
            Action::JumpToEnd,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            true,
        );
        register(
            Action::JumpToEnd,
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::Confirm,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            false,
        );
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            false,
        );
        register(
            Action::ToggleFullscreen,
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleFullscreen,
            KeyEvent::new(KeyCode::F(11), KeyModifiers::NONE),
            false,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    /// Registry with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bindings extended by user-configured ones.
    ///
    /// User bindings take precedence over defaults on the same key.
    /// Unparseable key strings are logged and skipped.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (key_str, action) in overrides {
            match parse_key(key_str) {
                Some(key) => registry.bind(key, *action),
                None => warn!(key = %key_str, "Ignoring unrecognized keybinding"),
            }
        }
        registry
    }

    /// Binds `key` to `action`, replacing whatever the key did before.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.input_bindings
            .retain(|(k, _)| !(k.code == key.code && k.modifiers == key.modifiers));
        self.input_bindings.insert(0, (key, action));
        self.display_bindings.insert(action, key);
    }

    /// Key shown for `action` in help.
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Action for a key press, matching code and modifiers.
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Bindings shown in the help dialog, in display order.
    pub fn help_bindings(&self) -> Vec<Keybind> {
        const ORDER: [Action; 8] = [
            Action::Previous,
            Action::Next,
            Action::First,
            Action::JumpToEnd,
            Action::Confirm,
            Action::ToggleFullscreen,
            Action::ToggleHelp,
            Action::Quit,
        ];

        ORDER
            .iter()
            .filter_map(|action| {
                self.get(*action)
                    .map(|key| Keybind::new(key, *action, action.label()))
            })
            .collect()
    }
}

/// Parses strings like `"Ctrl+n"`, `"Alt+Enter"`, `"F5"` or `"Right"`.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
    let key_part = parts.pop().filter(|p| !p.is_empty())?;

    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_uppercase() {
                    modifiers |= KeyModifiers::SHIFT;
                }
                KeyCode::Char(c)
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}
