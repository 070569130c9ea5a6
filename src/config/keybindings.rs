//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// All bindings, sorted for display in the help overlay.
    pub fn describe(&self) -> Vec<(String, KeyAction)> {
        let mut described: Vec<(String, KeyAction)> = self
            .bindings
            .iter()
            .map(|(key, action)| (describe_key(key), *action))
            .collect();
        described.sort_by(|a, b| a.0.cmp(&b.0));
        described
    }
}

fn describe_key(key: &KeyEvent) -> String {
    use crossterm::event::{KeyCode, KeyModifiers};

    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "Home".to_string(),
        other => format!("{other:?}"),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Panel toggle
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::ToggleReasoning,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleReasoning,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            KeyAction::ToggleReasoning,
        );

        // Vim-style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );

        // Arrow key scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn default_bindings_map_toggle_keys() {
        let bindings = KeyBindings::default();

        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('t')] {
            assert_eq!(
                bindings.get(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(KeyAction::ToggleReasoning),
                "{code:?} should toggle the reasoning panel"
            );
        }
    }

    #[test]
    fn default_bindings_map_q_to_quit() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), Some(KeyAction::Quit));
    }

    #[test]
    fn unknown_key_has_no_action() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), None);
    }

    #[test]
    fn describe_lists_every_binding_sorted() {
        let bindings = KeyBindings::default();
        let described = bindings.describe();

        assert_eq!(described.len(), 12);
        let keys: Vec<&str> = described.iter().map(|(k, _)| k.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"Ctrl+c"));
        assert!(keys.contains(&"Space"));
    }
}
