//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
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

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Bind a printable character. Terminals disagree on whether shifted
    /// symbols carry SHIFT, so both forms are registered.
    fn bind_char(&mut self, c: char, action: KeyAction) {
        self.bind(KeyCode::Char(c), KeyModifiers::NONE, action);
        if !c.is_ascii_alphanumeric() {
            self.bind(KeyCode::Char(c), KeyModifiers::SHIFT, action);
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Layout
        keys.bind_char('m', KeyAction::ToggleMode);
        keys.bind_char('+', KeyAction::AddChild);
        keys.bind_char('a', KeyAction::AddChild);
        keys.bind_char('-', KeyAction::RemoveChild);
        keys.bind_char('x', KeyAction::RemoveChild);

        // Selection
        keys.bind_char(']', KeyAction::SelectNext);
        keys.bind_char('[', KeyAction::SelectPrev);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::ClearSelection);

        // Form navigation
        keys.bind_char('k', KeyAction::FieldUp);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::FieldUp);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::FieldUp);
        keys.bind_char('j', KeyAction::FieldDown);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::FieldDown);
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::FieldDown);
        keys.bind_char('h', KeyAction::ValuePrev);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::ValuePrev);
        keys.bind_char('l', KeyAction::ValueNext);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::ValueNext);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::BeginEdit);
        keys.bind_char('e', KeyAction::BeginEdit);

        // Viewport
        keys.bind_char('1', KeyAction::ViewportMobile);
        keys.bind_char('2', KeyAction::ViewportTablet);
        keys.bind_char('3', KeyAction::ViewportDesktop);

        // Output
        keys.bind_char('f', KeyAction::ToggleFormat);
        keys.bind_char('y', KeyAction::Copy);
        keys.bind_char('c', KeyAction::Copy);

        // Application controls
        keys.bind_char('?', KeyAction::Help);
        keys.bind_char('q', KeyAction::Quit);

        keys
    }
}
