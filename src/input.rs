//! Input controller: raw terminal events to game actions

use crate::game::Action;
use crate::keyboard::{KeyCap, key_at};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Game(Action),
    Quit,
}

/// Map a key press to an input
///
/// Letters are case-insensitive. Control chords drive the round buttons so
/// that every letter stays typeable.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Input> {
    // Only presses count (fixes Windows double-input)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(Input::Quit),
            KeyCode::Char('n') => Some(Input::Game(Action::NewWord)),
            KeyCode::Char('r') => Some(Input::Game(Action::Reset)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Input::Quit),
        KeyCode::Enter => Some(Input::Game(Action::Submit)),
        KeyCode::Backspace | KeyCode::Delete => Some(Input::Game(Action::Delete)),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(Input::Game(Action::Letter(c.to_ascii_lowercase())))
        }
        _ => None,
    }
}

/// Map a left click on the on-screen keyboard to an input
#[must_use]
pub fn map_mouse(mouse: MouseEvent, caps: &[KeyCap]) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            key_at(caps, mouse.column, mouse.row).map(Input::Game)
        }
        _ => None,
    }
}
