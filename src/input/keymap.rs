//! Keymap
//!
//! Normalizes terminal key events into navigation tokens.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Discrete input understood by the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    /// A lower-case ASCII letter or a digit.
    Char(char),
    Backspace,
    Escape,
}

impl InputToken {
    /// Build a character token, normalizing case. Anything that is not an
    /// ASCII letter or digit is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        is_bindable_key(c).then_some(Self::Char(c))
    }
}

/// Keys a binding can be attached to: lower-case ASCII letters and digits.
pub fn is_bindable_key(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Map a key event to a token. Releases, repeats, chords with Ctrl/Alt and
/// every other key are ignored.
pub fn token_for_key(key: KeyEvent) -> Option<InputToken> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(InputToken::Escape),
        (KeyCode::Backspace, _) => Some(InputToken::Backspace),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => InputToken::from_char(c),
        _ => None,
    }
}
