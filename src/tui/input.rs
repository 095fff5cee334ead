//! Key bindings for the word entry screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a character to the entry field.
    Type(char),
    /// Delete the last character of the entry field.
    Erase,
    /// Submit the entry field.
    Submit,
    /// Draw a new root word.
    NewGame,
    /// Close the open alert.
    Dismiss,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action.
///
/// While an alert is open only dismissing, starting over and quitting work.
pub fn action_for(key: KeyEvent, alert_open: bool) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (key.code, alert_open) {
        (KeyCode::Char('c'), _) if ctrl => Some(InputAction::Quit),
        (KeyCode::Char('n'), _) if ctrl => Some(InputAction::NewGame),
        (KeyCode::Esc | KeyCode::Enter, true) => Some(InputAction::Dismiss),
        (_, true) => None,
        (KeyCode::Esc, false) => Some(InputAction::Quit),
        (KeyCode::Enter, false) => Some(InputAction::Submit),
        (KeyCode::Backspace, false) => Some(InputAction::Erase),
        (KeyCode::Char(c), false) if !ctrl => Some(InputAction::Type(c)),
        _ => None,
    }
}
