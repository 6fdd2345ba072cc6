//! Key handling for the TUI
//!
//! The panel has a single always-focused input field, so the mapping is
//! modeless: printable keys edit, Enter submits, Esc or Ctrl+C quits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the current question field content
    Submit,
    /// Quit the application
    Quit,
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor
    DeleteChar,
    /// Move the cursor one character left
    CursorLeft,
    /// Move the cursor one character right
    CursorRight,
    /// Move the cursor to the start of the field
    CursorHome,
    /// Move the cursor to the end of the field
    CursorEnd,
    /// No action
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, _) => KeyAction::Quit,
        (KeyCode::Enter, _) => KeyAction::Submit,
        (KeyCode::Backspace, _) => KeyAction::DeleteChar,
        (KeyCode::Left, _) => KeyAction::CursorLeft,
        (KeyCode::Right, _) => KeyAction::CursorRight,
        (KeyCode::Home, _) => KeyAction::CursorHome,
        (KeyCode::End, _) => KeyAction::CursorEnd,
        (KeyCode::Char(c), _) => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(handle_key_event(key(KeyCode::Enter)), KeyAction::Submit);
    }

    #[test]
    fn test_esc_quits() {
        assert_eq!(handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(event), KeyAction::Quit);
    }

    #[test]
    fn test_plain_c_inserts() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'))),
            KeyAction::InsertChar('c')
        );
    }

    #[test]
    fn test_shifted_char_inserts_uppercase() {
        let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(event), KeyAction::InsertChar('Q'));
    }

    #[test]
    fn test_backspace_deletes() {
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace)),
            KeyAction::DeleteChar
        );
    }

    #[test]
    fn test_cursor_movement() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), KeyAction::CursorLeft);
        assert_eq!(handle_key_event(key(KeyCode::Right)), KeyAction::CursorRight);
        assert_eq!(handle_key_event(key(KeyCode::Home)), KeyAction::CursorHome);
        assert_eq!(handle_key_event(key(KeyCode::End)), KeyAction::CursorEnd);
    }

    #[test]
    fn test_unmapped_key_does_nothing() {
        assert_eq!(handle_key_event(key(KeyCode::F(5))), KeyAction::None);
    }
}
