//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move cursor up
    MoveUp,
    /// Move cursor down
    MoveDown,
    /// Enter a folder, or set an image as wallpaper
    Open,
    /// Go to the parent directory
    Back,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    // Plain keys only; Ctrl/Alt chords are not bound
    if !KeyModifiers::SHIFT.contains(key.modifiers) {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,

        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => KeyAction::Open,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => KeyAction::Back,

        _ => KeyAction::None,
    }
}
