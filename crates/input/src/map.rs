//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, ShapeKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Up => Some(GameAction::CursorUp),
        KeyCode::Down => Some(GameAction::CursorDown),
        KeyCode::Left => Some(GameAction::CursorLeft),
        KeyCode::Right => Some(GameAction::CursorRight),

        // Rotation
        KeyCode::Char('[') | KeyCode::Char(',') | KeyCode::Char('<') => {
            Some(GameAction::RotateLeft)
        }
        KeyCode::Char(']') | KeyCode::Char('.') | KeyCode::Char('>') => {
            Some(GameAction::RotateRight)
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewRound),

        // Shape selection by label
        KeyCode::Char(c) => ShapeKind::from_label(c).map(GameAction::Select),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
