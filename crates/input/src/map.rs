//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }

        // Tray selection
        KeyCode::Char('1') => Some(GameAction::SelectPiece(0)),
        KeyCode::Char('2') => Some(GameAction::SelectPiece(1)),
        KeyCode::Char('3') => Some(GameAction::SelectPiece(2)),
        KeyCode::Tab => Some(GameAction::NextPiece),
        KeyCode::BackTab => Some(GameAction::PrevPiece),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePreview),

        // Destructive: uppercase only
        KeyCode::Char('X') => Some(GameAction::ClearHighScore),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
