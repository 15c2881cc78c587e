//! Key bindings from terminal key codes to player controls.

use crate::types::{Control, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the player and control it drives.
///
/// Player 1 uses `A`/`D`/`S`/`W` (+ `Q` counter-clockwise), player 2 the
/// arrow keys (+ `/` counter-clockwise). Letters match in either case.
pub fn binding(code: KeyCode) -> Option<(Player, Control)> {
    match code {
        // Player 1
        KeyCode::Char('a') | KeyCode::Char('A') => Some((Player::One, Control::Left)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some((Player::One, Control::Right)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some((Player::One, Control::Down)),
        KeyCode::Char('w') | KeyCode::Char('W') => Some((Player::One, Control::RotateCw)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some((Player::One, Control::RotateCcw)),

        // Player 2
        KeyCode::Left => Some((Player::Two, Control::Left)),
        KeyCode::Right => Some((Player::Two, Control::Right)),
        KeyCode::Down => Some((Player::Two, Control::Down)),
        KeyCode::Up => Some((Player::Two, Control::RotateCw)),
        KeyCode::Char('/') => Some((Player::Two, Control::RotateCcw)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
