//! Key mapping from terminal events to game commands.

use crate::types::{Direction, KeyCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command. Unrecognised keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if should_quit(key) {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        // Steering: arrows, WASD, vi keys
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyCommand::Steer(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyCommand::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyCommand::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyCommand::Steer(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn steer(code: KeyCode) -> Option<KeyCommand> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(steer(KeyCode::Up), Some(KeyCommand::Steer(Direction::Up)));
        assert_eq!(steer(KeyCode::Down), Some(KeyCommand::Steer(Direction::Down)));
        assert_eq!(steer(KeyCode::Left), Some(KeyCommand::Steer(Direction::Left)));
        assert_eq!(steer(KeyCode::Right), Some(KeyCommand::Steer(Direction::Right)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(steer(KeyCode::Char('W')), Some(KeyCommand::Steer(Direction::Up)));
        assert_eq!(steer(KeyCode::Char('a')), Some(KeyCommand::Steer(Direction::Left)));
        assert_eq!(steer(KeyCode::Char('j')), Some(KeyCommand::Steer(Direction::Down)));
        assert_eq!(steer(KeyCode::Char('L')), Some(KeyCommand::Steer(Direction::Right)));
        assert_eq!(steer(KeyCode::Char('r')), Some(KeyCommand::Restart));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(steer(KeyCode::Char('Q')), Some(KeyCommand::Quit));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(steer(KeyCode::Char('x')), None);
        assert_eq!(steer(KeyCode::Char(' ')), None);
        assert_eq!(steer(KeyCode::Enter), None);
        assert_eq!(steer(KeyCode::F(1)), None);
    }
}
