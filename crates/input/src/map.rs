//! Key mapping from terminal events to demo actions.

use crate::types::Vector2i;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    /// Launch a burst at the cursor.
    Burst,
    /// Launch a burst somewhere random.
    RandomBurst,
    /// Move the launch cursor, in simulation space (Y up).
    MoveCursor(Vector2i),
    /// Stop every running emitter.
    Clear,
}

/// Map keyboard input to demo actions.
pub fn handle_key_event(key: KeyEvent) -> Option<DemoAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(DemoAction::MoveCursor(Vector2i::new(-1, 0)))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(DemoAction::MoveCursor(Vector2i::new(1, 0)))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(DemoAction::MoveCursor(Vector2i::new(0, 1)))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(DemoAction::MoveCursor(Vector2i::new(0, -1)))
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(DemoAction::Burst),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(DemoAction::RandomBurst),
        KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(DemoAction::Clear)
        }

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys_use_simulation_axes() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(DemoAction::MoveCursor(Vector2i::new(0, 1)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(DemoAction::MoveCursor(Vector2i::new(0, -1)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(DemoAction::MoveCursor(Vector2i::new(-1, 0)))
        );
    }

    #[test]
    fn test_action_keys() {
        let press = |ch| handle_key_event(KeyEvent::from(KeyCode::Char(ch)));
        assert_eq!(press(' '), Some(DemoAction::Burst));
        assert_eq!(press('r'), Some(DemoAction::RandomBurst));
        assert_eq!(press('c'), Some(DemoAction::Clear));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(press('x'), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
