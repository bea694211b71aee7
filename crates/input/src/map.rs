//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a command.
///
/// Gameplay keys are fixed: arrows move, rotate and soft drop, space hard
/// drops. Letter keys stand in for the start/pause/restart buttons.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Gameplay
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::HardDrop),

        // Control surface
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),

        _ => None,
    }
}

/// Whether an event of this kind should be mapped at all.
///
/// Releases are dropped; repeats count as presses.
pub fn accepts_kind(kind: KeyEventKind) -> bool {
    matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDrop)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::Rotate));
    }

    #[test]
    fn test_space_hard_drops() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::HardDrop)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Command::Start));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('N'))),
            Some(Command::Start)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::TogglePause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(Command::Restart)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
        // Ctrl+R must not restart.
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_repeat_counts_as_press() {
        assert!(accepts_kind(KeyEventKind::Press));
        assert!(accepts_kind(KeyEventKind::Repeat));
        assert!(!accepts_kind(KeyEventKind::Release));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
