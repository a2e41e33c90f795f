use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Input};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Input),
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Game(Input::Exit);
        }

        let input = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Input::Turn(Direction::Up),
            KeyCode::Down => Input::Turn(Direction::Down),
            KeyCode::Left => Input::Turn(Direction::Left),
            KeyCode::Right => Input::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Input::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Input::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Input::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Input::Turn(Direction::Right),

            // Modes
            KeyCode::Tab => Input::ToggleDebug,
            KeyCode::Char('p') | KeyCode::Char('P') => Input::ToggleAutopilot,
            KeyCode::Char('l') | KeyCode::Char('L') => Input::ToggleTimeWarp,
            KeyCode::Char('k') | KeyCode::Char('K') => Input::Kill,

            // Controls
            KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Char('c')
            | KeyCode::Char('C')
            | KeyCode::Esc => Input::Exit,

            _ => return KeyAction::None,
        };

        KeyAction::Game(input)
    }

    /// Answer to the play-again prompt
    pub fn is_confirm(&self, key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up)),
            KeyAction::Game(Input::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Down)),
            KeyAction::Game(Input::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Left)),
            KeyAction::Game(Input::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right)),
            KeyAction::Game(Input::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w'))),
            KeyAction::Game(Input::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('a'))),
            KeyAction::Game(Input::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s'))),
            KeyAction::Game(Input::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            KeyAction::Game(Input::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_mode_toggles() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Tab)),
            KeyAction::Game(Input::ToggleDebug)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('p'))),
            KeyAction::Game(Input::ToggleAutopilot)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('l'))),
            KeyAction::Game(Input::ToggleTimeWarp)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('k'))),
            KeyAction::Game(Input::Kill)
        );
    }

    #[test]
    fn test_exit_keys() {
        let handler = InputHandler::new();

        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('q'), KeyCode::Char('Q')] {
            assert_eq!(handler.handle_key_event(key(code)), KeyAction::Game(Input::Exit));
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Game(Input::Exit));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_confirm() {
        let handler = InputHandler::new();
        assert!(handler.is_confirm(key(KeyCode::Char('y'))));
        assert!(handler.is_confirm(key(KeyCode::Char('Y'))));
        assert!(!handler.is_confirm(key(KeyCode::Char('n'))));
        assert!(!handler.is_confirm(key(KeyCode::Enter)));
    }
}
