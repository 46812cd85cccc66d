//! Keyboard input handling.
//!
//! Maps crossterm key events onto engine inputs. The mapping mirrors the
//! keypad: digits and the decimal point, `+ - * /` (and the display glyphs)
//! for operators, `Enter`/`=` for equals, `Backspace`/`Delete` for delete,
//! `Esc`/`c` for clear. `Ctrl+C` and `Ctrl+Q` quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::{Input, Operator};

/// Action produced by a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an input event to the engine.
    Input(Input),
    /// Quit the application.
    Quit,
    /// Ignored key.
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        if event.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match event.code {
            KeyCode::Char(ch) => Self::map_char(ch),
            KeyCode::Enter => KeyAction::Input(Input::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Input(Input::Delete),
            KeyCode::Esc => KeyAction::Input(Input::Clear),
            _ => KeyAction::None,
        }
    }

    fn map_char(ch: char) -> KeyAction {
        if let Some(digit) = ch.to_digit(10) {
            return KeyAction::Input(Input::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_char(ch) {
            return KeyAction::Input(Input::Operator(op));
        }
        match ch {
            '.' => KeyAction::Input(Input::Decimal),
            '=' => KeyAction::Input(Input::Equals),
            'c' | 'C' => KeyAction::Input(Input::Clear),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and decimal tests =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for (i, ch) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(ch))),
                KeyAction::Input(Input::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_decimal_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            KeyAction::Input(Input::Decimal)
        );
    }

    // ===== Operator tests =====

    #[test]
    fn test_ascii_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (ch, op) in cases {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(ch))),
                KeyAction::Input(Input::Operator(op))
            );
        }
    }

    #[test]
    fn test_glyph_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('×'))),
            KeyAction::Input(Input::Operator(Operator::Multiply))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('÷'))),
            KeyAction::Input(Input::Operator(Operator::Divide))
        );
    }

    // ===== Equals, delete, clear tests =====

    #[test]
    fn test_enter_is_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Input(Input::Equals)
        );
    }

    #[test]
    fn test_equals_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Input(Input::Equals)
        );
    }

    #[test]
    fn test_backspace_and_delete() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Input(Input::Delete)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Delete)),
            KeyAction::Input(Input::Delete)
        );
    }

    #[test]
    fn test_clear_keys() {
        let handler = InputHandler::new();
        for event in [key(KeyCode::Esc), key(KeyCode::Char('c')), key(KeyCode::Char('C'))] {
            assert_eq!(handler.handle_key(event), KeyAction::Input(Input::Clear));
        }
    }

    // ===== Quit tests =====

    #[test]
    fn test_ctrl_c_quits() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('x'))), KeyAction::None);
    }

    // ===== Ignored key tests =====

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        for event in [
            key(KeyCode::Tab),
            key(KeyCode::F(1)),
            key(KeyCode::Left),
            key(KeyCode::Char('x')),
            key(KeyCode::Char(' ')),
        ] {
            assert_eq!(handler.handle_key(event), KeyAction::None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }
}
