//! On-screen keypad.
//!
//! A button grid mirroring the physical layout:
//!
//! ```text
//! [ C ] [ ⌫ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```
//!
//! Buttons flash briefly when pressed, whether by mouse click or by the
//! matching keyboard key. Rows vary in length, so hit-testing divides each
//! row's width independently.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::engine::{Input, Operator};

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph on the button face.
    pub label: char,
    /// The engine input this button produces.
    pub input: Input,
    /// Whether the button is currently flashing.
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(digit: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(digit), 10).unwrap_or('?'),
            input: Input::Digit(digit),
            pressed: false,
        }
    }

    /// Creates an operator button.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            input: Input::Operator(op),
            pressed: false,
        }
    }

    /// Creates the decimal point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            input: Input::Decimal,
            pressed: false,
        }
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            input: Input::Equals,
            pressed: false,
        }
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            input: Input::Clear,
            pressed: false,
        }
    }

    /// Creates the delete (backspace) button.
    #[must_use]
    pub fn delete() -> Self {
        Self {
            label: '⌫',
            input: Input::Delete,
            pressed: false,
        }
    }
}

/// The keypad model: rows of buttons with pressed-state tracking.
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![
                vec![
                    KeypadButton::clear(),
                    KeypadButton::delete(),
                    KeypadButton::operator(Operator::Divide),
                ],
                vec![
                    KeypadButton::digit(7),
                    KeypadButton::digit(8),
                    KeypadButton::digit(9),
                    KeypadButton::operator(Operator::Multiply),
                ],
                vec![
                    KeypadButton::digit(4),
                    KeypadButton::digit(5),
                    KeypadButton::digit(6),
                    KeypadButton::operator(Operator::Subtract),
                ],
                vec![
                    KeypadButton::digit(1),
                    KeypadButton::digit(2),
                    KeypadButton::digit(3),
                    KeypadButton::operator(Operator::Add),
                ],
                vec![
                    KeypadButton::digit(0),
                    KeypadButton::decimal(),
                    KeypadButton::equals(),
                ],
            ],
        }
    }

    /// Returns the rows of buttons.
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// Returns the total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn button(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row)?.get(col)
    }

    /// Finds the position of the button producing `input`.
    #[must_use]
    pub fn find(&self, input: Input) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|btn| btn.input == input)
                .map(|c| (r, c))
        })
    }

    /// Flashes the button producing `input`, releasing every other button.
    pub fn flash(&mut self, input: Input) {
        self.release_all();
        for row in &mut self.rows {
            for btn in row {
                if btn.input == input {
                    btn.pressed = true;
                    return;
                }
            }
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for row in &mut self.rows {
            for btn in row {
                btn.pressed = false;
            }
        }
    }

    /// Returns true if any button is currently flashing.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.iter().any(|btn| btn.pressed))
    }

    /// Converts a click position inside `area` (the bordered keypad pane)
    /// into a `(row, col)` button position.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if area.width < 3 || area.height < 3 {
            return None;
        }
        // Exclude the border cells.
        if x <= area.x || y <= area.y {
            return None;
        }
        if x >= area.x + area.width - 1 || y >= area.y + area.height - 1 {
            return None;
        }

        let inner_w = area.width - 2;
        let inner_h = area.height - 2;
        let row_h = inner_h / self.rows.len() as u16;
        if row_h == 0 {
            return None;
        }
        let row = ((y - area.y - 1) / row_h) as usize;
        let buttons = self.rows.get(row)?;
        let col_w = inner_w / buttons.len() as u16;
        if col_w == 0 {
            return None;
        }
        let col = ((x - area.x - 1) / col_w) as usize;
        if col < buttons.len() {
            Some((row, col))
        } else {
            None
        }
    }
}

/// Renders a [`Keypad`].
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over the given keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.rows();
        if inner.width < 9 || (inner.height as usize) < rows.len() {
            return;
        }
        let row_h = inner.height / rows.len() as u16;

        for (r, row) in rows.iter().enumerate() {
            let col_w = inner.width / row.len() as u16;
            let y = inner.y + r as u16 * row_h + row_h / 2;
            if y >= inner.y + inner.height {
                continue;
            }
            for (c, btn) in row.iter().enumerate() {
                let label = format!("[{}]", btn.label);
                let width = label.chars().count() as u16;
                let x = inner.x + c as u16 * col_w + col_w.saturating_sub(width) / 2;
                buf.set_span(x, y, &Span::styled(label, button_style(btn)), col_w);
            }
        }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.input {
        Input::Digit(_) | Input::Decimal => Style::default().fg(Color::White),
        Input::Operator(_) => Style::default().fg(Color::Yellow),
        Input::Equals => Style::default().fg(Color::Green),
        Input::Clear => Style::default().fg(Color::Red),
        Input::Delete => Style::default().fg(Color::Cyan),
    }
}
