//! The accumulator state machine.
//!
//! State moves between three shapes: idle (just a current value), operand
//! entry (digits appending to the current value), and operator pending (a
//! captured operand plus an operator waiting for its right-hand side).
//! `awaiting_entry` marks that the next digit starts a fresh operand rather
//! than appending, which is how a result stays on screen after `=` while
//! remaining chainable.

use super::format::{format_operand, format_value};
use super::{DisplayState, EngineError, EngineResult, Operator};

/// Value-line text shown while an error is displayed.
const ERROR_VALUE: &str = "Error";

/// A discrete input event consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operators.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// Delete the last character of the current operand.
    Delete,
    /// Reset to the baseline state.
    Clear,
}

/// The calculator engine: a finite-state accumulator.
///
/// One instance lives for the whole session. Every mutating call leaves the
/// engine in a state whose `current` text parses to a finite number (or is
/// the literal `"0"`) with at most one decimal point.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Text of the value being typed or last computed.
    current: String,
    /// Operand captured when an operator was chosen.
    previous: Option<f64>,
    /// Pending operator, absent when idle.
    operator: Option<Operator>,
    /// True immediately after an operator or equals: the next digit starts a
    /// fresh operand rather than appending.
    awaiting_entry: bool,
    /// Display-override error; cleared by the next mutating input.
    error: Option<EngineError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates an engine at the baseline state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            awaiting_entry: false,
            error: None,
        }
    }

    /// Dispatches a discrete input event.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.input_operator(op),
            Input::Equals => self.equals(),
            Input::Delete => self.delete_last(),
            Input::Clear => self.clear(),
        }
    }

    /// Enters a digit.
    ///
    /// Appends to the current operand, or replaces it when a fresh operand is
    /// pending. A redundant leading `"0"` is replaced rather than prefixed.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        self.error = None;
        if self.awaiting_entry {
            self.current.clear();
            self.current.push(ch);
            self.awaiting_entry = false;
        } else if self.current == "0" {
            self.current.clear();
            self.current.push(ch);
        } else {
            self.current.push(ch);
        }
    }

    /// Enters the decimal point.
    ///
    /// Rejected whenever the current text already holds one, even when the
    /// next digit would start a fresh operand; otherwise a fresh operand
    /// starts as `"0."`.
    pub fn input_decimal(&mut self) {
        if self.current.contains('.') {
            return;
        }
        self.error = None;
        if self.awaiting_entry {
            self.current = "0.".to_string();
            self.awaiting_entry = false;
        } else {
            self.current.push('.');
        }
    }

    /// Chooses an operator.
    ///
    /// Captures the current operand when none is pending. When an operator is
    /// already pending and a new operand has been typed, the pending
    /// computation resolves first and its result chains as the new captured
    /// operand; a failed resolution parks the error and leaves the pending
    /// operator in place. A second operator with no new operand simply
    /// replaces the pending one.
    pub fn input_operator(&mut self, op: Operator) {
        match (self.previous, self.operator) {
            (None, _) => self.previous = Some(self.current_value()),
            (Some(prev), Some(pending)) if !self.awaiting_entry => {
                match Self::resolve(prev, pending, self.current_value()) {
                    Ok(result) => {
                        self.current = format_value(result);
                        self.previous = Some(result);
                    }
                    Err(err) => {
                        self.error = Some(err);
                        return;
                    }
                }
            }
            _ => {}
        }
        self.error = None;
        self.operator = Some(op);
        self.awaiting_entry = true;
    }

    /// Resolves the pending computation.
    ///
    /// No-op when no operator is pending or no new operand was entered since
    /// the operator was chosen. On success the result becomes the current
    /// value, ready to chain: a further digit starts fresh, a further
    /// operator captures the result.
    pub fn equals(&mut self) {
        let (Some(prev), Some(op)) = (self.previous, self.operator) else {
            return;
        };
        if self.awaiting_entry {
            return;
        }
        match Self::resolve(prev, op, self.current_value()) {
            Ok(result) => {
                self.current = format_value(result);
                self.previous = None;
                self.operator = None;
                self.awaiting_entry = true;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Removes the last character of the current operand.
    ///
    /// A current text reduced to emptiness or to a non-parsing remnant (a
    /// bare `-`) resets to `"0"`; the display never goes blank.
    pub fn delete_last(&mut self) {
        self.error = None;
        if self.current.len() > 1 {
            self.current.pop();
            if self.current.parse::<f64>().is_err() {
                self.current = "0".to_string();
            }
        } else {
            self.current = "0".to_string();
        }
    }

    /// Resets every field to the baseline state.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous = None;
        self.operator = None;
        self.awaiting_entry = false;
        self.error = None;
    }

    /// Applies `op` to two operands.
    ///
    /// Division by a right-hand operand of exactly zero yields
    /// [`EngineError::DivideByZero`] rather than an infinity. Successful
    /// results are rounded to eight decimal digits with an epsilon-corrected
    /// round at 1e8 resolution to suppress binary floating-point artifacts.
    pub fn resolve(lhs: f64, op: Operator, rhs: f64) -> EngineResult<f64> {
        let raw = match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(EngineError::DivideByZero);
                }
                lhs / rhs
            }
        };
        Ok(round_result(raw))
    }

    /// Produces the display snapshot for the presentation layer.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        if let Some(err) = self.error {
            return DisplayState {
                expression: err.to_string(),
                value: ERROR_VALUE.to_string(),
            };
        }
        let expression = match (self.previous, self.operator) {
            (Some(prev), Some(op)) => {
                let mut line = format!("{} {}", format_operand(&format_value(prev)), op.symbol());
                if !self.awaiting_entry {
                    line.push(' ');
                    line.push_str(&format_operand(&self.current));
                }
                line
            }
            _ => format_operand(&self.current),
        };
        DisplayState {
            expression,
            value: self.current.clone(),
        }
    }

    /// Returns the current operand text.
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.current
    }

    /// Returns the displayed error, if any.
    #[must_use]
    pub fn error(&self) -> Option<EngineError> {
        self.error
    }

    fn current_value(&self) -> f64 {
        self.current.parse().unwrap_or(0.0)
    }
}

fn round_result(value: f64) -> f64 {
    ((value + f64::EPSILON) * 1e8).round() / 1e8
}
