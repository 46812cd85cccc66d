//! Calculator engine: a finite-state accumulator over discrete input events.
//!
//! The engine consumes [`Input`] events (digit, decimal point, operator,
//! equals, delete, clear) and exposes its complete observable state as a
//! [`DisplayState`] after every call. It holds no reference to any rendering
//! surface; the presentation layer decides how the two text lines are drawn.

mod accumulator;
mod format;
mod operator;

pub use accumulator::{Calculator, Input};
pub use format::{format_operand, format_value};
pub use operator::Operator;

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the calculator engine.
///
/// The engine never returns these across its event boundary; a failed
/// resolution parks the error in engine state and [`Calculator::display`]
/// reports it through the normal output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Division with a right-hand operand of exactly zero.
    #[error("Cannot divide by zero")]
    DivideByZero,
}

/// Snapshot handed to the presentation layer after every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Pending-expression line: `<previous> <operator>[ <current>]` while an
    /// operator is pending, otherwise the formatted current value. Carries
    /// the error message while an error is displayed.
    pub expression: String,
    /// Current value line, used verbatim by the display. Carries the literal
    /// `"Error"` while an error is displayed.
    pub value: String,
}
