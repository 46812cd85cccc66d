//! Keypad-driven terminal calculator.
//!
//! `tally` reads digits and operators as discrete events (keyboard presses or
//! on-screen keypad clicks), folds them through a classic accumulator state
//! machine, and renders the running expression and the current value as two
//! display lines.
//!
//! The arithmetic core lives in [`engine`] and has no knowledge of any
//! rendering surface; [`tui`] is a thin adapter that maps terminal events to
//! engine inputs and paints the returned [`engine::DisplayState`].
//!
//! # Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(5);
//! calc.input_operator(Operator::Add);
//! calc.input_digit(3);
//! calc.equals();
//! assert_eq!(calc.display().value, "8");
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod engine;
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::engine::{
        format_operand, format_value, Calculator, DisplayState, EngineError, EngineResult, Input,
        Operator,
    };
    pub use crate::tui::{App, InputHandler, KeyAction, Keypad, UiOptions};
}
