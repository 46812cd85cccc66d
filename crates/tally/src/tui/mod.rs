//! Terminal front-end.
//!
//! A thin adapter over the engine: [`InputHandler`] maps key events to
//! engine inputs, [`Keypad`] models the on-screen buttons, [`App`] holds the
//! session state and the presentation timers, and [`render`] paints the
//! engine's display snapshot.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{App, UiOptions};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::render;
