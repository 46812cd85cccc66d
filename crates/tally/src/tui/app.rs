//! Presentation session state.
//!
//! [`App`] owns the engine and the keypad model, plus the two fire-and-forget
//! deadlines the presentation layer schedules: the divide-by-zero display
//! auto-clears after two seconds, and a flashed keypad button releases after
//! a tenth of a second. Neither deadline is cancelled by later input; an
//! expired deadline simply acts on whatever state exists when it fires.
//!
//! Timestamps are passed in by the caller so tests can drive the clock.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::engine::{Calculator, DisplayState, Input};

use super::input::KeyAction;
use super::keypad::Keypad;

/// Presentation options, populated from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Show the on-screen keypad pane.
    pub show_keypad: bool,
    /// Show the keyboard shortcut sidebar.
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            show_keypad: true,
            show_help: true,
        }
    }
}

/// Calculator application state.
#[derive(Debug)]
pub struct App {
    engine: Calculator,
    keypad: Keypad,
    options: UiOptions,
    /// Keypad pane position from the last rendered frame, for mouse hits.
    keypad_area: Option<Rect>,
    /// When the displayed error resets the engine.
    error_reset_at: Option<Instant>,
    /// When the flashed keypad button releases.
    release_at: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// How long the divide-by-zero display holds before the automatic clear.
    pub const ERROR_HOLD: Duration = Duration::from_secs(2);

    /// How long a pressed keypad button stays highlighted.
    pub const PRESS_FLASH: Duration = Duration::from_millis(100);

    /// Creates an app at the engine baseline.
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        Self {
            engine: Calculator::new(),
            keypad: Keypad::new(),
            options,
            keypad_area: None,
            error_reset_at: None,
            release_at: None,
            should_quit: false,
        }
    }

    /// Feeds one engine input, flashing the matching keypad button.
    ///
    /// Entering the error state arms the automatic clear; a newer error
    /// re-arms it.
    pub fn apply(&mut self, input: Input, now: Instant) {
        self.keypad.flash(input);
        self.release_at = Some(now + Self::PRESS_FLASH);
        self.engine.apply(input);
        if self.engine.error().is_some() {
            self.error_reset_at = Some(now + Self::ERROR_HOLD);
        }
    }

    /// Handles a mapped keyboard action.
    pub fn handle_key(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::Input(input) => self.apply(input, now),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal cell `(x, y)`.
    pub fn click(&mut self, x: u16, y: u16, now: Instant) {
        let Some(area) = self.keypad_area else {
            return;
        };
        let input = self
            .keypad
            .hit_test(area, x, y)
            .and_then(|(row, col)| self.keypad.button(row, col))
            .map(|btn| btn.input);
        if let Some(input) = input {
            self.apply(input, now);
        }
    }

    /// Fires any expired deadline.
    pub fn tick(&mut self, now: Instant) {
        if self.release_at.is_some_and(|at| now >= at) {
            self.keypad.release_all();
            self.release_at = None;
        }
        if self.error_reset_at.is_some_and(|at| now >= at) {
            self.engine.clear();
            self.error_reset_at = None;
        }
    }

    /// Returns the display snapshot.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.engine.display()
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &Calculator {
        &self.engine
    }

    /// Returns the keypad model.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the presentation options.
    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    /// Records where the keypad pane was rendered.
    pub fn set_keypad_area(&mut self, area: Option<Rect>) {
        self.keypad_area = area;
    }

    /// Returns where the keypad pane was last rendered, if shown.
    #[must_use]
    pub fn keypad_area(&self) -> Option<Rect> {
        self.keypad_area
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
