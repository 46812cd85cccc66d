//! Terminal entry point.
//!
//! Startup is a single explicit sequence: parse the command line, construct
//! the session, attach the terminal adapter, render, then loop. The event
//! loop polls so the presentation deadlines (error auto-clear, button flash
//! release) fire without further input.

use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tally::tui::{render, App, InputHandler, UiOptions};

/// Poll interval for the event loop.
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Keypad-driven terminal calculator")]
struct Cli {
    /// Hide the on-screen keypad pane
    #[arg(long)]
    no_keypad: bool,

    /// Hide the keyboard shortcut sidebar
    #[arg(long)]
    no_help: bool,
}

impl Cli {
    fn options(&self) -> UiOptions {
        UiOptions {
            show_keypad: !self.no_keypad,
            show_help: !self.no_help,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: UiOptions) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, options);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    options: UiOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(options);
    let keys = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| render(&mut app, frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(keys.handle_key(key), Instant::now()),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.click(mouse.column, mouse.row, Instant::now());
                }
                _ => {}
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}
