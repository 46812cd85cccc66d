//! Frame rendering.
//!
//! Two right-aligned text regions, the pending expression and the current
//! value, sit beside the optional keypad pane and shortcut sidebar. The
//! value line keeps its bold emphasis only while it fits comfortably; past
//! twelve characters the emphasis drops so long results stay readable.
//! A cosmetic rule, not an engine invariant.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::App;
use super::keypad::KeypadWidget;

/// Character count past which the value line loses its emphasis.
const VALUE_WIDE_THRESHOLD: usize = 12;

/// Width of the keypad pane.
const KEYPAD_WIDTH: u16 = 21;

/// Width of the shortcut sidebar.
const HELP_WIDTH: u16 = 24;

/// Keyboard shortcuts shown in the sidebar.
const SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "digits"),
    ("+ - * /", "operator"),
    ("Enter =", "equals"),
    ("Bksp", "delete"),
    ("Esc C", "clear"),
    ("Ctrl+Q", "quit"),
    ("Click", "keypad"),
];

/// Renders the calculator UI and records the keypad pane position for mouse
/// hit-testing.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    frame.render_widget(
        Block::default()
            .title(" tally ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let options = app.options();
    let mut constraints = vec![Constraint::Min(26)];
    if options.show_keypad {
        constraints.push(Constraint::Length(KEYPAD_WIDTH));
    }
    if options.show_help {
        constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(area);

    render_displays(app, columns[0], frame);

    let mut next = 1;
    if options.show_keypad {
        let pane = columns[next];
        app.set_keypad_area(Some(pane));
        frame.render_widget(KeypadWidget::new(app.keypad()), pane);
        next += 1;
    } else {
        app.set_keypad_area(None);
    }
    if options.show_help {
        render_help(columns[next], frame);
    }
}

fn render_displays(app: &App, area: Rect, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let state = app.display();
    let error = app.engine().error().is_some();

    let expression = Paragraph::new(Span::styled(
        state.expression,
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(" Expression ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(expression, chunks[0]);

    let value_style = if error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if state.value.chars().count() > VALUE_WIDE_THRESHOLD {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    let value = Paragraph::new(Span::styled(state.value, value_style))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Value ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(value, chunks[1]);
}

fn render_help(area: Rect, frame: &mut Frame) {
    let items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(key, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
