//! TUI rendering with ratatui
//!
//! Everything on screen is derived from the current `App` snapshot.

use super::app::{App, MessageStyle};
use crate::core::LetterState;
use crate::game::{Game, MAX_ROWS, ROW_LEN, TurnState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, &app.game, chunks[1]);
    render_status(f, &app.game, chunks[2]);

    if let Some(ref message) = app.popup {
        render_popup(f, &message.text, message.style);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background and text colors of a cell
fn cell_colors(state: Option<LetterState>) -> (Color, Color) {
    match state {
        Some(LetterState::Exact) => (Color::Green, Color::Black),
        Some(LetterState::Present) => (Color::Rgb(255, 165, 0), Color::Black),
        Some(LetterState::Absent) => (Color::DarkGray, Color::White),
        None => (Color::White, Color::Black),
    }
}

fn render_grid(f: &mut Frame, game: &Game, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); MAX_ROWS])
        .flex(Flex::Center)
        .split(area);

    let focus = game.focus();
    let editing = !game.state().is_over();

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); ROW_LEN])
            .flex(Flex::Center)
            .split(*row_area);

        let feedback = game.grid().feedback(row);

        for (col, cell_area) in cols.iter().enumerate() {
            let letter = game.grid().cell(col, row);
            let state = feedback.map(|fb| fb.states()[col]);
            let (bg, fg) = cell_colors(state);

            let focused = editing && focus.col == col && focus.row == row;
            let border = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let cell = Paragraph::new(letter.map(String::from).unwrap_or_default())
                .alignment(Alignment::Center)
                .style(Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(if focused {
                            BorderType::Thick
                        } else {
                            BorderType::Plain
                        })
                        .border_style(border),
                );
            f.render_widget(cell, *cell_area);
        }
    }
}

fn render_status(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let focus = game.focus();
    let position = Paragraph::new(format!("({}, {})", focus.col, focus.row))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(position, chunks[0]);

    let state_text = match game.state() {
        TurnState::EnteringLetter => "Typing",
        TurnState::RowComplete => "Press Enter",
        TurnState::Won => "Solved!",
        TurnState::Lost => "Out of guesses",
    };
    let state = Paragraph::new(state_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(state, chunks[1]);

    let help_text = if game.state().is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl+N/F5: Restart | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);
}

fn render_popup(f: &mut Frame, text: &str, style: MessageStyle) {
    let color = match style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };

    let area = centered_rect(50, 7, f.area());
    let popup = Paragraph::new(vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horizontal] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    horizontal
}
