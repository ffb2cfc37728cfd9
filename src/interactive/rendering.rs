//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard and the end-of-game dialog.

use super::app::App;
use crate::core::Feedback;
use crate::engine::{GameState, Notification, Phase};
use crate::output::formatters::{KEYBOARD_ROWS, cell_label, key_display_color};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const EXACT: Color = Color::Rgb(0x53, 0x8D, 0x4E);
const PRESENT: Color = Color::Rgb(0xB5, 0x9F, 0x3B);
const ABSENT: Color = Color::Rgb(0x3A, 0x3A, 0x3C);
const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x14);
const LIGHT_GREY: Color = Color::Rgb(0xD8, 0xD8, 0xD8);
const GREY: Color = Color::Rgb(0x86, 0x88, 0x8A);

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 9;

/// Background color for a grid cell
fn cell_background(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Exact => EXACT,
        Feedback::Present => PRESENT,
        Feedback::Absent => ABSENT,
        Feedback::Neutral => BACKGROUND,
    }
}

/// Background color for a keyboard key; unused keys stay grey
fn key_background(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Neutral => GREY,
        revealed => cell_background(revealed),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let state = app.engine.state();
    let rows = u16::try_from(state.grid().rows()).unwrap_or(u16::MAX);
    let keyboard_height = CELL_HEIGHT * KEYBOARD_ROWS.len() as u16;
    // Title, keyboard and status bar keep their space; the grid scrolls
    let grid_height = CELL_HEIGHT
        .saturating_mul(rows)
        .min(area.height.saturating_sub(3 + keyboard_height + 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title
            Constraint::Min(grid_height),        // Grid
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    render_title(f, chunks[0]);
    render_grid(f, state, chunks[1]);
    render_keyboard(f, state, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(notification) = app.dialog {
        render_dialog(f, notification, area);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("W O R D L E")
        .style(Style::default().fg(LIGHT_GREY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(ABSENT)),
        );
    f.render_widget(title, area);
}

/// Split `area` into centered boxes of the given widths
fn centered_boxes(area: Rect, widths: &[u16]) -> Vec<Rect> {
    Layout::horizontal(widths.iter().map(|&w| Constraint::Length(w)))
        .flex(Flex::Center)
        .spacing(1)
        .split(area)
        .to_vec()
}

/// Rows that fit in `height`, scrolled so the active row stays on screen
fn visible_rows(total: usize, active: usize, height: u16) -> std::ops::Range<usize> {
    let fit = usize::from(height / CELL_HEIGHT).min(total);
    let first = (active + 1).min(total).saturating_sub(fit);
    first..first + fit
}

fn render_grid(f: &mut Frame, state: &GameState, area: Rect) {
    let grid = state.grid();
    let cursor = state.cursor();
    let shown = visible_rows(grid.rows(), cursor.row, area.height);

    let rows = Layout::vertical(shown.clone().map(|_| Constraint::Length(CELL_HEIGHT)))
        .flex(Flex::Center)
        .split(area);

    for (row, &row_area) in shown.zip(rows.iter()) {
        let widths = vec![CELL_WIDTH; grid.columns()];
        for (col, cell_area) in centered_boxes(row_area, &widths).into_iter().enumerate() {
            let cell = grid.get(row, col).flatten();
            let border = if cursor.is_at(row, col) && state.phase() == Phase::Playing {
                LIGHT_GREY
            } else {
                ABSENT
            };

            let widget = Paragraph::new(cell_label(cell))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(LIGHT_GREY)
                        .bg(cell_background(state.cell_color(row, col)))
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Thick)
                        .border_style(Style::default().fg(border)),
                );
            f.render_widget(widget, cell_area);
        }
    }
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let colors = state.keyboard_colors();
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(area);

    for (i, (letters, &row_area)) in KEYBOARD_ROWS.iter().zip(rows.iter()).enumerate() {
        let last = i == KEYBOARD_ROWS.len() - 1;

        let mut keys: Vec<(String, Color)> = letters
            .bytes()
            .map(|letter| {
                let label = char::from(letter).to_ascii_uppercase().to_string();
                (label, key_background(key_display_color(&colors, letter)))
            })
            .collect();
        if last {
            keys.insert(0, ("ENTER".to_string(), GREY));
            keys.push(("CLEAR".to_string(), GREY));
        }

        let widths: Vec<u16> = keys
            .iter()
            .map(|(label, _)| {
                if label.len() > 1 {
                    WIDE_KEY_WIDTH
                } else {
                    KEY_WIDTH
                }
            })
            .collect();

        for ((label, bg), key_area) in keys.into_iter().zip(centered_boxes(row_area, &widths)) {
            let widget = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(LIGHT_GREY)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(BACKGROUND).bg(bg)),
                );
            f.render_widget(widget, key_area);
        }
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let progress = format!(
        "{} | Guess {}/{}",
        state.phase(),
        (state.submitted_rows() + 1).min(state.grid().rows()),
        state.grid().rows()
    );
    let progress = Paragraph::new(progress)
        .alignment(Alignment::Center)
        .style(Style::default().fg(LIGHT_GREY));
    f.render_widget(progress, chunks[0]);

    let stats = format!("Games: {} | Won: {}", app.games_played, app.games_won);
    let stats = Paragraph::new(stats)
        .alignment(Alignment::Center)
        .style(Style::default().fg(LIGHT_GREY));
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Ctrl+N: New game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(GREY));
    f.render_widget(help, chunks[2]);
}

/// Rectangle of the given size centered in `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    rect
}

fn render_dialog(f: &mut Frame, notification: Notification, area: Rect) {
    let color = match notification {
        Notification::Won => EXACT,
        Notification::Lost => PRESENT,
    };

    let content = vec![
        Line::from(""),
        Line::from(notification.message()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Enter: OK | Ctrl+N: New game").style(Style::default().fg(GREY)),
    ];

    let dialog = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", notification.title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color).bg(BACKGROUND)),
    );

    let rect = centered_rect(36, 7, area);
    f.render_widget(Clear, rect);
    f.render_widget(dialog, rect);
}
