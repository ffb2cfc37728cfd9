//! Display functions for line-mode output

use super::formatters::{KEYBOARD_ROWS, cell_label, feedback_to_emoji, key_display_color};
use crate::commands::ReplayResult;
use crate::core::Feedback;
use crate::engine::{GameState, Phase};
use colored::{ColoredString, Colorize};

/// Color a label the way its feedback is shown on screen
fn paint(label: &str, feedback: Feedback) -> ColoredString {
    match feedback {
        Feedback::Exact => label.black().on_green().bold(),
        Feedback::Present => label.black().on_yellow().bold(),
        Feedback::Absent => label.white().on_bright_black(),
        Feedback::Neutral => label.bright_white().bold(),
    }
}

/// Print the grid, one row per line
pub fn print_board(state: &GameState) {
    let grid = state.grid();
    let cursor = state.cursor();

    println!();
    for row in 0..grid.rows() {
        let cells: Vec<String> = grid
            .row(row)
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let label = if cell.is_none() && cursor.is_at(row, col) {
                    "_".to_string()
                } else {
                    cell_label(cell)
                };
                paint(&format!(" {label} "), state.cell_color(row, col)).to_string()
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}

/// Print the keyboard with each key colored by its best outcome
pub fn print_keyboard(state: &GameState) {
    let colors = state.keyboard_colors();

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| {
                let label = char::from(letter).to_ascii_uppercase().to_string();
                paint(&label, key_display_color(&colors, letter)).to_string()
            })
            .collect();
        let indent = " ".repeat(2 + i * 2);
        println!("{indent}{}", keys.join(" "));
    }
    println!();
}

/// Print the result of replaying a list of guesses
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.guess.to_uppercase().bright_white().bold(),
            feedback_to_emoji(&row.colors)
        );
    }

    for guess in &result.ignored_guesses {
        println!(
            "  {} {}",
            "ignored:".bright_black(),
            guess.to_uppercase().bright_black()
        );
    }

    println!();
    match result.phase {
        Phase::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.rows.len())
                .green()
                .bold()
        ),
        Phase::Lost => println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.rows.len())
                .red()
                .bold()
        ),
        Phase::Playing => println!(
            "{}",
            format!("… {} of {} guesses used", result.rows.len(), result.attempts).yellow()
        ),
    }
}
