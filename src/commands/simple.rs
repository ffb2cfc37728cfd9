//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Every input line is typed into the grid
//! character by character and followed by one Enter press.

use crate::core::Key;
use crate::engine::{Engine, KeyOutcome, Notification};
use crate::output::{print_board, print_keyboard};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Keys were fed; carries the outcome of the closing Enter press and the
    /// notification fired by the line, if any
    Played {
        outcome: KeyOutcome,
        notification: Option<Notification>,
    },
    NewGame,
    Quit,
}

/// Feed one line of input into the engine
///
/// Lines starting with `:` are commands (`:quit`, `:exit`, `:new`), so any
/// word can still be guessed. Everything else is typed through
/// [`Key::from_char`] and closed with one Submit.
pub fn feed_line(engine: &mut Engine, line: &str) -> LineAction {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        ":quit" | ":exit" => return LineAction::Quit,
        ":new" => return LineAction::NewGame,
        _ => {}
    }

    let mut fired = None;
    for key in trimmed.chars().filter_map(Key::from_char) {
        fired = fired.or(engine.handle_key(key));
    }
    let (outcome, notification) = engine.apply(Key::Submit);

    LineAction::Played {
        outcome,
        notification: fired.or(notification),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(mut engine: Engine) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║                 WORDLE                   ║");
    println!("╚══════════════════════════════════════════╝\n");

    println!("Type a guess and press Enter. Partial input stays in the row.");
    println!("  - '<' removes the last letter");
    println!("  - ':new' starts over, ':quit' exits\n");

    print_board(engine.state());
    print_keyboard(engine.state());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(&format!(
            "Guess {}/{}",
            engine.state().submitted_rows() + 1,
            engine.state().grid().rows()
        ))?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        let notification = match feed_line(&mut engine, &line) {
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::NewGame => {
                engine.restart();
                println!("\n🔄 New game started!");
                None
            }
            LineAction::Played { notification, .. } => notification,
        };

        print_board(engine.state());
        print_keyboard(engine.state());

        if let Some(notification) = notification {
            announce(notification);

            prompt("Play again? (yes/no)")?;
            let answer = lines.next().transpose().context("failed to read input")?;
            match answer.as_deref().map(str::trim) {
                Some("yes" | "y") => {
                    engine.restart();
                    println!("\n🔄 New game started!");
                    print_board(engine.state());
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn announce(notification: Notification) {
    let banner = format!("{}  {}", notification.title(), notification.message());
    let banner = match notification {
        Notification::Won => banner.bright_green().bold(),
        Notification::Lost => banner.bright_red().bold(),
    };

    println!("{}", "═".repeat(44).bright_cyan());
    println!("  {banner}");
    println!("{}", "═".repeat(44).bright_cyan());
    println!();
}

/// Print a prompt without a trailing newline
fn prompt(text: &str) -> Result<()> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::{Cursor, Ignored, Phase};

    fn engine() -> Engine {
        GameConfig::default().build().unwrap()
    }

    #[test]
    fn full_line_submits() {
        let mut engine = engine();
        let action = feed_line(&mut engine, "world\n");

        assert_eq!(
            action,
            LineAction::Played {
                outcome: KeyOutcome::Submitted { row: 0 },
                notification: None,
            }
        );
        assert_eq!(engine.state().cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn partial_lines_accumulate() {
        let mut engine = engine();
        assert_eq!(
            feed_line(&mut engine, "wor"),
            LineAction::Played {
                outcome: KeyOutcome::Ignored(Ignored::RowIncomplete),
                notification: None,
            }
        );
        assert_eq!(engine.state().cursor(), Cursor { row: 0, col: 3 });

        feed_line(&mut engine, "ld");
        assert_eq!(engine.state().grid().row_text(0, '_'), "world");
        assert_eq!(engine.state().cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn clear_marker_removes_letters() {
        let mut engine = engine();
        feed_line(&mut engine, "helx<lo");
        assert_eq!(engine.state().grid().row_text(0, '_'), "hello");
        assert_eq!(engine.state().phase(), Phase::Won);
    }

    #[test]
    fn winning_line_reports_notification() {
        let mut engine = engine();
        assert_eq!(
            feed_line(&mut engine, "HELLO"),
            LineAction::Played {
                outcome: KeyOutcome::Submitted { row: 0 },
                notification: Some(Notification::Won),
            }
        );
    }

    #[test]
    fn commands_leave_grid_alone() {
        let mut engine = engine();
        assert_eq!(feed_line(&mut engine, ":quit"), LineAction::Quit);
        assert_eq!(feed_line(&mut engine, ":exit"), LineAction::Quit);
        assert_eq!(feed_line(&mut engine, " :New "), LineAction::NewGame);
        assert_eq!(engine.state().cursor(), Cursor::default());
    }

    #[test]
    fn command_words_are_ordinary_guesses() {
        let mut engine = GameConfig::new("quit", 6).build().unwrap();
        assert_eq!(
            feed_line(&mut engine, "quit"),
            LineAction::Played {
                outcome: KeyOutcome::Submitted { row: 0 },
                notification: Some(Notification::Won),
            }
        );
        assert_eq!(engine.state().phase(), Phase::Won);

        let mut engine = GameConfig::new("exit", 6).build().unwrap();
        feed_line(&mut engine, "new");
        assert_eq!(engine.state().grid().row_text(0, '_'), "new_");
    }
}
