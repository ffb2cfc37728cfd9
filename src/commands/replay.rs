//! Replay a fixed list of guesses through the engine

use crate::core::{Feedback, Key};
use crate::engine::{Engine, Phase};

/// One submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRow {
    pub guess: String,
    pub colors: Vec<Feedback>,
}

/// Result of replaying a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    pub target: String,
    pub attempts: usize,
    pub rows: Vec<ReplayRow>,
    pub phase: Phase,
    /// Guesses that were not accepted as a row
    pub ignored_guesses: Vec<String>,
}

/// Feed each guess as letter keys followed by Submit
///
/// A guess that does not produce a submitted row (wrong length, non-letters,
/// or typed after the game ended) is recorded in `ignored_guesses` and its
/// partial input is cleared so the next guess starts on an empty row.
///
/// # Examples
/// ```
/// use wordle_grid::commands::replay;
/// use wordle_grid::config::GameConfig;
/// use wordle_grid::engine::Phase;
///
/// let mut engine = GameConfig::default().build().unwrap();
/// let result = replay(&mut engine, &["world", "hello"]);
/// assert_eq!(result.rows.len(), 2);
/// assert_eq!(result.phase, Phase::Won);
/// ```
pub fn replay<S: AsRef<str>>(engine: &mut Engine, guesses: &[S]) -> ReplayResult {
    let mut rows = Vec::new();
    let mut ignored_guesses = Vec::new();

    for guess in guesses {
        let guess = guess.as_ref();
        let row = engine.state().submitted_rows();

        for key in guess.chars().filter_map(Key::letter) {
            engine.handle_key(key);
        }
        engine.handle_key(Key::Submit);

        let state = engine.state();
        if state.submitted_rows() > row {
            rows.push(ReplayRow {
                guess: state.grid().row_text(row, ' '),
                colors: state.row_colors(row),
            });
        } else {
            log::debug!("guess '{guess}' was not accepted");
            ignored_guesses.push(guess.to_string());
            while state_has_input(engine) {
                engine.handle_key(Key::Clear);
            }
        }
    }

    let state = engine.state();
    ReplayResult {
        target: state.target().text().to_string(),
        attempts: state.grid().rows(),
        rows,
        phase: state.phase(),
        ignored_guesses,
    }
}

fn state_has_input(engine: &Engine) -> bool {
    let state = engine.state();
    !state.phase().is_over() && state.cursor().col > 0
}
