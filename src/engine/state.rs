//! Game state snapshot and its pure transitions
//!
//! A `GameState` is never mutated once published. Every key press produces a
//! new snapshot through [`GameState::step`], together with a description of
//! what the key did and, on the submission that ends the game, a one-shot
//! notification.

use std::fmt;

use super::grid::{Cursor, Grid};
use super::keyboard::KeyboardColors;
use crate::core::{Feedback, Key, Word};

/// Game phase; Won and Lost are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// Terminal notification, emitted once at the moment the game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Won,
    Lost,
}

impl Notification {
    /// Dialog title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Won => "Hurray",
            Self::Lost => "Meh",
        }
    }

    /// Dialog message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You won!",
            Self::Lost => "Try again tomorrow",
        }
    }
}

/// Why a key press had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// The game already ended
    GameOver,
    /// Clear on an empty active row
    NothingToClear,
    /// Submit before the active row is full
    RowIncomplete,
    /// Letter typed into a full row
    RowFull,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    Wrote { row: usize, col: usize },
    Cleared { row: usize, col: usize },
    Submitted { row: usize },
    Ignored(Ignored),
}

/// Result of applying one key to a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: GameState,
    pub outcome: KeyOutcome,
    pub notification: Option<Notification>,
}

/// Complete game state: target, grid, cursor and phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    grid: Grid,
    cursor: Cursor,
    phase: Phase,
}

impl GameState {
    /// Fresh game with an empty grid of `attempts` rows
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Word;
    /// use wordle_grid::engine::{GameState, Phase};
    ///
    /// let state = GameState::new(Word::new("hello").unwrap(), 6);
    /// assert_eq!(state.grid().rows(), 6);
    /// assert_eq!(state.grid().columns(), 5);
    /// assert_eq!(state.phase(), Phase::Playing);
    /// ```
    #[must_use]
    pub fn new(target: Word, attempts: usize) -> Self {
        let grid = Grid::new(attempts, target.len());
        Self {
            target,
            grid,
            cursor: Cursor::default(),
            phase: Phase::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of rows submitted so far
    #[inline]
    #[must_use]
    pub const fn submitted_rows(&self) -> usize {
        self.cursor.row
    }

    /// Apply one key press, producing the next snapshot
    ///
    /// Invalid presses leave the state unchanged and report why through
    /// [`KeyOutcome::Ignored`].
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{Key, Word};
    /// use wordle_grid::engine::{GameState, Ignored, KeyOutcome};
    ///
    /// let state = GameState::new(Word::new("hello").unwrap(), 6);
    /// let step = state.step(Key::Letter(b'w'));
    /// assert_eq!(step.outcome, KeyOutcome::Wrote { row: 0, col: 0 });
    ///
    /// let step = step.state.step(Key::Submit);
    /// assert_eq!(step.outcome, KeyOutcome::Ignored(Ignored::RowIncomplete));
    /// ```
    #[must_use]
    pub fn step(&self, key: Key) -> Step {
        if self.phase.is_over() {
            return self.ignore(Ignored::GameOver);
        }

        match key {
            Key::Clear => self.clear(),
            Key::Submit => self.submit(),
            Key::Letter(letter) => self.write(letter),
        }
    }

    fn ignore(&self, reason: Ignored) -> Step {
        Step {
            state: self.clone(),
            outcome: KeyOutcome::Ignored(reason),
            notification: None,
        }
    }

    fn clear(&self) -> Step {
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            return self.ignore(Ignored::NothingToClear);
        }

        let col = col - 1;
        Step {
            state: Self {
                grid: self.grid.with_cell(row, col, None),
                cursor: Cursor { row, col },
                ..self.clone()
            },
            outcome: KeyOutcome::Cleared { row, col },
            notification: None,
        }
    }

    fn write(&self, letter: u8) -> Step {
        let Cursor { row, col } = self.cursor;
        if col >= self.grid.columns() {
            return self.ignore(Ignored::RowFull);
        }

        Step {
            state: Self {
                grid: self.grid.with_cell(row, col, Some(letter)),
                cursor: Cursor { row, col: col + 1 },
                ..self.clone()
            },
            outcome: KeyOutcome::Wrote { row, col },
            notification: None,
        }
    }

    fn submit(&self) -> Step {
        let Cursor { row, col } = self.cursor;
        if col != self.grid.columns() {
            return self.ignore(Ignored::RowIncomplete);
        }

        let advanced = Self {
            cursor: Cursor { row: row + 1, col: 0 },
            ..self.clone()
        };
        let (phase, notification) = advanced.evaluate();

        Step {
            state: Self { phase, ..advanced },
            outcome: KeyOutcome::Submitted { row },
            notification,
        }
    }

    /// Phase after the latest submission
    ///
    /// Only the row just submitted is compared with the target.
    fn evaluate(&self) -> (Phase, Option<Notification>) {
        let Some(last) = self.cursor.row.checked_sub(1) else {
            return (Phase::Playing, None);
        };

        if self.target.matches(self.grid.row(last)) {
            (Phase::Won, Some(Notification::Won))
        } else if self.cursor.row >= self.grid.rows() {
            (Phase::Lost, Some(Notification::Lost))
        } else {
            (Phase::Playing, None)
        }
    }

    /// Feedback color of a cell
    ///
    /// Rows at or after the active row are Neutral even when they hold
    /// letters. Positions outside the grid are Neutral too.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{Feedback, Key, Word};
    /// use wordle_grid::engine::GameState;
    ///
    /// let mut state = GameState::new(Word::new("hello").unwrap(), 6);
    /// for ch in "world".chars() {
    ///     state = state.step(Key::letter(ch).unwrap()).state;
    /// }
    /// assert_eq!(state.cell_color(0, 3), Feedback::Neutral);
    ///
    /// let state = state.step(Key::Submit).state;
    /// assert_eq!(state.cell_color(0, 0), Feedback::Absent);
    /// assert_eq!(state.cell_color(0, 1), Feedback::Present);
    /// assert_eq!(state.cell_color(0, 3), Feedback::Exact);
    /// ```
    #[must_use]
    pub fn cell_color(&self, row: usize, col: usize) -> Feedback {
        if row >= self.cursor.row {
            return Feedback::Neutral;
        }

        match self.grid.get(row, col) {
            Some(cell) => Feedback::evaluate(cell, col, &self.target),
            None => Feedback::Neutral,
        }
    }

    /// Feedback colors of a whole row
    #[must_use]
    pub fn row_colors(&self, row: usize) -> Vec<Feedback> {
        (0..self.grid.columns())
            .map(|col| self.cell_color(row, col))
            .collect()
    }

    /// Letters of every submitted cell, grouped by the cell's color
    #[must_use]
    pub fn keyboard_colors(&self) -> KeyboardColors {
        let mut colors = KeyboardColors::default();
        for (row, cells) in self.grid.iter_rows().enumerate().take(self.cursor.row) {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(letter) = *cell {
                    colors.record(letter, self.cell_color(row, col));
                }
            }
        }
        colors
    }
}
