//! Guess grid engine
//!
//! [`GameState`] holds a full snapshot and exposes pure transitions.
//! [`Engine`] owns the current snapshot, feeds it key presses one at a time and
//! hands terminal notifications back to the caller.

mod grid;
mod keyboard;
mod state;

pub use grid::{Cell, Cursor, Grid};
pub use keyboard::KeyboardColors;
pub use state::{GameState, Ignored, KeyOutcome, Notification, Phase, Step};

use crate::core::{Key, Word};

/// Owner of the current game snapshot
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    attempts: usize,
}

impl Engine {
    /// Start a game for `target` with `attempts` guess rows
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{Key, Word};
    /// use wordle_grid::engine::{Engine, Notification, Phase};
    ///
    /// let mut engine = Engine::new(Word::new("hello").unwrap(), 6);
    /// for ch in "hello".chars() {
    ///     engine.handle_key(Key::letter(ch).unwrap());
    /// }
    /// assert_eq!(engine.handle_key(Key::Submit), Some(Notification::Won));
    /// assert_eq!(engine.state().phase(), Phase::Won);
    /// ```
    #[must_use]
    pub fn new(target: Word, attempts: usize) -> Self {
        Self {
            state: GameState::new(target, attempts),
            attempts,
        }
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply a key press and return the notification it fired, if any
    pub fn handle_key(&mut self, key: Key) -> Option<Notification> {
        self.apply(key).1
    }

    /// Apply a key press, reporting what it did
    pub fn apply(&mut self, key: Key) -> (KeyOutcome, Option<Notification>) {
        let Step {
            state,
            outcome,
            notification,
        } = self.state.step(key);

        log::trace!("key {key}: {outcome:?}");
        if let Some(notification) = notification {
            log::info!(
                "game over: {notification:?} after {} of {} rows",
                state.submitted_rows(),
                self.attempts
            );
        }

        self.state = state;
        (outcome, notification)
    }

    /// Discard the current game and start over with the same word
    pub fn restart(&mut self) {
        log::debug!("restarting game");
        self.state = GameState::new(self.state.target().clone(), self.attempts);
    }
}
