//! Game configuration

use std::fmt;

use crate::core::{Word, WordError};
use crate::engine::Engine;

/// Word used when none is given
pub const DEFAULT_WORD: &str = "hello";

/// Number of guess rows when none is given
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Largest accepted number of guess rows
pub const MAX_ATTEMPTS: usize = 32;

/// Largest accepted target word length
pub const MAX_WORD_LEN: usize = 16;

/// Settings for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word: String,
    pub attempts: usize,
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWord,
    InvalidCharacters(String),
    WordTooLong(usize),
    NoAttempts,
    TooManyAttempts(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Target word must not be empty"),
            Self::InvalidCharacters(word) => {
                write!(f, "Target word '{word}' must contain only ASCII letters")
            }
            Self::WordTooLong(len) => write!(
                f,
                "Target word has {len} letters, at most {MAX_WORD_LEN} are allowed"
            ),
            Self::NoAttempts => write!(f, "At least one attempt is required"),
            Self::TooManyAttempts(attempts) => write!(
                f,
                "{attempts} attempts requested, at most {MAX_ATTEMPTS} are allowed"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.to_string(),
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(word: impl Into<String>, attempts: usize) -> Self {
        Self {
            word: word.into(),
            attempts,
        }
    }

    /// Validate the configuration and start a game
    ///
    /// # Errors
    /// Returns `ConfigError` if the word is empty, longer than
    /// [`MAX_WORD_LEN`] or has non-letter characters, or if `attempts` is
    /// zero or above [`MAX_ATTEMPTS`].
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::config::{ConfigError, GameConfig};
    ///
    /// let engine = GameConfig::default().build().unwrap();
    /// assert_eq!(engine.state().target().text(), "hello");
    ///
    /// assert_eq!(
    ///     GameConfig::new("hello", 0).build().unwrap_err(),
    ///     ConfigError::NoAttempts
    /// );
    /// ```
    pub fn build(&self) -> Result<Engine, ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.attempts > MAX_ATTEMPTS {
            return Err(ConfigError::TooManyAttempts(self.attempts));
        }

        let word = Word::new(self.word.as_str()).map_err(|e| match e {
            WordError::Empty => ConfigError::EmptyWord,
            WordError::NonAscii | WordError::InvalidCharacters => {
                ConfigError::InvalidCharacters(self.word.clone())
            }
        })?;
        if word.len() > MAX_WORD_LEN {
            return Err(ConfigError::WordTooLong(word.len()));
        }

        log::debug!(
            "new game: {} letters, {} attempts",
            word.len(),
            self.attempts
        );
        Ok(Engine::new(word, self.attempts))
    }
}
