//! Key tokens emitted by the input surface

use std::fmt;
use std::str::FromStr;

/// A single key press: a letter or one of the two control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A lowercase ASCII letter
    Letter(u8),
    /// Remove the last letter of the active row
    Clear,
    /// Submit the active row
    Submit,
}

/// Error type for unrecognized key tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyError(String);

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown key '{}'", self.0)
    }
}

impl std::error::Error for KeyError {}

impl Key {
    /// Build a letter key, normalizing to lowercase
    ///
    /// Returns `None` for anything other than an ASCII letter.
    #[must_use]
    pub fn letter(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_lowercase() as u8))
    }

    /// Map a typed character to a key
    ///
    /// Newlines submit, backspace/delete and `<` clear.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Key;
    ///
    /// assert_eq!(Key::from_char('H'), Some(Key::Letter(b'h')));
    /// assert_eq!(Key::from_char('\n'), Some(Key::Submit));
    /// assert_eq!(Key::from_char('<'), Some(Key::Clear));
    /// assert_eq!(Key::from_char('3'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\n' | '\r' => Some(Self::Submit),
            '\x08' | '\x7f' | '<' => Some(Self::Clear),
            _ => Self::letter(ch),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(key) = Self::letter(ch)
        {
            return Ok(key);
        }

        match s.to_ascii_lowercase().as_str() {
            "enter" | "submit" => Ok(Self::Submit),
            "clear" | "back" | "backspace" | "del" => Ok(Self::Clear),
            _ => Err(KeyError(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{}", char::from(*letter)),
            Self::Clear => write!(f, "CLEAR"),
            Self::Submit => write!(f, "ENTER"),
        }
    }
}
