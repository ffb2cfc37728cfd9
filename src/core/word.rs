//! Target word representation
//!
//! A Word stores the letters to guess along with the set of distinct letters
//! used when coloring submitted cells.

use rustc_hash::FxHashSet;
use std::fmt;

/// The word the player must guess
///
/// Letters are stored as lowercase ASCII bytes. The length of the word fixes
/// the number of columns of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Word;
    ///
    /// let word = Word::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("he11o").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Unicode lowercasing maps some non-ASCII letters onto ASCII ones
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().to_vec();

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters (and therefore grid columns)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the letter at a position, if the position is inside the word
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether a row of cells spells this word exactly
    ///
    /// Empty cells never match.
    #[must_use]
    pub fn matches(&self, row: &[Option<u8>]) -> bool {
        row.len() == self.chars.len()
            && row
                .iter()
                .zip(&self.chars)
                .all(|(cell, &expected)| *cell == Some(expected))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.text(), "hello");
        assert_eq!(word.chars(), b"hello");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("HELLO").unwrap();
        assert_eq!(word.text(), "hello");

        let word2 = Word::new("HeLlO").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("keyboard").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("héllo"), Err(WordError::NonAscii));
        assert_eq!(Word::new("hel1o"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("he lo"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_rejects_letters_that_lowercase_to_ascii() {
        // KELVIN SIGN lowercases to 'k'
        assert_eq!(Word::new("\u{212A}ey"), Err(WordError::NonAscii));
        // Dotted capital I lowercases to "i\u{307}"
        assert_eq!(Word::new("\u{130}t"), Err(WordError::NonAscii));
        assert_eq!(Word::new("KEY").unwrap().text(), "key");
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.char_at(0), Some(b'h'));
        assert_eq!(word.char_at(4), Some(b'o'));
        assert_eq!(word.char_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("hello").unwrap();
        assert!(word.has_letter(b'l'));
        assert!(word.has_letter(b'h'));
        assert!(!word.has_letter(b'w'));
        assert!(!word.has_letter(b'L'));
    }

    #[test]
    fn word_matches_row() {
        let word = Word::new("hello").unwrap();
        let full: Vec<Option<u8>> = b"hello".iter().copied().map(Some).collect();
        let other: Vec<Option<u8>> = b"world".iter().copied().map(Some).collect();
        let partial = vec![Some(b'h'), Some(b'e'), None, None, None];

        assert!(word.matches(&full));
        assert!(!word.matches(&other));
        assert!(!word.matches(&partial));
        assert!(!word.matches(&full[..4]));
    }

    #[test]
    fn word_display() {
        let word = Word::new("hello").unwrap();
        assert_eq!(format!("{word}"), "hello");
    }
}
