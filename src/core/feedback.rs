//! Per-cell feedback colors
//!
//! A submitted cell is colored by comparing its letter with the target word:
//! - Exact: same letter at the same column
//! - Present: letter appears elsewhere in the word
//! - Absent: letter not in the word (or the cell is empty)
//!
//! Cells of rows that have not been submitted yet are Neutral.

use super::Word;

/// Feedback color of a single grid cell or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Not revealed yet
    Neutral,
    /// Letter not in the target word
    Absent,
    /// Letter in the target word, wrong position
    Present,
    /// Letter in the correct position
    Exact,
}

impl Feedback {
    /// Evaluate a submitted cell against the target word
    ///
    /// Unlike the official game, repeated letters are not rationed: every
    /// occurrence of a letter found anywhere in the word is at least Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{Feedback, Word};
    ///
    /// let target = Word::new("hello").unwrap();
    /// assert_eq!(Feedback::evaluate(Some(b'h'), 0, &target), Feedback::Exact);
    /// assert_eq!(Feedback::evaluate(Some(b'l'), 0, &target), Feedback::Present);
    /// assert_eq!(Feedback::evaluate(Some(b'w'), 0, &target), Feedback::Absent);
    /// assert_eq!(Feedback::evaluate(None, 0, &target), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(cell: Option<u8>, column: usize, target: &Word) -> Self {
        let Some(letter) = cell else {
            return Self::Absent;
        };

        if target.char_at(column) == Some(letter) {
            Self::Exact
        } else if target.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Neutral => '⬛',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> Word {
        Word::new("hello").unwrap()
    }

    #[test]
    fn exact_when_same_column() {
        let target = hello();
        for (col, &letter) in target.chars().iter().enumerate() {
            assert_eq!(Feedback::evaluate(Some(letter), col, &target), Feedback::Exact);
        }
    }

    #[test]
    fn present_regardless_of_position() {
        let target = hello();
        // "l" sits at columns 2 and 3 of "hello"
        assert_eq!(Feedback::evaluate(Some(b'l'), 0, &target), Feedback::Present);
        assert_eq!(Feedback::evaluate(Some(b'l'), 4, &target), Feedback::Present);
        assert_eq!(Feedback::evaluate(Some(b'o'), 1, &target), Feedback::Present);
    }

    #[test]
    fn repeated_letters_are_not_rationed() {
        // Three "l"s against a word with two: each one is still colored
        let target = hello();
        let colors: Vec<_> = [b'l', b'l', b'l']
            .iter()
            .enumerate()
            .map(|(col, &l)| Feedback::evaluate(Some(l), col, &target))
            .collect();
        assert_eq!(
            colors,
            vec![Feedback::Present, Feedback::Present, Feedback::Exact]
        );
    }

    #[test]
    fn absent_letters_and_empty_cells() {
        let target = hello();
        assert_eq!(Feedback::evaluate(Some(b'w'), 0, &target), Feedback::Absent);
        assert_eq!(Feedback::evaluate(None, 2, &target), Feedback::Absent);
    }

    #[test]
    fn column_outside_word_never_exact() {
        let target = hello();
        assert_eq!(Feedback::evaluate(Some(b'h'), 9, &target), Feedback::Present);
    }

    #[test]
    fn ordering_follows_precedence() {
        assert!(Feedback::Exact > Feedback::Present);
        assert!(Feedback::Present > Feedback::Absent);
        assert!(Feedback::Absent > Feedback::Neutral);
    }

    #[test]
    fn emoji() {
        assert_eq!(Feedback::Exact.to_emoji(), '🟩');
        assert_eq!(Feedback::Present.to_emoji(), '🟨');
        assert_eq!(Feedback::Absent.to_emoji(), '⬜');
        assert_eq!(Feedback::Neutral.to_emoji(), '⬛');
    }
}
