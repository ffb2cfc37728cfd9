//! Formatting utilities shared by the terminal front ends

use crate::core::Feedback;
use crate::engine::KeyboardColors;

/// Keyboard rows as shown on screen
///
/// The ENTER and CLEAR keys sit at the ends of the last row.
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Resolve one display color for a keyboard key
///
/// A letter can sit in several sets at once; the best outcome wins
/// (Exact over Present over Absent). Letters never submitted are Neutral.
///
/// # Examples
/// ```
/// use wordle_grid::core::Feedback;
/// use wordle_grid::engine::KeyboardColors;
/// use wordle_grid::output::formatters::key_display_color;
///
/// let mut colors = KeyboardColors::default();
/// colors.present.insert(b'l');
/// colors.exact.insert(b'l');
/// assert_eq!(key_display_color(&colors, b'l'), Feedback::Exact);
/// assert_eq!(key_display_color(&colors, b'q'), Feedback::Neutral);
/// ```
#[must_use]
pub fn key_display_color(colors: &KeyboardColors, letter: u8) -> Feedback {
    [Feedback::Exact, Feedback::Present, Feedback::Absent]
        .into_iter()
        .find(|&feedback| {
            colors
                .letters(feedback)
                .is_some_and(|set| set.contains(&letter))
        })
        .unwrap_or(Feedback::Neutral)
}

/// Format a row of feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|feedback| feedback.to_emoji()).collect()
}

/// Uppercase display form of a cell
#[must_use]
pub fn cell_label(cell: Option<u8>) -> String {
    cell.map(|letter| char::from(letter).to_ascii_uppercase())
        .map_or_else(|| " ".to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_color_precedence() {
        let mut colors = KeyboardColors::default();
        colors.absent.insert(b'a');
        colors.present.insert(b'a');
        colors.absent.insert(b'b');
        colors.exact.insert(b'c');
        colors.absent.insert(b'c');

        assert_eq!(key_display_color(&colors, b'a'), Feedback::Present);
        assert_eq!(key_display_color(&colors, b'b'), Feedback::Absent);
        assert_eq!(key_display_color(&colors, b'c'), Feedback::Exact);
        assert_eq!(key_display_color(&colors, b'd'), Feedback::Neutral);
    }

    #[test]
    fn emoji_row() {
        let row = [
            Feedback::Absent,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Exact,
            Feedback::Absent,
        ];
        assert_eq!(feedback_to_emoji(&row), "⬜🟨⬜🟩⬜");
        assert_eq!(feedback_to_emoji(&[Feedback::Neutral; 2]), "⬛⬛");
    }

    #[test]
    fn cell_labels() {
        assert_eq!(cell_label(Some(b'w')), "W");
        assert_eq!(cell_label(None), " ");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }
}
