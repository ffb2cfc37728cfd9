//! Keyboard letter sets derived from submitted cells

use std::collections::BTreeSet;

use crate::core::Feedback;

/// Letters of all submitted cells grouped by the color each cell received
///
/// The three sets may overlap: a letter guessed in two cells with two
/// different outcomes belongs to both sets. Choosing one color per key is left
/// to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardColors {
    /// Letters seen in the correct position
    pub exact: BTreeSet<u8>,
    /// Letters seen in the word but in the wrong position
    pub present: BTreeSet<u8>,
    /// Letters seen that are not in the word
    pub absent: BTreeSet<u8>,
}

impl KeyboardColors {
    /// Record one submitted cell
    ///
    /// Neutral cells are not recorded.
    pub(crate) fn record(&mut self, letter: u8, feedback: Feedback) {
        let set = match feedback {
            Feedback::Exact => &mut self.exact,
            Feedback::Present => &mut self.present,
            Feedback::Absent => &mut self.absent,
            Feedback::Neutral => return,
        };
        set.insert(letter);
    }

    /// The set for one feedback color
    ///
    /// Neutral has no set and yields `None`.
    #[must_use]
    pub fn letters(&self, feedback: Feedback) -> Option<&BTreeSet<u8>> {
        match feedback {
            Feedback::Exact => Some(&self.exact),
            Feedback::Present => Some(&self.present),
            Feedback::Absent => Some(&self.absent),
            Feedback::Neutral => None,
        }
    }

    /// Whether no submitted letter has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_groups_by_color() {
        let mut colors = KeyboardColors::default();
        assert!(colors.is_empty());

        colors.record(b'h', Feedback::Exact);
        colors.record(b'l', Feedback::Present);
        colors.record(b'l', Feedback::Exact);
        colors.record(b'w', Feedback::Absent);
        colors.record(b'q', Feedback::Neutral);

        assert_eq!(colors.exact, BTreeSet::from([b'h', b'l']));
        assert_eq!(colors.present, BTreeSet::from([b'l']));
        assert_eq!(colors.absent, BTreeSet::from([b'w']));
        assert!(!colors.is_empty());
    }

    #[test]
    fn letters_by_feedback() {
        let mut colors = KeyboardColors::default();
        colors.record(b'a', Feedback::Absent);

        assert_eq!(colors.letters(Feedback::Absent), Some(&BTreeSet::from([b'a'])));
        assert_eq!(colors.letters(Feedback::Exact), Some(&BTreeSet::new()));
        assert_eq!(colors.letters(Feedback::Neutral), None);
    }
}
