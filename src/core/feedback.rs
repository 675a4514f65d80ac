//! Guess feedback classification
//!
//! Each guessed letter is classified against the secret word:
//! - `Match`: same letter at the same position
//! - `Present`: letter occurs somewhere else in the secret word
//! - `Absent`: letter does not occur in the secret word
//!
//! Classification is per letter and does not count occurrences: a guess that
//! repeats a letter the secret holds once marks every non-matching repeat as
//! `Present`. Cell and keyboard colouring both rely on this behaviour.

use super::Word;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter in the correct position
    Match,
    /// Letter in the word, wrong position
    Present,
    /// Letter not in the word
    Absent,
}

impl Feedback {
    /// Classify `letter` guessed at `position` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::classify('A', 2, &secret), Feedback::Match);
    /// assert_eq!(Feedback::classify('E', 0, &secret), Feedback::Present);
    /// assert_eq!(Feedback::classify('Z', 1, &secret), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn classify(letter: char, position: usize, secret: &Word) -> Self {
        let letter = letter.to_ascii_uppercase();
        if position < secret.len() && secret.char_at(position) == letter {
            Self::Match
        } else if secret.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji tile for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Match => "match",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Calculate per-position feedback for `guess` against `secret`
///
/// # Examples
/// ```
/// use wordle_duel::core::{Feedback, Word, row_feedback};
///
/// let guess = Word::new("slate").unwrap();
/// let secret = Word::new("crane").unwrap();
/// assert_eq!(
///     row_feedback(&guess, &secret),
///     vec![Feedback::Absent, Feedback::Absent, Feedback::Match, Feedback::Absent, Feedback::Match]
/// );
/// ```
#[must_use]
pub fn row_feedback(guess: &Word, secret: &Word) -> Vec<Feedback> {
    guess
        .text()
        .chars()
        .enumerate()
        .map(|(i, letter)| Feedback::classify(letter, i, secret))
        .collect()
}

/// Render a feedback row as emoji tiles
#[must_use]
pub fn to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|f| f.to_emoji()).collect()
}

/// Whether every position in the row is a `Match`
#[must_use]
pub fn is_perfect(row: &[Feedback]) -> bool {
    !row.is_empty() && row.iter().all(|&f| f == Feedback::Match)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn feedback_all_absent() {
        let row = row_feedback(&word("abcde"), &word("fghij"));
        assert!(row.iter().all(|&f| f == Feedback::Absent));
    }

    #[test]
    fn feedback_all_match() {
        let row = row_feedback(&word("crane"), &word("crane"));
        assert!(is_perfect(&row));
        assert_eq!(to_emoji(&row), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_is_case_insensitive() {
        let secret = word("crane");
        assert_eq!(Feedback::classify('c', 0, &secret), Feedback::Match);
        assert_eq!(Feedback::classify('r', 0, &secret), Feedback::Present);
    }

    #[test]
    fn duplicate_letters_are_not_counted() {
        // SPEED vs CRANE: CRANE holds a single E, yet both E's are Present
        let row = row_feedback(&word("speed"), &word("crane"));
        assert_eq!(
            row,
            vec![
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Present,
                Feedback::Present,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_letters_with_one_match() {
        // ROBOT vs FLOOR: second O matches, first O still Present
        let row = row_feedback(&word("robot"), &word("floor"));
        assert_eq!(
            row,
            vec![
                Feedback::Present,
                Feedback::Present,
                Feedback::Absent,
                Feedback::Match,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn six_letter_feedback() {
        let row = row_feedback(&word("planet"), &word("plenty"));
        assert_eq!(
            row,
            vec![
                Feedback::Match,
                Feedback::Match,
                Feedback::Absent,
                Feedback::Match,
                Feedback::Present,
                Feedback::Present,
            ]
        );
    }

    #[test]
    fn perfect_requires_non_empty_row() {
        assert!(!is_perfect(&[]));
        assert!(!is_perfect(&[Feedback::Match, Feedback::Present]));
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::Match.to_string(), "match");
        assert_eq!(Feedback::Absent.to_emoji(), '⬜');
    }
}
