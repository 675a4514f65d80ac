//! Word list loading utilities
//!
//! Provides functions to load word lists from files or any source of lines.
//! Every loader normalizes entries (trim, uppercase) and keeps only words of the
//! requested length; anything else is skipped rather than rejected.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of exactly `word_length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_duel::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), word_length))
}

/// Normalize raw lines into words of `word_length`, skipping malformed entries
///
/// # Examples
/// ```
/// use wordle_duel::wordlists::loader::words_from_lines;
/// use wordle_duel::wordlists::WORDS5;
///
/// let words = words_from_lines(WORDS5.iter().copied(), 5);
/// assert_eq!(words.len(), WORDS5.len());
/// ```
pub fn words_from_lines<'s, I>(lines: I, word_length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'s str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_length(trimmed, word_length).ok()
            }
        })
        .collect()
}
