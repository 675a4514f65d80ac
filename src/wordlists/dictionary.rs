//! Dictionary of valid words per word length
//!
//! Built once at startup and read-only afterwards. Each word length keeps a
//! set for membership tests and an ordered list of the same words for random
//! draws.

use super::{embedded, loader};
use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::{info, warn};

/// Valid words keyed by word length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    valid_words: FxHashMap<usize, FxHashSet<String>>,
    word_lists: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary holding the embedded lists for every supported length
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionary = Self::new();
        for word_length in embedded::LENGTHS {
            dictionary.load_words(word_length);
        }
        dictionary
    }

    /// Build a dictionary for a single length from raw words
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(5, ["crane", "slate", "toolong"]);
    /// assert_eq!(dictionary.word_count(5), 2);
    /// assert!(dictionary.is_valid("Crane", 5));
    /// ```
    #[must_use]
    pub fn from_words<'s, I>(word_length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut dictionary = Self::new();
        dictionary.insert_words(word_length, words);
        dictionary
    }

    /// Load the embedded word list for `word_length`
    ///
    /// A length with no embedded list is logged and left empty.
    pub fn load_words(&mut self, word_length: usize) {
        match embedded::for_length(word_length) {
            Some(list) => {
                self.insert_words(word_length, list.iter().copied());
            }
            None => {
                warn!(word_length, "No embedded word list for this length");
                self.ensure_length(word_length);
            }
        }
    }

    /// Load words of `word_length` from a file, replacing nothing already loaded
    ///
    /// An unreadable file is logged and leaves the length as it was.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, word_length: usize, path: P) {
        let path = path.as_ref();
        match loader::load_from_file(path, word_length) {
            Ok(words) => {
                self.insert(word_length, words);
            }
            Err(e) => {
                warn!(
                    word_length,
                    path = %path.display(),
                    error = %e,
                    "Error loading word list"
                );
                self.ensure_length(word_length);
            }
        }
    }

    /// Normalize and add raw words of `word_length`; returns how many were new
    pub fn insert_words<'s, I>(&mut self, word_length: usize, words: I) -> usize
    where
        I: IntoIterator<Item = &'s str>,
    {
        self.insert(word_length, loader::words_from_lines(words, word_length))
    }

    fn insert(&mut self, word_length: usize, words: Vec<Word>) -> usize {
        self.ensure_length(word_length);
        let set = self.valid_words.entry(word_length).or_default();
        let list = self.word_lists.entry(word_length).or_default();

        let mut added = 0;
        for word in words {
            if set.insert(word.text().to_string()) {
                list.push(word);
                added += 1;
            }
        }

        info!(word_length, added, total = list.len(), "Loaded words");
        added
    }

    fn ensure_length(&mut self, word_length: usize) {
        self.valid_words.entry(word_length).or_default();
        self.word_lists.entry(word_length).or_default();
    }

    /// Case-insensitive membership test; false for unsupported lengths
    #[must_use]
    pub fn is_valid(&self, word: &str, word_length: usize) -> bool {
        let word = word.trim();
        word.len() == word_length
            && self
                .valid_words
                .get(&word_length)
                .is_some_and(|set| set.contains(&word.to_ascii_uppercase()))
    }

    /// Draw a uniformly random word of `word_length`
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if no words are loaded for the length.
    pub fn random_word(&self, word_length: usize) -> Result<&Word, GameError> {
        self.random_word_with(word_length, &mut rand::rng())
    }

    /// Draw a random word using the supplied generator
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if no words are loaded for the length.
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        word_length: usize,
        rng: &mut R,
    ) -> Result<&Word, GameError> {
        self.word_lists
            .get(&word_length)
            .and_then(|list| list.choose(rng))
            .ok_or(GameError::NoWordsAvailable { word_length })
    }

    /// Parse `word` as a guess of `word_length`
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` unless `word` is a loaded word of that length.
    pub fn check_guess(&self, word: &str, word_length: usize) -> Result<Word, GameError> {
        self.lookup(word, word_length)
            .ok_or_else(|| GameError::InvalidGuess {
                word: word.trim().to_ascii_uppercase(),
            })
    }

    /// Parse `word` as a secret word of `word_length`
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecretWord` unless `word` is a loaded word of
    /// that length.
    pub fn check_secret(&self, word: &str, word_length: usize) -> Result<Word, GameError> {
        self.lookup(word, word_length)
            .ok_or_else(|| GameError::InvalidSecretWord {
                word: word.trim().to_ascii_uppercase(),
                word_length,
            })
    }

    fn lookup(&self, word: &str, word_length: usize) -> Option<Word> {
        Word::with_length(word, word_length)
            .ok()
            .filter(|w| self.is_valid(w.text(), word_length))
    }

    /// Whether any words are loaded for `word_length`
    #[must_use]
    pub fn is_supported(&self, word_length: usize) -> bool {
        self.word_count(word_length) > 0
    }

    /// Number of words loaded for `word_length`
    #[must_use]
    pub fn word_count(&self, word_length: usize) -> usize {
        self.valid_words.get(&word_length).map_or(0, FxHashSet::len)
    }

    /// All words of `word_length`, in load order
    #[must_use]
    pub fn words(&self, word_length: usize) -> &[Word] {
        self.word_lists.get(&word_length).map_or(&[], Vec::as_slice)
    }

    /// Word lengths with at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .word_lists
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(&len, _)| len)
            .collect();
        lengths.sort_unstable();
        lengths
    }
}
