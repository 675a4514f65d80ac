//! Error types shared across the game engine

use std::fmt;

/// Errors raised by the dictionary, the game engine and the role coordinator
///
/// Guess and secret-word rejections are normally reported to the player as
/// alerts and never escape the engine; they exist here so that callers which
/// bypass the engine (e.g. validating a word up front) can share one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess is not a dictionary word
    InvalidGuess { word: String },
    /// Setter's secret word failed the length or dictionary check
    InvalidSecretWord { word: String, word_length: usize },
    /// No words are loaded for the requested length
    NoWordsAvailable { word_length: usize },
    /// Word length outside the configured set
    UnsupportedWordLength(usize),
    /// Operation requires the current round to be completed
    RoundInProgress,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess { word } => write!(f, "'{word}' is not in the dictionary"),
            Self::InvalidSecretWord { word, word_length } => {
                write!(f, "'{word}' is not a valid {word_length}-letter word")
            }
            Self::NoWordsAvailable { word_length } => {
                write!(f, "No words available for length {word_length}")
            }
            Self::UnsupportedWordLength(len) => {
                write!(f, "Word length {len} is not supported")
            }
            Self::RoundInProgress => write!(f, "The current round has not finished yet"),
        }
    }
}

impl std::error::Error for GameError {}
