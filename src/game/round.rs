//! State of the active round
//!
//! `RoundState` is plain data plus the primitive edits the engine performs on
//! it. It never talks to the sink or the statistics store; the engine decides
//! when each edit is allowed.

use super::rules::MAX_ATTEMPTS;
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Logical player slot in a hot-seat match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// 1 or 2
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// 0 or 1, for per-player arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// What the active multiplayer participant is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Setter,
    Guesser,
}

/// Who a round belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    SinglePlayer,
    /// `player` is the participant currently at the keyboard
    Multiplayer { player: Player, role: Role },
}

impl Mode {
    /// Statistics bucket for this mode
    #[must_use]
    pub const fn kind(self) -> GameMode {
        match self {
            Self::SinglePlayer => GameMode::SinglePlayer,
            Self::Multiplayer { .. } => GameMode::Multiplayer,
        }
    }

    /// Player at the keyboard, if multiplayer
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::SinglePlayer => None,
            Self::Multiplayer { player, .. } => Some(player),
        }
    }
}

/// Mode without player detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Multiplayer only: the setter is typing the secret word
    SettingWord,
    /// The guesser is typing guesses
    Guessing,
    /// Won or lost; no further edits
    Completed,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Vec<Feedback>,
}

/// The active round
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Option<Word>,
    word_length: usize,
    mode: Mode,
    phase: Phase,
    attempts: usize,
    buffer: String,
    guesses: Vec<GuessRow>,
    keyboard: FxHashMap<char, Feedback>,
    won: bool,
    score: u32,
}

impl RoundState {
    /// A round in `Guessing` with `secret` as the answer
    #[must_use]
    pub fn guessing(secret: Word, mode: Mode) -> Self {
        let word_length = secret.len();
        Self {
            secret: Some(secret),
            ..Self::blank(word_length, mode, Phase::Guessing)
        }
    }

    /// A round in `SettingWord` waiting for `setter` to enter a secret
    #[must_use]
    pub fn setting(setter: Player, word_length: usize) -> Self {
        Self::blank(
            word_length,
            Mode::Multiplayer {
                player: setter,
                role: Role::Setter,
            },
            Phase::SettingWord,
        )
    }

    fn blank(word_length: usize, mode: Mode, phase: Phase) -> Self {
        Self {
            secret: None,
            word_length,
            mode,
            phase,
            attempts: 0,
            buffer: String::with_capacity(word_length),
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: FxHashMap::default(),
            won: false,
            score: 0,
        }
    }

    /// Append a letter; returns the column written, or `None` if the buffer is full
    pub(crate) fn push_letter(&mut self, letter: char) -> Option<usize> {
        let col = self.buffer.len();
        if col >= self.word_length {
            return None;
        }
        self.buffer.push(letter.to_ascii_uppercase());
        Some(col)
    }

    /// Remove the last letter; returns the column cleared
    pub(crate) fn pop_letter(&mut self) -> Option<usize> {
        self.buffer.pop().map(|_| self.buffer.len())
    }

    /// Empty the buffer; returns how many letters were removed
    pub(crate) fn clear_buffer(&mut self) -> usize {
        let cleared = self.buffer.len();
        self.buffer.clear();
        cleared
    }

    /// Record a dictionary-valid guess and move to the next row
    pub(crate) fn record_guess(&mut self, word: Word, feedback: Vec<Feedback>) {
        debug_assert!(self.attempts < MAX_ATTEMPTS, "attempts beyond the last row");
        for (letter, &fb) in word.text().chars().zip(&feedback) {
            self.keyboard.insert(letter, fb);
        }
        self.guesses.push(GuessRow { word, feedback });
        self.attempts += 1;
        self.buffer.clear();
    }

    pub(crate) fn complete(&mut self, won: bool, score: u32) {
        self.phase = Phase::Completed;
        self.won = won;
        self.score = score;
    }

    /// Secret word; `None` while the setter is still choosing it
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Dictionary-valid guesses submitted so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Grid row of the guess being typed (the last row once completed)
    #[must_use]
    pub fn current_row(&self) -> usize {
        if self.phase == Phase::Completed {
            self.attempts.saturating_sub(1)
        } else {
            self.attempts
        }
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer holds a full word
    #[must_use]
    pub fn is_buffer_full(&self) -> bool {
        self.buffer.len() == self.word_length
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRow] {
        &self.guesses
    }

    /// Latest classification of a keyboard key
    #[must_use]
    pub fn key_feedback(&self, letter: char) -> Option<Feedback> {
        self.keyboard.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}
