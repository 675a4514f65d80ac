//! In-memory game statistics
//!
//! Counters live for the lifetime of the process. Single-player counters are
//! kept per word length; multiplayer counters per word length and per player
//! slot, where the player is always the guesser of the game being counted.

use crate::game::rules::SUPPORTED_WORD_LENGTHS;
use crate::game::{GameMode, Mode, Player};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, warn};

/// Counters for one word length and one player slot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsEntry {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_attempts_for_wins: u32,
    pub total_score: u32,
}

impl StatsEntry {
    /// Wins divided by games played, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.games_played)
    }

    /// Average attempts per win, 0 when there are no wins
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        ratio(self.total_attempts_for_wins, self.wins)
    }

    /// Average score per game played, 0 when no games were played
    #[must_use]
    pub fn average_score(&self) -> f64 {
        ratio(self.total_score, self.games_played)
    }

    fn combined(&self, other: &Self) -> Self {
        Self {
            games_played: self.games_played + other.games_played,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            total_attempts_for_wins: self.total_attempts_for_wins + other.total_attempts_for_wins,
            total_score: self.total_score + other.total_score,
        }
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// Aggregate view of one mode at one word length
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub mode: GameMode,
    pub word_length: usize,
    pub totals: StatsEntry,
    /// Per-player breakdown, multiplayer only
    pub players: Option<[StatsEntry; 2]>,
}

impl StatsSnapshot {
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.totals.games_played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.totals.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.totals.losses
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.totals.win_rate()
    }

    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        self.totals.average_attempts()
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.totals.total_score
    }

    /// Average score per game played across every player
    #[must_use]
    pub fn average_score(&self) -> f64 {
        self.totals.average_score()
    }

    /// Completed role-swap pairs, multiplayer only
    ///
    /// Counts resolved games, so a sub-round still being guessed does not
    /// complete a pair.
    #[must_use]
    pub const fn rounds_played(&self) -> Option<u32> {
        match self.mode {
            GameMode::SinglePlayer => None,
            GameMode::Multiplayer => Some((self.totals.wins + self.totals.losses) / 2),
        }
    }

    /// Counters for one player, multiplayer only
    #[must_use]
    pub fn player(&self, player: Player) -> Option<&StatsEntry> {
        self.players.as_ref().map(|players| &players[player.index()])
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.players {
            None => {
                writeln!(f, "{}-Letter Mode:", self.word_length)?;
                writeln!(f, "Games Played: {}", self.totals.games_played)?;
                writeln!(f, "Wins: {}", self.totals.wins)?;
                writeln!(f, "Losses: {}", self.totals.losses)?;
                writeln!(f)?;
                writeln!(f, "Win Rate: {:.2}%", self.win_rate() * 100.0)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Average Guesses per Win: {:.2}",
                    self.average_attempts()
                )?;
                write!(f, "Total Score: {}", self.totals.total_score)
            }
            Some([one, two]) => {
                writeln!(f, "{}-Letter Multiplayer:", self.word_length)?;
                side_by_side(f, "Wins", one.wins, two.wins)?;
                side_by_side(f, "Losses", one.losses, two.losses)?;
                side_by_side(f, "Total Score", one.total_score, two.total_score)?;
                writeln!(f)?;
                writeln!(f, "Rounds Played: {}", self.rounds_played().unwrap_or(0))?;
                write!(f, "Total Games Played: {}", self.totals.games_played)
            }
        }
    }
}

fn side_by_side(f: &mut fmt::Formatter<'_>, label: &str, one: u32, two: u32) -> fmt::Result {
    let left = format!("Player 1 {label}: {one}");
    writeln!(f, "{left:<28}Player 2 {label}: {two}")
}

/// Process-lifetime statistics for every supported word length
#[derive(Debug, Clone)]
pub struct StatisticsStore {
    single_player: FxHashMap<usize, StatsEntry>,
    multiplayer: FxHashMap<usize, [StatsEntry; 2]>,
}

impl Default for StatisticsStore {
    fn default() -> Self {
        Self::new(&SUPPORTED_WORD_LENGTHS)
    }
}

impl StatisticsStore {
    /// Store with zeroed entries for each of `word_lengths`
    #[must_use]
    pub fn new(word_lengths: &[usize]) -> Self {
        Self {
            single_player: word_lengths
                .iter()
                .map(|&len| (len, StatsEntry::default()))
                .collect(),
            multiplayer: word_lengths
                .iter()
                .map(|&len| (len, [StatsEntry::default(); 2]))
                .collect(),
        }
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        self.single_player.values_mut().for_each(|e| *e = StatsEntry::default());
        self.multiplayer
            .values_mut()
            .for_each(|e| *e = [StatsEntry::default(); 2]);
    }

    fn entry_mut(&mut self, mode: Mode, word_length: usize) -> Option<&mut StatsEntry> {
        let entry = match mode.player() {
            None => self.single_player.get_mut(&word_length),
            Some(player) => self
                .multiplayer
                .get_mut(&word_length)
                .map(|players| &mut players[player.index()]),
        };
        if entry.is_none() {
            warn!(word_length, ?mode, "No statistics entry for word length");
        }
        entry
    }

    /// Count a game as started
    pub fn record_game_start(&mut self, mode: Mode, word_length: usize) {
        if let Some(entry) = self.entry_mut(mode, word_length) {
            entry.games_played += 1;
            debug!(?mode, word_length, games = entry.games_played, "Game started");
        }
    }

    /// Count a win after `attempts` guesses worth `score`
    pub fn record_win(&mut self, mode: Mode, word_length: usize, attempts: usize, score: u32) {
        if let Some(entry) = self.entry_mut(mode, word_length) {
            entry.wins += 1;
            entry.total_attempts_for_wins += u32::try_from(attempts).unwrap_or(u32::MAX);
            entry.total_score += score;
        }
    }

    /// Count a loss
    pub fn record_loss(&mut self, mode: Mode, word_length: usize) {
        if let Some(entry) = self.entry_mut(mode, word_length) {
            entry.losses += 1;
        }
    }

    /// Aggregate view for a mode at a word length
    ///
    /// Returns `None` for word lengths the store does not track.
    #[must_use]
    pub fn snapshot(&self, mode: GameMode, word_length: usize) -> Option<StatsSnapshot> {
        match mode {
            GameMode::SinglePlayer => {
                self.single_player
                    .get(&word_length)
                    .map(|&totals| StatsSnapshot {
                        mode,
                        word_length,
                        totals,
                        players: None,
                    })
            }
            GameMode::Multiplayer => {
                self.multiplayer
                    .get(&word_length)
                    .map(|&[one, two]| StatsSnapshot {
                        mode,
                        word_length,
                        totals: one.combined(&two),
                        players: Some([one, two]),
                    })
            }
        }
    }

    /// Tracked word lengths, ascending
    #[must_use]
    pub fn word_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.single_player.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Text report covering every tracked length in both modes
    #[must_use]
    pub fn summary(&self) -> String {
        let lengths = self.word_lengths();
        let single = lengths
            .iter()
            .filter_map(|&len| self.snapshot(GameMode::SinglePlayer, len));
        let multi = lengths
            .iter()
            .filter_map(|&len| self.snapshot(GameMode::Multiplayer, len));

        single
            .chain(multi)
            .map(|snapshot| snapshot.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
