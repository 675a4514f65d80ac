//! Round lifecycle engine
//!
//! The engine owns the active round and the statistics store, borrows the
//! dictionary, and reports every visible change to its presentation sink.
//! All operations run to completion synchronously; `&mut self` is the only
//! synchronization there is.

use super::round::{Mode, Phase, Player, Role, RoundState};
use super::rules::{MAX_ATTEMPTS, score_for};
use super::sink::PresentationSink;
use crate::core::{Word, is_perfect, row_feedback};
use crate::error::GameError;
use crate::stats::StatisticsStore;
use crate::wordlists::Dictionary;
use tracing::{debug, info, instrument, warn};

/// Result of a submit press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit: incomplete guess, no active round, or round over
    Ignored,
    /// Word not accepted; an alert was shown and the row cleared
    Rejected,
    /// Setter's word accepted; the other player now guesses
    SecretAccepted,
    /// Valid guess, round continues
    Continue { attempts: usize },
    /// Guess matched the secret
    Won { attempts: usize, score: u32 },
    /// Final attempt used without a match
    Lost { attempts: usize },
}

impl SubmitOutcome {
    /// Whether this submission ended the round
    #[must_use]
    pub const fn is_round_over(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Game engine for single-player rounds and multiplayer sub-rounds
pub struct GameEngine<'a, S: PresentationSink> {
    dictionary: &'a Dictionary,
    stats: StatisticsStore,
    sink: S,
    round: Option<RoundState>,
}

impl<'a, S: PresentationSink> GameEngine<'a, S> {
    /// Create an engine with fresh statistics
    pub fn new(dictionary: &'a Dictionary, sink: S) -> Self {
        Self::with_stats(dictionary, sink, StatisticsStore::default())
    }

    /// Create an engine that continues counting into `stats`
    pub const fn with_stats(dictionary: &'a Dictionary, sink: S, stats: StatisticsStore) -> Self {
        Self {
            dictionary,
            stats,
            sink,
            round: None,
        }
    }

    /// Start a single-player round with a random secret word
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if the dictionary has no words of
    /// `word_length`; the previous round is left untouched.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, word_length: usize) -> Result<(), GameError> {
        let secret = self.dictionary.random_word(word_length)?.clone();
        self.begin_single_player(secret);
        Ok(())
    }

    /// Start a single-player round with a chosen secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecretWord` if `secret` is not a dictionary word.
    #[instrument(skip(self))]
    pub fn start_round_with_secret(&mut self, secret: &str) -> Result<(), GameError> {
        let word = self.dictionary.check_secret(secret, secret.trim().len())?;
        self.begin_single_player(word);
        Ok(())
    }

    fn begin_single_player(&mut self, secret: Word) {
        let word_length = secret.len();
        self.round = Some(RoundState::guessing(secret, Mode::SinglePlayer));
        self.stats.record_game_start(Mode::SinglePlayer, word_length);
        info!(word_length, "Started single-player round");
    }

    /// Enter `SettingWord` for `setter`
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if secrets of `word_length` could
    /// never be validated.
    #[instrument(skip(self))]
    pub fn start_setting_phase(
        &mut self,
        setter: Player,
        word_length: usize,
    ) -> Result<(), GameError> {
        if !self.dictionary.is_supported(word_length) {
            return Err(GameError::NoWordsAvailable { word_length });
        }
        self.round = Some(RoundState::setting(setter, word_length));
        self.sink.on_new_round_ui(Some(setter), word_length);
        info!(%setter, word_length, "Setting phase started");
        Ok(())
    }

    /// Validate the setter's secret word and hand the round to the guesser
    ///
    /// Only meaningful in `SettingWord`; anywhere else it is ignored.
    pub fn submit_secret_word(&mut self, word: &str) -> SubmitOutcome {
        let Some(round) = self.round.as_mut() else {
            return SubmitOutcome::Ignored;
        };
        if round.phase() != Phase::SettingWord {
            warn!(phase = ?round.phase(), "Secret word submitted outside the setting phase");
            return SubmitOutcome::Ignored;
        }

        let word_length = round.word_length();
        let Some(setter) = round.mode().player() else {
            return SubmitOutcome::Ignored;
        };

        let secret = self.dictionary.check_secret(word, word_length).ok();

        let Some(secret) = secret else {
            debug!(word, word_length, "Secret word rejected");
            round.clear_buffer();
            for col in 0..word_length {
                self.sink.on_cell_update(0, col, None);
            }
            self.sink.on_alert(&format!(
                "Invalid word! Please enter a valid {word_length}-letter word."
            ));
            return SubmitOutcome::Rejected;
        };

        let mode = Mode::Multiplayer {
            player: setter.other(),
            role: Role::Guesser,
        };
        self.round = Some(RoundState::guessing(secret, mode));
        self.stats.record_game_start(mode, word_length);
        self.sink.on_new_round_ui(None, word_length);
        info!(%setter, guesser = %setter.other(), word_length, "Secret word set");
        SubmitOutcome::SecretAccepted
    }

    /// Type a letter into the current row
    ///
    /// Returns false when the letter was ignored: not alphabetic, row full, no
    /// active round, or round over.
    pub fn press_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(round) = self.round.as_mut().filter(|r| !r.is_completed()) else {
            return false;
        };

        let row = round.current_row();
        match round.push_letter(letter) {
            Some(col) => {
                self.sink
                    .on_cell_update(row, col, Some(letter.to_ascii_uppercase()));
                true
            }
            None => false,
        }
    }

    /// Erase the last letter of the current row
    pub fn backspace(&mut self) -> bool {
        let Some(round) = self.round.as_mut().filter(|r| !r.is_completed()) else {
            return false;
        };

        let row = round.current_row();
        match round.pop_letter() {
            Some(col) => {
                self.sink.on_cell_update(row, col, None);
                true
            }
            None => false,
        }
    }

    /// Submit the current row: a guess while guessing, the secret while setting
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.phase() {
            Some(Phase::SettingWord) => {
                let word = self
                    .round
                    .as_ref()
                    .map(|r| r.buffer().to_string())
                    .unwrap_or_default();
                self.submit_secret_word(&word)
            }
            Some(Phase::Guessing) => self.submit_guess(),
            Some(Phase::Completed) | None => SubmitOutcome::Ignored,
        }
    }

    fn submit_guess(&mut self) -> SubmitOutcome {
        let Some(round) = self.round.as_mut() else {
            return SubmitOutcome::Ignored;
        };
        if !round.is_buffer_full() {
            return SubmitOutcome::Ignored;
        }
        let Some(secret) = round.secret().cloned() else {
            return SubmitOutcome::Ignored;
        };

        let word_length = round.word_length();
        let row = round.current_row();
        let guess = self.dictionary.check_guess(round.buffer(), word_length).ok();

        let Some(guess) = guess else {
            debug!(guess = round.buffer(), row, "Guess rejected");
            round.clear_buffer();
            for col in 0..word_length {
                self.sink.on_cell_update(row, col, None);
            }
            self.sink.on_alert(&format!(
                "Invalid word! Please enter a valid {word_length}-letter word from the dictionary."
            ));
            return SubmitOutcome::Rejected;
        };

        let feedback = row_feedback(&guess, &secret);
        for (col, &fb) in feedback.iter().enumerate() {
            self.sink.on_cell_feedback(row, col, fb);
        }
        for (letter, &fb) in guess.text().chars().zip(&feedback) {
            self.sink.on_key_feedback(letter, fb);
        }

        let solved = is_perfect(&feedback);
        debug!(guess = %guess, row, solved, "Guess accepted");
        round.record_guess(guess, feedback);
        let attempts = round.attempts();

        if solved {
            let score = score_for(attempts);
            self.complete_round(true, score);
            SubmitOutcome::Won { attempts, score }
        } else if attempts >= MAX_ATTEMPTS {
            self.complete_round(false, 0);
            SubmitOutcome::Lost { attempts }
        } else {
            SubmitOutcome::Continue { attempts }
        }
    }

    /// Resolve the round once; later calls for the same round do nothing
    pub(crate) fn complete_round(&mut self, won: bool, score: u32) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.is_completed() {
            return;
        }
        round.complete(won, score);

        let mode = round.mode();
        let word_length = round.word_length();
        let attempts = round.attempts();
        let secret = round.secret().map(Word::text).unwrap_or_default().to_string();

        if won {
            self.stats.record_win(mode, word_length, attempts, score);
        } else {
            self.stats.record_loss(mode, word_length);
        }

        let message = match (mode.player(), won) {
            (None, true) => format!(
                "Congratulations! You've guessed the word in {attempts} attempts. Score: {score}"
            ),
            (None, false) => format!("Game Over! The word was: {secret}. Score: 0"),
            (Some(player), true) => format!(
                "{player} wins! They guessed the word in {attempts} attempts.\nScore: {score}"
            ),
            (Some(player), false) => format!(
                "Round over. {player} couldn't guess the word: {secret}\nNo points awarded."
            ),
        };
        let stats_text = self
            .stats
            .snapshot(mode.kind(), word_length)
            .map(|snapshot| snapshot.to_string())
            .unwrap_or_default();

        info!(?mode, word_length, won, attempts, score, "Round completed");
        self.sink.on_alert(&message);
        self.sink.on_round_ended(&mode, &stats_text);
    }

    /// The active round, if one was started
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Phase of the active round
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(RoundState::phase)
    }

    #[must_use]
    pub const fn stats(&self) -> &StatisticsStore {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the engine, keeping its statistics and sink
    pub fn into_parts(self) -> (StatisticsStore, S) {
        (self.stats, self.sink)
    }
}
