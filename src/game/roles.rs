//! Hot-seat role rotation
//!
//! Player 1 sets the first secret word. After each sub-round the shell decides
//! when to swap roles; nothing switches automatically.

use super::engine::{GameEngine, SubmitOutcome};
use super::round::{Phase, Player};
use super::sink::PresentationSink;
use crate::error::GameError;
use tracing::{info, instrument, warn};

/// Multiplayer match driver wrapping a [`GameEngine`]
pub struct RoleCoordinator<'a, S: PresentationSink> {
    engine: GameEngine<'a, S>,
    player1_setting: bool,
    word_length: usize,
}

impl<'a, S: PresentationSink> RoleCoordinator<'a, S> {
    /// Wrap `engine`; call [`Self::initialize_match`] before any input
    pub const fn new(engine: GameEngine<'a, S>, word_length: usize) -> Self {
        Self {
            engine,
            player1_setting: true,
            word_length,
        }
    }

    /// Reset to Player 1 setting and enter the setting phase
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if the dictionary has no words of
    /// `word_length`.
    #[instrument(skip(self))]
    pub fn initialize_match(&mut self, word_length: usize) -> Result<(), GameError> {
        self.engine.start_setting_phase(Player::One, word_length)?;
        self.player1_setting = true;
        self.word_length = word_length;
        info!(word_length, "Multiplayer match started");
        Ok(())
    }

    /// Submit a complete secret word on the setter's behalf
    pub fn submit_word(&mut self, word: &str) -> SubmitOutcome {
        self.engine.submit_secret_word(word)
    }

    pub fn press_letter(&mut self, letter: char) -> bool {
        self.engine.press_letter(letter)
    }

    pub fn backspace(&mut self) -> bool {
        self.engine.backspace()
    }

    /// Submit the current row; a finished round is reported but roles stay put
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.engine.submit();
        if outcome.is_round_over() {
            self.on_round_completed(outcome);
        }
        outcome
    }

    /// Note a finished sub-round
    pub fn on_round_completed(&self, outcome: SubmitOutcome) {
        info!(
            setter = %self.setter(),
            guesser = %self.guesser(),
            ?outcome,
            "Sub-round finished; waiting for role switch"
        );
    }

    /// Swap setter and guesser and start the next setting phase
    ///
    /// # Errors
    /// Returns `GameError::RoundInProgress` unless the current sub-round is
    /// completed; roles and round are left as they were.
    #[instrument(skip(self))]
    pub fn switch_roles(&mut self) -> Result<(), GameError> {
        if self.engine.phase() != Some(Phase::Completed) {
            warn!(phase = ?self.engine.phase(), "Role switch requested mid-round");
            return Err(GameError::RoundInProgress);
        }

        let next_setter = self.guesser();
        self.engine
            .start_setting_phase(next_setter, self.word_length)?;
        self.player1_setting = next_setter == Player::One;
        info!(setter = %next_setter, "Roles switched");
        Ok(())
    }

    /// Player entering the secret word this sub-round
    #[must_use]
    pub const fn setter(&self) -> Player {
        if self.player1_setting {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Player guessing this sub-round
    #[must_use]
    pub const fn guesser(&self) -> Player {
        self.setter().other()
    }

    #[must_use]
    pub const fn is_player1_setting(&self) -> bool {
        self.player1_setting
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn engine(&self) -> &GameEngine<'a, S> {
        &self.engine
    }

    pub const fn engine_mut(&mut self) -> &mut GameEngine<'a, S> {
        &mut self.engine
    }

    /// Give the engine back, e.g. to return to single-player
    pub fn into_engine(self) -> GameEngine<'a, S> {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sink::{EventLog, SinkEvent};
    use crate::game::{GameMode, Mode, Role};
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(5, ["house", "mouse", "crane", "slate", "plane"])
    }

    fn coordinator(dictionary: &Dictionary) -> RoleCoordinator<'_, EventLog> {
        RoleCoordinator::new(GameEngine::new(dictionary, EventLog::new()), 5)
    }

    fn play_word<S: PresentationSink>(
        coordinator: &mut RoleCoordinator<'_, S>,
        word: &str,
    ) -> SubmitOutcome {
        for letter in word.chars() {
            coordinator.press_letter(letter);
        }
        coordinator.submit()
    }

    #[test]
    fn match_starts_with_player_one_setting() {
        let dictionary = dictionary();
        let mut coordinator = coordinator(&dictionary);
        coordinator.initialize_match(5).unwrap();

        assert_eq!(coordinator.setter(), Player::One);
        assert_eq!(coordinator.guesser(), Player::Two);
        assert_eq!(coordinator.engine().phase(), Some(Phase::SettingWord));
        assert_eq!(
            coordinator.engine().sink().events(),
            &[SinkEvent::NewRoundUi {
                setter: Some(Player::One),
                word_length: 5
            }]
        );
    }

    #[test]
    fn unsupported_length_is_rejected() {
        let dictionary = dictionary();
        let mut coordinator = coordinator(&dictionary);
        assert_eq!(
            coordinator.initialize_match(6),
            Err(GameError::NoWordsAvailable { word_length: 6 })
        );
        assert!(coordinator.engine().round().is_none());
    }

    #[test]
    fn switch_is_refused_mid_round() {
        let dictionary = dictionary();
        let mut coordinator = coordinator(&dictionary);
        coordinator.initialize_match(5).unwrap();

        assert_eq!(coordinator.switch_roles(), Err(GameError::RoundInProgress));
        assert!(coordinator.is_player1_setting());
        assert_eq!(coordinator.engine().phase(), Some(Phase::SettingWord));

        assert_eq!(coordinator.submit_word("house"), SubmitOutcome::SecretAccepted);
        play_word(&mut coordinator, "crane");
        assert_eq!(coordinator.switch_roles(), Err(GameError::RoundInProgress));
        assert_eq!(coordinator.engine().round().unwrap().attempts(), 1);
        assert_eq!(coordinator.setter(), Player::One);
    }

    #[test]
    fn roles_alternate_after_completed_rounds() {
        let dictionary = dictionary();
        let mut coordinator = coordinator(&dictionary);
        coordinator.initialize_match(5).unwrap();

        coordinator.submit_word("house");
        assert_eq!(
            play_word(&mut coordinator, "house"),
            SubmitOutcome::Won {
                attempts: 1,
                score: 100
            }
        );
        // no automatic switch
        assert_eq!(coordinator.setter(), Player::One);

        coordinator.switch_roles().unwrap();
        assert_eq!(coordinator.setter(), Player::Two);
        assert_eq!(coordinator.engine().phase(), Some(Phase::SettingWord));

        coordinator.submit_word("slate");
        let round = coordinator.engine().round().unwrap();
        assert_eq!(
            round.mode(),
            Mode::Multiplayer {
                player: Player::One,
                role: Role::Guesser
            }
        );

        for _ in 0..6 {
            play_word(&mut coordinator, "crane");
        }
        assert!(coordinator.engine().round().unwrap().is_completed());

        coordinator.switch_roles().unwrap();
        assert_eq!(coordinator.setter(), Player::One);

        let snapshot = coordinator
            .engine()
            .stats()
            .snapshot(GameMode::Multiplayer, 5)
            .unwrap();
        assert_eq!(snapshot.player(Player::Two).unwrap().wins, 1);
        assert_eq!(snapshot.player(Player::One).unwrap().losses, 1);
        assert_eq!(snapshot.games_played(), 2);
    }

    #[test]
    fn into_engine_returns_to_single_player() {
        let dictionary = dictionary();
        let mut coordinator = coordinator(&dictionary);
        coordinator.initialize_match(5).unwrap();

        let mut engine = coordinator.into_engine();
        engine.start_new_round(5).unwrap();
        assert_eq!(engine.round().unwrap().mode(), Mode::SinglePlayer);
    }
}
