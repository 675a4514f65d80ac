//! End-to-end rounds through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_duel::GameError;
use wordle_duel::core::Feedback;
use wordle_duel::game::{
    EventLog, GameEngine, GameMode, Phase, Player, PresentationSink, RoleCoordinator,
    SubmitOutcome,
};
use wordle_duel::wordlists::Dictionary;

fn type_and_submit<S: PresentationSink>(
    engine: &mut GameEngine<'_, S>,
    word: &str,
) -> SubmitOutcome {
    for letter in word.chars() {
        engine.press_letter(letter);
    }
    engine.submit()
}

#[test]
fn random_words_are_valid_for_each_length() {
    let dictionary = Dictionary::embedded();
    let mut rng = StdRng::seed_from_u64(7);
    for word_length in [5, 6] {
        for _ in 0..50 {
            let word = dictionary.random_word_with(word_length, &mut rng).unwrap();
            assert_eq!(word.len(), word_length);
            assert!(dictionary.is_valid(word.text(), word_length));
        }
    }
}

#[test]
fn single_player_win_on_second_guess() {
    let dictionary = Dictionary::embedded();
    let mut engine = GameEngine::new(&dictionary, EventLog::new());
    engine.start_round_with_secret("crane").unwrap();

    assert_eq!(
        type_and_submit(&mut engine, "slate"),
        SubmitOutcome::Continue { attempts: 1 }
    );
    assert_eq!(
        engine.sink().row_feedback(0),
        vec![
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Match,
            Feedback::Absent,
            Feedback::Match,
        ]
    );

    assert_eq!(
        type_and_submit(&mut engine, "crane"),
        SubmitOutcome::Won {
            attempts: 2,
            score: 90
        }
    );
    assert_eq!(engine.sink().row_feedback(1), vec![Feedback::Match; 5]);

    let round = engine.round().unwrap();
    assert!(round.won());
    assert_eq!(round.score(), 90);

    let snapshot = engine.stats().snapshot(GameMode::SinglePlayer, 5).unwrap();
    assert_eq!(snapshot.games_played(), 1);
    assert_eq!(snapshot.wins(), 1);
    assert!((snapshot.average_attempts() - 2.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.total_score(), 90);
}

#[test]
fn invalid_words_never_use_attempts() {
    let dictionary = Dictionary::embedded();
    let mut engine = GameEngine::new(&dictionary, EventLog::new());
    engine.start_round_with_secret("crane").unwrap();

    for _ in 0..6 {
        assert_eq!(type_and_submit(&mut engine, "zzzzz"), SubmitOutcome::Rejected);
    }

    let round = engine.round().unwrap();
    assert_eq!(round.attempts(), 0);
    assert_eq!(round.phase(), Phase::Guessing);
    assert_eq!(engine.sink().alerts().len(), 6);
}

#[test]
fn duel_scores_the_guesser_and_counts_rounds_in_pairs() {
    let dictionary = Dictionary::embedded();
    let engine = GameEngine::new(&dictionary, EventLog::new());
    let mut coordinator = RoleCoordinator::new(engine, 5);
    coordinator.initialize_match(5).unwrap();

    assert_eq!(coordinator.submit_word("house"), SubmitOutcome::SecretAccepted);
    for word in ["crane", "slate"] {
        for letter in word.chars() {
            coordinator.press_letter(letter);
        }
        assert!(matches!(coordinator.submit(), SubmitOutcome::Continue { .. }));
    }
    for letter in "house".chars() {
        coordinator.press_letter(letter);
    }
    assert_eq!(
        coordinator.submit(),
        SubmitOutcome::Won {
            attempts: 3,
            score: 80
        }
    );

    let stats = coordinator.engine().stats();
    let snapshot = stats.snapshot(GameMode::Multiplayer, 5).unwrap();
    let player_two = snapshot.player(Player::Two).unwrap();
    assert_eq!(player_two.wins, 1);
    assert_eq!(player_two.total_score, 80);
    assert_eq!(snapshot.rounds_played(), Some(0));

    coordinator.switch_roles().unwrap();
    assert_eq!(coordinator.setter(), Player::Two);
    assert_eq!(coordinator.submit_word("crane"), SubmitOutcome::SecretAccepted);

    let snapshot = coordinator
        .engine()
        .stats()
        .snapshot(GameMode::Multiplayer, 5)
        .unwrap();
    assert_eq!(snapshot.games_played(), 2);
    assert_eq!(snapshot.rounds_played(), Some(0));

    for _ in 0..6 {
        for letter in "slate".chars() {
            coordinator.press_letter(letter);
        }
        coordinator.submit();
    }

    let snapshot = coordinator
        .engine()
        .stats()
        .snapshot(GameMode::Multiplayer, 5)
        .unwrap();
    assert_eq!(snapshot.games_played(), 2);
    assert_eq!(snapshot.rounds_played(), Some(1));
    assert_eq!(snapshot.player(Player::One).unwrap().losses, 1);
    assert_eq!(snapshot.player(Player::One).unwrap().total_score, 0);
}

#[test]
fn switching_mid_round_changes_nothing() {
    let dictionary = Dictionary::embedded();
    let engine = GameEngine::new(&dictionary, EventLog::new());
    let mut coordinator = RoleCoordinator::new(engine, 5);
    coordinator.initialize_match(5).unwrap();
    coordinator.submit_word("house");

    let events_before = coordinator.engine().sink().events().len();
    assert_eq!(coordinator.switch_roles(), Err(GameError::RoundInProgress));
    assert_eq!(coordinator.setter(), Player::One);
    assert_eq!(coordinator.engine().phase(), Some(Phase::Guessing));
    assert_eq!(coordinator.engine().sink().events().len(), events_before);
}

#[test]
fn statistics_start_at_zero() {
    let dictionary = Dictionary::embedded();
    let engine = GameEngine::new(&dictionary, EventLog::new());
    for mode in [GameMode::SinglePlayer, GameMode::Multiplayer] {
        for word_length in [5, 6] {
            let snapshot = engine.stats().snapshot(mode, word_length).unwrap();
            assert_eq!(snapshot.games_played(), 0);
            assert!(snapshot.win_rate().abs() < f64::EPSILON);
            assert!(snapshot.average_attempts().abs() < f64::EPSILON);
        }
    }
}
