//! Two-player hot-seat mode
//!
//! Player 1 sets the first secret. After each sub-round the players choose to
//! switch roles or leave.

use super::{ShellExit, enter_duel_guess, get_user_input, is_quit};
use crate::game::rules::MAX_ATTEMPTS;
use crate::game::{GameEngine, Phase, RoleCoordinator, SubmitOutcome};
use crate::output::{ConsoleSink, print_banner, print_board};
use crate::stats::StatisticsStore;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::Stdout;

type Coordinator<'a> = RoleCoordinator<'a, ConsoleSink<Stdout>>;

/// Run a hot-seat match until the players leave
///
/// # Errors
///
/// Returns an error on an I/O failure reading input or if the dictionary has
/// no words of `word_length`.
pub fn run_duel(
    dictionary: &Dictionary,
    word_length: usize,
    stats: StatisticsStore,
) -> Result<(StatisticsStore, ShellExit)> {
    print_banner("Wordle - Two Player Duel");
    println!("One player sets a secret {word_length}-letter word, the other guesses.");
    println!("Type 'quit' at any prompt to leave.\n");

    let engine = GameEngine::with_stats(dictionary, ConsoleSink::stdout(), stats);
    let mut coordinator = RoleCoordinator::new(engine, word_length);
    coordinator.initialize_match(word_length)?;

    let exit = loop {
        if let Some(exit) = set_secret(&mut coordinator)? {
            break exit;
        }
        if let Some(exit) = guess_secret(&mut coordinator, word_length)? {
            break exit;
        }

        let Some(answer) = get_user_input("Switch roles? (yes/menu/quit)")? else {
            break ShellExit::Quit;
        };
        match answer.to_ascii_lowercase().as_str() {
            "yes" | "y" | "switch" | "s" => coordinator.switch_roles()?,
            "menu" | "m" => break ShellExit::Menu,
            _ => break ShellExit::Quit,
        }
    };

    let (stats, _) = coordinator.into_engine().into_parts();
    Ok((stats, exit))
}

fn set_secret(coordinator: &mut Coordinator<'_>) -> Result<Option<ShellExit>> {
    while coordinator.engine().phase() == Some(Phase::SettingWord) {
        let prompt = format!("{} (secret word)", coordinator.setter());
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(Some(ShellExit::Quit));
        };
        if is_quit(&input) {
            return Ok(Some(ShellExit::Quit));
        }
        if coordinator.submit_word(&input) == SubmitOutcome::SecretAccepted {
            // hide the secret from the guesser
            print!("\x1B[2J\x1B[H");
            println!(
                "{}",
                format!("{}, your turn to guess.", coordinator.guesser()).bright_cyan()
            );
        }
    }
    Ok(None)
}

fn guess_secret(
    coordinator: &mut Coordinator<'_>,
    word_length: usize,
) -> Result<Option<ShellExit>> {
    loop {
        let attempt = coordinator
            .engine()
            .round()
            .map_or(1, |round| round.attempts() + 1);
        let prompt = format!("{} guess {attempt}/{MAX_ATTEMPTS}", coordinator.guesser());
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(Some(ShellExit::Quit));
        };
        if is_quit(&input) {
            return Ok(Some(ShellExit::Quit));
        }
        if input.chars().count() != word_length {
            println!("{}", format!("Enter a {word_length}-letter word.").bright_black());
            continue;
        }

        let outcome = enter_duel_guess(coordinator, &input);
        if outcome == SubmitOutcome::Ignored {
            println!("{}", "Letters only, please.".bright_black());
        } else if outcome.is_round_over() {
            if let Some(round) = coordinator.engine().round() {
                println!();
                print_board(round);
            }
            return Ok(None);
        }
    }
}
