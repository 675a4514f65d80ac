//! Single-player replay loop

use super::{ShellExit, enter_word, get_user_input, is_quit};
use crate::game::rules::MAX_ATTEMPTS;
use crate::game::{GameEngine, SubmitOutcome};
use crate::output::{ConsoleSink, print_banner, print_board};
use crate::stats::StatisticsStore;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::Stdout;
use tracing::info;

/// Play single-player rounds until the player quits
///
/// Statistics continue from `stats` and are handed back on exit.
///
/// # Errors
///
/// Returns an error on an I/O failure reading input or if the dictionary has
/// no words of `word_length`.
pub fn run_play(
    dictionary: &Dictionary,
    word_length: usize,
    stats: StatisticsStore,
) -> Result<(StatisticsStore, ShellExit)> {
    print_banner("Wordle - Single Player");
    println!("Guess the {word_length}-letter word in {MAX_ATTEMPTS} tries.");
    println!("Type 'quit' at any prompt to leave.\n");

    let mut engine = GameEngine::with_stats(dictionary, ConsoleSink::stdout(), stats);

    let exit = loop {
        if let Some(exit) = play_round(&mut engine, word_length)? {
            break exit;
        }

        let Some(answer) = get_user_input("Play again? (yes/no/menu)")? else {
            break ShellExit::Quit;
        };
        match answer.to_ascii_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            "menu" | "m" => break ShellExit::Menu,
            _ => break ShellExit::Quit,
        }
    };

    let (stats, _) = engine.into_parts();
    Ok((stats, exit))
}

/// Play one round; `Some` if the player asked to leave mid-round
fn play_round(
    engine: &mut GameEngine<'_, ConsoleSink<Stdout>>,
    word_length: usize,
) -> Result<Option<ShellExit>> {
    engine.sink_mut().reset_board(word_length);
    engine.start_new_round(word_length)?;
    info!(word_length, "Single-player round ready");

    loop {
        let attempt = engine.round().map_or(1, |round| round.attempts() + 1);
        let prompt = format!("Guess {attempt}/{MAX_ATTEMPTS}");
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

        match enter_word(engine, &input) {
            SubmitOutcome::Won { .. } | SubmitOutcome::Lost { .. } => {
                if let Some(round) = engine.round() {
                    println!();
                    print_board(round);
                }
                return Ok(None);
            }
            SubmitOutcome::Ignored => {
                println!("{}", "Letters only, please.".bright_black());
            }
            SubmitOutcome::Rejected
            | SubmitOutcome::Continue { .. }
            | SubmitOutcome::SecretAccepted => {}
        }
    }
}
