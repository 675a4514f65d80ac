//! Top-level mode menu

use super::{ShellExit, get_user_input, is_quit, run_duel, run_play};
use crate::output::{print_banner, print_stats_summary};
use crate::stats::StatisticsStore;
use crate::wordlists::Dictionary;
use anyhow::Result;

/// Mode a shell session starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    Single,
    Duel,
}

/// Run shells until the player quits, then print session statistics
///
/// Statistics are shared across single-player and duel sessions.
///
/// # Errors
///
/// Returns an error on an I/O failure or if `word_length` has no words.
pub fn run_menu(
    dictionary: &Dictionary,
    word_length: usize,
    start: StartMode,
) -> Result<StatisticsStore> {
    let mut stats = StatisticsStore::default();
    let mut mode = Some(start);

    while let Some(current) = mode {
        let (next_stats, exit) = match current {
            StartMode::Single => run_play(dictionary, word_length, stats)?,
            StartMode::Duel => run_duel(dictionary, word_length, stats)?,
        };
        stats = next_stats;

        mode = match exit {
            ShellExit::Quit => None,
            ShellExit::Menu => choose_mode()?,
        };
    }

    print_stats_summary(&stats);
    println!("👋 Thanks for playing!\n");
    Ok(stats)
}

fn choose_mode() -> Result<Option<StartMode>> {
    print_banner("Main Menu");
    println!("  1) Single player");
    println!("  2) Two player duel");
    println!("  q) Quit\n");

    loop {
        let Some(input) = get_user_input("Choose a mode")? else {
            return Ok(None);
        };
        if is_quit(&input) {
            return Ok(None);
        }
        if let Some(mode) = parse_choice(&input) {
            return Ok(Some(mode));
        }
        println!("Please choose 1, 2 or q.");
    }
}

fn parse_choice(input: &str) -> Option<StartMode> {
    match input.to_ascii_lowercase().as_str() {
        "1" | "single" | "play" => Some(StartMode::Single),
        "2" | "duel" | "multi" => Some(StartMode::Duel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(parse_choice("1"), Some(StartMode::Single));
        assert_eq!(parse_choice("DUEL"), Some(StartMode::Duel));
        assert_eq!(parse_choice("3"), None);
    }
}
