//! Display functions for the console shell

use super::formatters::{format_row, win_rate_bar};
use crate::core::to_emoji;
use crate::game::{GameMode, Player, RoundState};
use crate::stats::StatisticsStore;
use colored::Colorize;

/// Print a boxed title
pub fn print_banner(title: &str) {
    let width = 62;
    println!("\n╔{}╗", "═".repeat(width));
    println!("║{title:^width$}║");
    println!("╚{}╝\n", "═".repeat(width));
}

/// Print every submitted row of a round, tiles beside the emoji summary
pub fn print_board(round: &RoundState) {
    for row in round.guesses() {
        println!(
            "  {}   {}",
            format_row(row.word.text(), &row.feedback),
            to_emoji(&row.feedback)
        );
    }
}

/// Print statistics for every word length that saw play
pub fn print_stats_summary(stats: &StatisticsStore) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Session statistics".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let mut printed = false;
    for word_length in stats.word_lengths() {
        for mode in [GameMode::SinglePlayer, GameMode::Multiplayer] {
            let Some(snapshot) = stats.snapshot(mode, word_length) else {
                continue;
            };
            if snapshot.games_played() == 0 {
                continue;
            }
            printed = true;
            println!("\n{snapshot}");
            match mode {
                GameMode::SinglePlayer => {
                    println!("  {}", win_rate_bar(snapshot.win_rate(), 30));
                    println!("  Average score: {:.1}", snapshot.average_score());
                }
                GameMode::Multiplayer => {
                    for player in [Player::One, Player::Two] {
                        if let Some(entry) = snapshot.player(player) {
                            println!(
                                "  {player}: {}  avg score {:.1}",
                                win_rate_bar(entry.win_rate(), 30),
                                entry.average_score()
                            );
                        }
                    }
                }
            }
        }
    }

    if !printed {
        println!("\nNo games played.");
    }
    println!();
}
