//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A coloured letter tile
#[must_use]
pub fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Match => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// A submitted row as coloured tiles
#[must_use]
pub fn format_row(word: &str, feedback: &[Feedback]) -> String {
    word.chars()
        .zip(feedback)
        .map(|(letter, &fb)| tile(letter, fb).to_string())
        .collect()
}

/// The on-screen keyboard; `lookup` gives the latest feedback per key
#[must_use]
pub fn format_keyboard<F>(lookup: F) -> String
where
    F: Fn(char) -> Option<Feedback>,
{
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| match lookup(key) {
                    Some(Feedback::Match) => key.to_string().green().bold().to_string(),
                    Some(Feedback::Present) => key.to_string().yellow().bold().to_string(),
                    Some(Feedback::Absent) => key.to_string().bright_black().to_string(),
                    None => key.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Win rate as a bar followed by a percentage
#[must_use]
pub fn win_rate_bar(win_rate: f64, width: usize) -> String {
    format!(
        "{} {:.1}%",
        create_progress_bar(win_rate, 1.0, width),
        win_rate * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_contains_each_letter() {
        colored::control::set_override(false);
        let row = format_row(
            "crane",
            &[
                Feedback::Match,
                Feedback::Absent,
                Feedback::Present,
                Feedback::Absent,
                Feedback::Match,
            ],
        );
        assert_eq!(row, " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let keyboard = format_keyboard(|_| None);
        let rows: Vec<&str> = keyboard.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Q W E R T Y U I O P");
        assert_eq!(rows[2], "  Z X C V B N M");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn win_rate_bar_shows_percent() {
        assert_eq!(win_rate_bar(0.5, 4), "██░░ 50.0%");
    }
}
