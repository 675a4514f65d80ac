//! Line-oriented terminal sink
//!
//! Typing is not echoed: the shell reads whole words, so a row is printed once
//! its last cell has been classified.

use super::formatters::{format_keyboard, format_row};
use crate::core::Feedback;
use crate::game::{Mode, Player, PresentationSink};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::io::{self, Write};
use tracing::warn;

/// [`PresentationSink`] that prints coloured tiles to a writer
pub struct ConsoleSink<W: Write> {
    out: W,
    letters: Vec<Option<char>>,
    feedback: Vec<Option<Feedback>>,
    keyboard: FxHashMap<char, Feedback>,
    keys_pending: usize,
}

impl ConsoleSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            letters: Vec::new(),
            feedback: Vec::new(),
            keyboard: FxHashMap::default(),
            keys_pending: 0,
        }
    }

    /// Forget the board; call when a new round starts
    pub fn reset_board(&mut self, word_length: usize) {
        self.letters = vec![None; word_length];
        self.feedback = vec![None; word_length];
        self.keyboard.clear();
        self.keys_pending = 0;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn ensure_width(&mut self, col: usize) {
        if col >= self.letters.len() {
            self.letters.resize(col + 1, None);
            self.feedback.resize(col + 1, None);
        }
    }

    fn flush_row(&mut self) {
        let word: String = self.letters.iter().map(|c| c.unwrap_or(' ')).collect();
        let feedback: Vec<Feedback> = self.feedback.iter().flatten().copied().collect();
        let row = format_row(&word, &feedback);
        self.emit(&format!("  {row}"));
        self.feedback.iter_mut().for_each(|cell| *cell = None);
        self.keys_pending = word.len();
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn on_cell_update(&mut self, _row: usize, col: usize, letter: Option<char>) {
        self.ensure_width(col);
        self.letters[col] = letter;
    }

    fn on_cell_feedback(&mut self, _row: usize, col: usize, feedback: Feedback) {
        self.ensure_width(col);
        self.feedback[col] = Some(feedback);
        if self.feedback.iter().all(Option::is_some) {
            self.flush_row();
        }
    }

    fn on_key_feedback(&mut self, letter: char, feedback: Feedback) {
        self.keyboard.insert(letter.to_ascii_uppercase(), feedback);
        // key updates for a row arrive after its tiles
        if self.keys_pending > 0 {
            self.keys_pending -= 1;
            if self.keys_pending == 0 {
                let keyboard = format_keyboard(|key| self.keyboard.get(&key).copied());
                self.emit(&keyboard);
            }
        }
    }

    fn on_alert(&mut self, message: &str) {
        let line = message.bright_yellow().bold().to_string();
        self.emit(&line);
    }

    fn on_round_ended(&mut self, mode: &Mode, stats_text: &str) {
        let heading = match mode {
            Mode::SinglePlayer => "Statistics".to_string(),
            Mode::Multiplayer { player, .. } => format!("Statistics after {player}'s turn"),
        };
        self.emit(&format!("\n{}", heading.cyan().bold()));
        self.emit(stats_text);
    }

    fn on_new_round_ui(&mut self, setter: Option<Player>, word_length: usize) {
        self.reset_board(word_length);
        let line = match setter {
            Some(player) => format!("{player}, enter a secret {word_length}-letter word"),
            None => format!("Secret word set. Guess the {word_length}-letter word!"),
        };
        self.emit(&line.bright_cyan().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(sink: ConsoleSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn row_is_printed_after_last_tile() {
        colored::control::set_override(false);
        let mut sink = ConsoleSink::new(Vec::new());
        sink.reset_board(3);
        for (col, letter) in "CAT".chars().enumerate() {
            sink.on_cell_update(0, col, Some(letter));
        }
        sink.on_cell_feedback(0, 0, Feedback::Match);
        sink.on_cell_feedback(0, 1, Feedback::Absent);
        sink.on_cell_feedback(0, 2, Feedback::Present);

        sink.on_key_feedback('C', Feedback::Match);
        sink.on_key_feedback('A', Feedback::Absent);
        sink.on_key_feedback('T', Feedback::Present);

        let text = output(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   C  A  T ");
        assert_eq!(lines[1], "Q W E R T Y U I O P");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn alerts_and_prompts_are_printed() {
        colored::control::set_override(false);
        let mut sink = ConsoleSink::new(Vec::new());
        sink.on_new_round_ui(Some(Player::Two), 5);
        sink.on_alert("Invalid word!");
        sink.on_round_ended(&Mode::SinglePlayer, "Games Played: 1");

        let text = output(sink);
        assert!(text.contains("Player 2, enter a secret 5-letter word"));
        assert!(text.contains("Invalid word!"));
        assert!(text.contains("Statistics\nGames Played: 1"));
    }
}
