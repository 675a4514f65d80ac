//! Presentation sink
//!
//! The engine never renders anything itself. Every visible change is pushed to a
//! [`PresentationSink`] supplied when the engine is constructed.

use super::round::{Mode, Player};
use crate::core::Feedback;

/// Receiver of everything the engine wants shown to the players
pub trait PresentationSink {
    /// A grid cell changed; `None` clears it
    fn on_cell_update(&mut self, row: usize, col: usize, letter: Option<char>);

    /// A submitted cell was classified
    fn on_cell_feedback(&mut self, row: usize, col: usize, feedback: Feedback);

    /// A keyboard key was classified; the latest call for a key wins
    fn on_key_feedback(&mut self, letter: char, feedback: Feedback);

    /// A message for the players
    fn on_alert(&mut self, message: &str);

    /// The round finished; `stats_text` summarizes the relevant statistics
    fn on_round_ended(&mut self, mode: &Mode, stats_text: &str);

    /// A multiplayer phase started. `setter` is the player entering the secret
    /// word, or `None` once guessing begins.
    fn on_new_round_ui(&mut self, setter: Option<Player>, word_length: usize);
}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    CellUpdate {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    CellFeedback {
        row: usize,
        col: usize,
        feedback: Feedback,
    },
    KeyFeedback {
        letter: char,
        feedback: Feedback,
    },
    Alert(String),
    RoundEnded {
        mode: Mode,
        stats_text: String,
    },
    NewRoundUi {
        setter: Option<Player>,
        word_length: usize,
    },
}

/// Sink that records every call in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SinkEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// All alert messages, oldest first
    #[must_use]
    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Feedback recorded for `row`, in column order
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Vec<Feedback> {
        let mut cells: Vec<(usize, Feedback)> = self
            .events
            .iter()
            .filter_map(|event| match *event {
                SinkEvent::CellFeedback {
                    row: r,
                    col,
                    feedback,
                } if r == row => Some((col, feedback)),
                _ => None,
            })
            .collect();
        cells.sort_by_key(|&(col, _)| col);
        cells.into_iter().map(|(_, feedback)| feedback).collect()
    }

    /// Number of round-ended notifications
    #[must_use]
    pub fn rounds_ended(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::RoundEnded { .. }))
            .count()
    }
}

impl PresentationSink for EventLog {
    fn on_cell_update(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.events.push(SinkEvent::CellUpdate { row, col, letter });
    }

    fn on_cell_feedback(&mut self, row: usize, col: usize, feedback: Feedback) {
        self.events
            .push(SinkEvent::CellFeedback { row, col, feedback });
    }

    fn on_key_feedback(&mut self, letter: char, feedback: Feedback) {
        self.events.push(SinkEvent::KeyFeedback { letter, feedback });
    }

    fn on_alert(&mut self, message: &str) {
        self.events.push(SinkEvent::Alert(message.to_string()));
    }

    fn on_round_ended(&mut self, mode: &Mode, stats_text: &str) {
        self.events.push(SinkEvent::RoundEnded {
            mode: *mode,
            stats_text: stats_text.to_string(),
        });
    }

    fn on_new_round_ui(&mut self, setter: Option<Player>, word_length: usize) {
        self.events.push(SinkEvent::NewRoundUi {
            setter,
            word_length,
        });
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn on_cell_update(&mut self, row: usize, col: usize, letter: Option<char>) {
        (**self).on_cell_update(row, col, letter);
    }

    fn on_cell_feedback(&mut self, row: usize, col: usize, feedback: Feedback) {
        (**self).on_cell_feedback(row, col, feedback);
    }

    fn on_key_feedback(&mut self, letter: char, feedback: Feedback) {
        (**self).on_key_feedback(letter, feedback);
    }

    fn on_alert(&mut self, message: &str) {
        (**self).on_alert(message);
    }

    fn on_round_ended(&mut self, mode: &Mode, stats_text: &str) {
        (**self).on_round_ended(mode, stats_text);
    }

    fn on_new_round_ui(&mut self, setter: Option<Player>, word_length: usize) {
        (**self).on_new_round_ui(setter, word_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_cell_update(0, 0, Some('A'));
        log.on_alert("hello");
        log.on_cell_feedback(0, 1, Feedback::Present);
        log.on_cell_feedback(0, 0, Feedback::Match);

        assert_eq!(log.events().len(), 4);
        assert_eq!(log.alerts(), vec!["hello"]);
        assert_eq!(log.row_feedback(0), vec![Feedback::Match, Feedback::Present]);
        assert!(log.row_feedback(1).is_empty());
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = EventLog::new();
        log.on_new_round_ui(Some(Player::One), 5);
        let drained = log.drain();
        assert_eq!(
            drained,
            vec![SinkEvent::NewRoundUi {
                setter: Some(Player::One),
                word_length: 5
            }]
        );
        assert!(log.events().is_empty());
    }

    #[test]
    fn mutable_reference_forwards() {
        fn notify<S: PresentationSink>(mut sink: S) {
            sink.on_round_ended(&Mode::SinglePlayer, "stats");
        }

        let mut log = EventLog::new();
        notify(&mut log);
        assert_eq!(log.rounds_ended(), 1);
    }
}
