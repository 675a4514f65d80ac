//! Wordle Duel
//!
//! A Wordle game engine with single-player rounds and a two-player hot-seat
//! mode where players take turns setting the secret word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::game::{EventLog, GameEngine, SubmitOutcome};
//! use wordle_duel::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(5, ["crane", "slate"]);
//! let mut engine = GameEngine::new(&dictionary, EventLog::new());
//! engine.start_round_with_secret("crane").unwrap();
//!
//! for letter in "slate".chars() {
//!     engine.press_letter(letter);
//! }
//! assert_eq!(engine.submit(), SubmitOutcome::Continue { attempts: 1 });
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists and validation
pub mod wordlists;

// Round engine and multiplayer coordination
pub mod game;

// Per-mode, per-length statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::GameError;
