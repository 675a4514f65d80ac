//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no game-state
//! dependencies. All types here are pure and testable in isolation.

mod feedback;
mod word;

pub use feedback::{Feedback, is_perfect, row_feedback, to_emoji};
pub use word::{Word, WordError};
