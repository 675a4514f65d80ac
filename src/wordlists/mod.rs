//! Word lists and the game dictionary
//!
//! Embedded word lists are compiled into the binary for zero-cost access; the
//! [`Dictionary`] indexes them by word length.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{LENGTHS, WORDS5, WORDS5_COUNT, WORDS6, WORDS6_COUNT, for_length};
