//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words5.rs"));
include!(concat!(env!("OUT_DIR"), "/words6.rs"));

/// Word lengths with an embedded list
pub const LENGTHS: [usize; 2] = [5, 6];

/// Embedded list for a word length, if one was compiled in
#[must_use]
pub fn for_length(word_length: usize) -> Option<&'static [&'static str]> {
    match word_length {
        5 => Some(WORDS5),
        6 => Some(WORDS6),
        _ => None,
    }
}
