//! Fixed game rules

/// Word lengths a round can be played with
pub const SUPPORTED_WORD_LENGTHS: [usize; 2] = crate::wordlists::LENGTHS;

/// Default word length when none is chosen
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Score for a win, indexed by attempt number minus one
pub const SCORES: [u32; MAX_ATTEMPTS] = [100, 90, 80, 70, 60, 50];

/// Score for winning on attempt `attempts` (1-based); zero outside 1..=6
///
/// # Examples
/// ```
/// use wordle_duel::game::rules::score_for;
///
/// assert_eq!(score_for(1), 100);
/// assert_eq!(score_for(6), 50);
/// assert_eq!(score_for(0), 0);
/// ```
#[must_use]
pub fn score_for(attempts: usize) -> u32 {
    attempts
        .checked_sub(1)
        .and_then(|i| SCORES.get(i))
        .copied()
        .unwrap_or(0)
}

/// Whether `word_length` is one of the configured lengths
#[must_use]
pub fn is_supported_length(word_length: usize) -> bool {
    SUPPORTED_WORD_LENGTHS.contains(&word_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_descend_by_ten() {
        for attempts in 1..=MAX_ATTEMPTS {
            assert_eq!(score_for(attempts), 110 - 10 * attempts as u32);
        }
        assert_eq!(score_for(7), 0);
    }

    #[test]
    fn supported_lengths() {
        assert!(is_supported_length(5));
        assert!(is_supported_length(6));
        assert!(!is_supported_length(4));
    }
}
