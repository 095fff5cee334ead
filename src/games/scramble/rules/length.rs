//! Minimum length rule.

use super::super::MIN_WORD_LENGTH;
use tracing::instrument;

/// Checks that a word has at least [`MIN_WORD_LENGTH`] characters.
#[instrument]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_letters_is_enough() {
        assert!(is_long_enough("cat"));
        assert!(is_long_enough("dress"));
    }

    #[test]
    fn test_short_words_rejected() {
        assert!(!is_long_enough(""));
        assert!(!is_long_enough("a"));
        assert!(!is_long_enough("ad"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // "éa" is four bytes but two characters
        assert!(!is_long_enough("éa"));
    }
}
