//! Novelty rules: the root word and previously accepted words are off limits.

use tracing::instrument;

/// Checks whether the word is the root word itself.
#[instrument]
pub fn is_root_word(word: &str, root: &str) -> bool {
    word == root
}

/// Checks that the word has not been accepted already.
#[instrument(skip(accepted), fields(used = accepted.len()))]
pub fn is_original(word: &str, accepted: &[String]) -> bool {
    !accepted.iter().any(|used| used == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_word_matches_exactly() {
        assert!(is_root_word("silkworm", "silkworm"));
        assert!(!is_root_word("silk", "silkworm"));
    }

    #[test]
    fn test_original_against_empty_history() {
        assert!(is_original("cat", &[]));
    }

    #[test]
    fn test_used_word_is_not_original() {
        let used = vec!["bat".to_string(), "cat".to_string()];
        assert!(!is_original("cat", &used));
        assert!(is_original("cob", &used));
    }
}
