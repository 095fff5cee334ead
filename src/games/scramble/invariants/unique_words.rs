//! Unique words invariant: no duplicates and nothing too short.

use super::super::{GameSession, rules};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every accepted word is unique and at least three letters long.
pub struct UniqueWordsInvariant;

impl Invariant<GameSession> for UniqueWordsInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut seen = HashSet::new();
        session
            .accepted_words()
            .iter()
            .all(|word| rules::is_long_enough(word) && seen.insert(word.to_lowercase()))
    }

    fn description() -> &'static str {
        "Accepted words are unique and at least three letters long"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_words_hold() {
        let mut session = GameSession::with_root("address");
        session.submit("add", &|_: &str, _: &str| true);
        session.submit("dress", &|_: &str, _: &str| true);
        assert!(UniqueWordsInvariant::holds(&session));
    }

    #[test]
    fn test_case_insensitive_duplicate_violates() {
        let mut session = GameSession::with_root("address");
        session.accepted_words = vec!["add".to_string(), "ADD".to_string()];
        session.total_letters = 6;
        assert!(!UniqueWordsInvariant::holds(&session));
    }

    #[test]
    fn test_short_word_violates() {
        let mut session = GameSession::with_root("address");
        session.accepted_words = vec!["ad".to_string()];
        session.total_letters = 2;
        assert!(!UniqueWordsInvariant::holds(&session));
    }
}
