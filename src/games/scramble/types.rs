//! Core domain types for word scramble.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Root word used when the word list has nothing to offer.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Shortest word the player may submit, in characters.
pub const MIN_WORD_LENGTH: usize = 3;

/// Language tag passed to the dictionary oracle.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A submission after normalization.
///
/// Raw input is lowercased and stripped of surrounding whitespace
/// (newlines included) before any rule looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate(String);

impl Candidate {
    /// Normalizes raw player input.
    #[instrument]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if nothing remains after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the candidate, returning the normalized text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(Candidate::normalize(" CaT  ").as_str(), "cat");
        assert_eq!(Candidate::normalize("\tDress\n").as_str(), "dress");
    }

    #[test]
    fn test_len_counts_characters() {
        assert_eq!(Candidate::normalize("café").len(), 4);
        assert!(Candidate::normalize("   \n").is_empty());
    }
}
