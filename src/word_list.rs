//! Candidate root words, loaded once per process.

use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Root words shipped with the game.
const BUNDLED_WORDS: &str = include_str!("../assets/start.txt");

/// Immutable, ordered list of candidate root words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Splits newline-delimited text into candidates.
    ///
    /// Blank lines inside the text survive as empty candidates; a
    /// final line break does not add one.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Self {
        let words: Vec<String> = text.lines().map(str::to_string).collect();
        debug!(count = words.len(), "Word list parsed");
        Self { words }
    }

    /// Loads a word list from disk.
    ///
    /// Failure here is fatal for the caller: there is no game without it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WordListError::new(format!(
                "Could not load word list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let list = Self::parse(&text);
        info!(count = list.len(), "Word list loaded");
        Ok(list)
    }

    /// The word list compiled into the binary.
    #[instrument]
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_WORDS)
    }

    /// Picks one word uniformly at random.
    #[instrument(skip(self, rng), fields(count = self.words.len()))]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the candidates in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Word list loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_splits_on_line_breaks() {
        let list = WordList::parse("bobcat\naddress\r\nsilkworm\n");
        assert_eq!(list.iter().collect::<Vec<_>>(), ["bobcat", "address", "silkworm"]);
    }

    #[test]
    fn test_blank_lines_are_tolerated() {
        let list = WordList::parse("bobcat\n\naddress");
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().nth(1), Some(""));
    }

    #[test]
    fn test_empty_text_is_empty_list() {
        let list = WordList::parse("");
        assert!(list.is_empty());
        assert_eq!(list.choose(&mut StdRng::seed_from_u64(7)), None);
    }

    #[test]
    fn test_bundled_list_is_usable() {
        let list = WordList::bundled();
        assert!(!list.is_empty());
        assert!(list.iter().all(|word| word.chars().count() >= 3));
        assert!(list.iter().all(|word| word == word.to_lowercase()));
    }

    #[test]
    fn test_choose_is_reproducible_with_seed() {
        let list = WordList::bundled();
        let first = list.choose(&mut StdRng::seed_from_u64(42)).map(str::to_string);
        let second = list.choose(&mut StdRng::seed_from_u64(42)).map(str::to_string);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
