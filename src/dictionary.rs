//! Dictionary oracle: answers "is this a real word?".

use derive_more::{Display, Error};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Dictionary compiled into the binary, used when no file is configured.
const BUNDLED_WORDS: &str = include_str!("../assets/dictionary.txt");

/// Decides whether a candidate is a recognized word in a language.
///
/// Implementations must answer deterministically for a fixed dictionary
/// snapshot. Lookups are synchronous; the submission pipeline waits for the
/// answer before touching session state.
pub trait DictionaryOracle {
    /// Returns true if `candidate` is a dictionary entry for `language`.
    fn is_word(&self, candidate: &str, language: &str) -> bool;
}

impl<F> DictionaryOracle for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_word(&self, candidate: &str, language: &str) -> bool {
        self(candidate, language)
    }
}

/// In-memory dictionary for a single language.
#[derive(Debug, Clone, Default)]
pub struct WordSetDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordSetDictionary {
    /// Builds a dictionary from newline-delimited text.
    ///
    /// Entries are trimmed and lowercased. Blank lines and entries with
    /// non-alphabetic characters (possessives, abbreviations) are skipped.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn from_text(language: impl Into<String>, text: &str) -> Self {
        let words: HashSet<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
            .collect();
        let language = language.into();
        debug!(%language, entries = words.len(), "Dictionary built");
        Self { language, words }
    }

    /// The bundled dictionary, answering for `language`.
    #[instrument(skip_all)]
    pub fn bundled(language: impl Into<String>) -> Self {
        Self::from_text(language, BUNDLED_WORDS)
    }

    /// Loads a dictionary from a word-per-line file such as `/usr/share/dict/words`.
    #[instrument(skip(language, path), fields(path = %path.as_ref().display()))]
    pub fn from_file(
        language: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DictionaryError::new(format!(
                "Failed to read dictionary {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let dictionary = Self::from_text(language, &text);
        if dictionary.is_empty() {
            return Err(DictionaryError::new(format!(
                "Dictionary {} has no usable entries",
                path.as_ref().display()
            )));
        }
        info!(entries = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Language tag this dictionary answers for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordSetDictionary {
    #[instrument(skip(self), fields(dictionary_language = %self.language))]
    fn is_word(&self, candidate: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            debug!("Language tag not served by this dictionary");
            return false;
        }
        self.words.contains(candidate)
    }
}

/// Dictionary loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
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
