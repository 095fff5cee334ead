//! Game configuration: TOML file, environment overrides, defaults.

use crate::dictionary::{DictionaryError, WordSetDictionary};
use crate::games::scramble::DEFAULT_LANGUAGE;
use crate::word_list::{WordList, WordListError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a word list file.
pub const ENV_WORD_LIST: &str = "SCRAMBLE_WORD_LIST";
/// Environment variable naming a dictionary file.
pub const ENV_DICTIONARY: &str = "SCRAMBLE_DICTIONARY";
/// Environment variable naming the dictionary language.
pub const ENV_LANGUAGE: &str = "SCRAMBLE_LANGUAGE";
/// Environment variable holding a fixed random seed.
pub const ENV_SEED: &str = "SCRAMBLE_SEED";

/// Configuration for a game of word scramble.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Root word list; the bundled list is used when absent.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Word-per-line dictionary file; the bundled dictionary is used when absent.
    #[serde(default)]
    dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary.
    #[serde(default = "default_language")]
    language: String,

    /// Fixed seed for root word selection.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            dictionary: None,
            language: default_language(),
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies overrides from a variable lookup, normally `std::env::var`.
    #[instrument(skip_all)]
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_WORD_LIST) {
            debug!(%path, "Word list overridden");
            self.word_list = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_DICTIONARY) {
            debug!(%path, "Dictionary overridden");
            self.dictionary = Some(PathBuf::from(path));
        }
        if let Some(language) = lookup(ENV_LANGUAGE) {
            debug!(%language, "Language overridden");
            self.language = language;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid {}: {}", ENV_SEED, e)))?;
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Loads the configured word list, or the bundled one.
    #[instrument(skip(self))]
    pub fn load_word_list(&self) -> Result<WordList, WordListError> {
        match &self.word_list {
            Some(path) => WordList::from_file(path),
            None => Ok(WordList::bundled()),
        }
    }

    /// Loads the configured dictionary, or the bundled one.
    ///
    /// Only an explicitly configured file can fail to load.
    #[instrument(skip(self))]
    pub fn load_dictionary(&self) -> Result<WordSetDictionary, DictionaryError> {
        match &self.dictionary {
            Some(path) => WordSetDictionary::from_file(self.language.as_str(), path),
            None => Ok(WordSetDictionary::bundled(self.language.as_str())),
        }
    }

    /// Sets the word list path.
    pub fn set_word_list(&mut self, path: PathBuf) {
        self.word_list = Some(path);
    }

    /// Sets the dictionary path.
    pub fn set_dictionary(&mut self, path: PathBuf) {
        self.dictionary = Some(path);
    }

    /// Sets the language tag.
    pub fn set_language(&mut self, language: String) {
        self.language = language;
    }

    /// Sets the random seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
