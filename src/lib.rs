//! Word Scramble library - find words hidden in a root word
//!
//! The player gets a random root word and builds new words from its letters.
//! Each submission must be long enough, new, spelled from the root's letters
//! and known to the dictionary.
//!
//! # Architecture
//!
//! - **Rules**: pure predicates (length, originality, letter feasibility)
//! - **Contracts**: the ordered submission pipeline and session invariants
//! - **Session**: root word, accepted words and letter tally
//! - **Dictionary**: pluggable word oracle
//! - **Word list**: candidate root words
//!
//! # Example
//!
//! ```
//! use word_scramble::{GameSession, Rejection, ValidationOutcome};
//!
//! let dictionary = |word: &str, _language: &str| ["add", "dress"].contains(&word);
//! let mut session = GameSession::with_root("address");
//!
//! assert_eq!(session.submit("add", &dictionary), ValidationOutcome::Accepted);
//! assert_eq!(
//!     session.submit("ADD", &dictionary),
//!     ValidationOutcome::Rejected(Rejection::AlreadyUsed)
//! );
//! assert_eq!(session.total_letters(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod dictionary;
mod games;
mod word_list;

// Crate-level exports - Configuration
pub use config::{ConfigError, ENV_DICTIONARY, ENV_LANGUAGE, ENV_SEED, ENV_WORD_LIST, ScrambleConfig};

// Crate-level exports - Console front end
pub use console::{CheckReport, check_words, run_console};

// Crate-level exports - Dictionary
pub use dictionary::{DictionaryError, DictionaryOracle, WordSetDictionary};

// Crate-level exports - Word list
pub use word_list::{WordList, WordListError};

// Crate-level exports - Game types
pub use games::scramble::{
    Candidate, DEFAULT_LANGUAGE, DEFAULT_ROOT_WORD, Game, GameSession, MIN_WORD_LENGTH,
    Rejection, ValidationOutcome, contracts, invariants, rules,
};
