//! Game session state: the root word and the words found so far.

use super::action::ValidationOutcome;
use super::contracts::{Contract, Submission, SubmissionContract};
use super::types::{Candidate, DEFAULT_LANGUAGE, DEFAULT_ROOT_WORD};
use crate::dictionary::DictionaryOracle;
use crate::word_list::WordList;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// One round of play against a single root word.
///
/// Invariants:
/// - `total_letters` is the summed length of `accepted_words`
/// - accepted words are unique, at least three letters, and never the root
/// - `accepted_words` is ordered most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) root_word: String,
    pub(crate) accepted_words: Vec<String>,
    pub(crate) total_letters: usize,
    pub(crate) language: String,
}

impl GameSession {
    /// Starts a session with a root word drawn uniformly from `words`.
    ///
    /// An empty list falls back to [`DEFAULT_ROOT_WORD`].
    #[instrument(skip(words, rng), fields(candidates = words.len()))]
    pub fn start<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let root = match words.choose(rng) {
            Some(word) => word,
            None => {
                warn!(fallback = DEFAULT_ROOT_WORD, "Word list is empty, using fallback root word");
                DEFAULT_ROOT_WORD
            }
        };
        Self::with_root(root)
    }

    /// Starts a session with a fixed root word.
    ///
    /// The root is lowercased and trimmed.
    #[instrument(skip(root))]
    pub fn with_root(root: impl AsRef<str>) -> Self {
        let root_word = Candidate::normalize(root.as_ref()).into_inner();
        info!(%root_word, "New session started");
        Self {
            root_word,
            accepted_words: Vec::new(),
            total_letters: 0,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Sets the language tag passed to the dictionary.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Submits a raw candidate word.
    ///
    /// The candidate is normalized, then checked for length, root reuse,
    /// originality, letter feasibility and dictionary membership, in that
    /// order. On acceptance it goes to the front of the accepted words.
    /// A rejection leaves the session untouched.
    #[instrument(skip(self, dictionary), fields(root = %self.root_word))]
    pub fn submit(&mut self, raw: &str, dictionary: &dyn DictionaryOracle) -> ValidationOutcome {
        let candidate = Candidate::normalize(raw);
        let submission = Submission {
            candidate: &candidate,
            dictionary,
        };

        if let Err(reason) = SubmissionContract::pre(self, &submission) {
            debug!(%candidate, ?reason, "Submission rejected");
            return ValidationOutcome::Rejected(reason);
        }

        let before = self.clone();
        self.total_letters += candidate.len();
        self.accepted_words.insert(0, candidate.into_inner());
        info!(
            words = self.accepted_words.len(),
            letters = self.total_letters,
            "Word accepted"
        );

        if let Err(violations) = SubmissionContract::post(&before, self) {
            for violation in &violations {
                warn!(%violation, "Session invariant violated");
            }
            debug_assert!(
                violations.is_empty(),
                "Session invariants violated: {:?}",
                violations
            );
        }

        ValidationOutcome::Accepted
    }

    /// The root word, lowercase.
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    /// Summed length of accepted words.
    pub fn total_letters(&self) -> usize {
        self.total_letters
    }

    /// Number of accepted words.
    pub fn word_count(&self) -> usize {
        self.accepted_words.len()
    }

    /// Language tag passed to the dictionary.
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scramble::Rejection;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn accept_all(_word: &str, _language: &str) -> bool {
        true
    }

    #[test]
    fn test_start_resets_state() {
        let words = WordList::parse("Bobcat\n");
        let session = GameSession::start(&words, &mut StdRng::seed_from_u64(1));
        assert_eq!(session.root_word(), "bobcat");
        assert!(session.accepted_words().is_empty());
        assert_eq!(session.total_letters(), 0);
        assert_eq!(session.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_start_falls_back_on_empty_list() {
        let session = GameSession::start(&WordList::parse(""), &mut StdRng::seed_from_u64(1));
        assert_eq!(session.root_word(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut session = GameSession::with_root("address");
        session.submit("add", &accept_all);
        let before = session.clone();

        assert_eq!(
            session.submit("add", &accept_all),
            ValidationOutcome::Rejected(Rejection::AlreadyUsed)
        );
        assert_eq!(session, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Session invariants violated")]
    fn test_submit_checks_postcondition() {
        let mut session = GameSession::with_root("address");
        session.total_letters = 7;
        session.submit("add", &accept_all);
    }

    #[test]
    fn test_language_reaches_dictionary() {
        let mut session = GameSession::with_root("bobcat").with_language("fr");
        let french_only = |_: &str, language: &str| language == "fr";
        assert!(session.submit("cat", &french_only).is_accepted());
    }
}
