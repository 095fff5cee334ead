//! Contract-based validation for word scramble.
//!
//! Every submission passes through the same ordered pipeline of
//! preconditions. The first failing stage decides the rejection the
//! player sees, so the order is part of the contract.

use super::action::Rejection;
use super::invariants::{InvariantSet, ScrambleInvariants};
use super::rules;
use super::session::GameSession;
use super::types::Candidate;
use crate::dictionary::DictionaryOracle;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    ///
    /// Returns descriptions of every broken invariant.
    fn post(before: &S, after: &S) -> Result<(), Vec<String>>;
}

// ─────────────────────────────────────────────────────────────
//  Submission Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the candidate has at least three letters.
pub struct MinimumLength;

impl MinimumLength {
    /// Rejects candidates shorter than three letters.
    #[instrument(skip_all, fields(candidate = %candidate))]
    pub fn check(candidate: &Candidate) -> Result<(), Rejection> {
        if rules::is_long_enough(candidate.as_str()) {
            Ok(())
        } else {
            Err(Rejection::TooShort)
        }
    }
}

/// Precondition: the candidate is not the root word.
pub struct NotRootWord;

impl NotRootWord {
    /// Rejects the root word itself.
    #[instrument(skip_all, fields(candidate = %candidate))]
    pub fn check(candidate: &Candidate, session: &GameSession) -> Result<(), Rejection> {
        if rules::is_root_word(candidate.as_str(), session.root_word()) {
            Err(Rejection::IsRootWord)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the candidate was not accepted earlier.
pub struct Original;

impl Original {
    /// Rejects words already in the session.
    #[instrument(skip_all, fields(candidate = %candidate))]
    pub fn check(candidate: &Candidate, session: &GameSession) -> Result<(), Rejection> {
        if rules::is_original(candidate.as_str(), session.accepted_words()) {
            Ok(())
        } else {
            Err(Rejection::AlreadyUsed)
        }
    }
}

/// Precondition: the root word holds enough of every letter.
pub struct Feasible;

impl Feasible {
    /// Rejects words that need letters the root lacks.
    #[instrument(skip_all, fields(candidate = %candidate))]
    pub fn check(candidate: &Candidate, session: &GameSession) -> Result<(), Rejection> {
        if rules::is_possible(candidate.as_str(), session.root_word()) {
            Ok(())
        } else {
            Err(Rejection::InfeasibleLetters)
        }
    }
}

/// Precondition: the dictionary recognizes the candidate.
pub struct RealWord;

impl RealWord {
    /// Rejects words the dictionary does not know.
    #[instrument(skip_all, fields(candidate = %candidate, language = %session.language()))]
    pub fn check(
        candidate: &Candidate,
        session: &GameSession,
        dictionary: &dyn DictionaryOracle,
    ) -> Result<(), Rejection> {
        if candidate.len() < super::MIN_WORD_LENGTH {
            return Err(Rejection::NotAWord);
        }
        if dictionary.is_word(candidate.as_str(), session.language()) {
            Ok(())
        } else {
            Err(Rejection::NotAWord)
        }
    }
}

/// Composite precondition: runs every stage in order, stopping at the first failure.
pub struct LegalSubmission;

impl LegalSubmission {
    /// Validates all preconditions for a submission.
    #[instrument(skip_all, fields(candidate = %candidate, root = %session.root_word()))]
    pub fn check(
        candidate: &Candidate,
        session: &GameSession,
        dictionary: &dyn DictionaryOracle,
    ) -> Result<(), Rejection> {
        MinimumLength::check(candidate)?;
        NotRootWord::check(candidate, session)?;
        Original::check(candidate, session)?;
        Feasible::check(candidate, session)?;
        RealWord::check(candidate, session, dictionary)?;
        debug!("All submission checks passed");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Submission Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// A candidate paired with the dictionary that will judge it.
pub struct Submission<'a> {
    /// Normalized candidate.
    pub candidate: &'a Candidate,
    /// Dictionary consulted by the final stage.
    pub dictionary: &'a dyn DictionaryOracle,
}

/// Contract for submissions.
///
/// Preconditions:
/// - At least three letters
/// - Not the root word
/// - Not used before
/// - Spelled from the root's letters
/// - Known to the dictionary
///
/// Postconditions:
/// - Letter total matches accepted words
/// - Accepted words unique and long enough
/// - Root word never accepted
pub struct SubmissionContract;

impl Contract<GameSession, Submission<'_>> for SubmissionContract {
    fn pre(session: &GameSession, action: &Submission<'_>) -> Result<(), Rejection> {
        LegalSubmission::check(action.candidate, session, action.dictionary)
    }

    fn post(_before: &GameSession, after: &GameSession) -> Result<(), Vec<String>> {
        ScrambleInvariants::check_all(after).map_err(|violations| {
            violations.into_iter().map(|v| v.description).collect()
        })
    }
}
