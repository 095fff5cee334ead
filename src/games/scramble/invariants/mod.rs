//! First-class invariants for word scramble sessions.
//!
//! Invariants are logical properties that must hold after every submission,
//! accepted or not. They are testable independently and checked after each
//! accepted word in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod letter_tally;
pub mod root_excluded;
pub mod unique_words;

pub use letter_tally::LetterTallyInvariant;
pub use root_excluded::RootExcludedInvariant;
pub use unique_words::UniqueWordsInvariant;

/// All session invariants as a composable set.
pub type ScrambleInvariants = (
    LetterTallyInvariant,
    UniqueWordsInvariant,
    RootExcludedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::scramble::GameSession;

    fn accept_all(_word: &str, _language: &str) -> bool {
        true
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::with_root("address");
        assert!(ScrambleInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_submissions() {
        let mut session = GameSession::with_root("address");
        for word in ["add", "dress", "ad", "add", "address", "zzz"] {
            session.submit(word, &accept_all);
            assert!(ScrambleInvariants::check_all(&session).is_ok());
        }
        assert_eq!(session.word_count(), 2);
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = GameSession::with_root("address");
        session.submit("add", &accept_all);
        session.total_letters += 10;
        session.accepted_words.push("address".to_string());

        let violations = ScrambleInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::with_root("bobcat");

        type TwoInvariants = (LetterTallyInvariant, RootExcludedInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
