//! Submission outcomes for word scramble.
//!
//! A rejection is an expected, recoverable answer to the player, not a
//! failure of the program. Each kind carries the alert shown to the player.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a candidate word was turned down.
///
/// Variants are listed in the order the submission pipeline checks them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Rejection {
    /// Fewer than three letters after normalization.
    #[display("Word too short")]
    TooShort,

    /// The candidate is the root word itself.
    #[display("Invalid word")]
    IsRootWord,

    /// The candidate was accepted earlier this session.
    #[display("Word used already")]
    AlreadyUsed,

    /// The root word does not hold enough of some letter.
    #[display("Word includes invalid letters")]
    InfeasibleLetters,

    /// The dictionary does not know the candidate.
    #[display("Not a real word")]
    NotAWord,
}

impl Rejection {
    /// Alert title shown to the player.
    #[instrument]
    pub fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::IsRootWord => "Invalid word",
            Self::AlreadyUsed => "Word used already",
            Self::InfeasibleLetters => "Word includes invalid letters",
            Self::NotAWord => "Not a real word",
        }
    }

    /// Alert body shown to the player.
    #[instrument]
    pub fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Words must be at least 3 letters long",
            Self::IsRootWord => "Nice try",
            Self::AlreadyUsed => "Try another word",
            Self::InfeasibleLetters => "Must use letters from the word above",
            Self::NotAWord => "Please try another word",
        }
    }

    /// The (title, message) pair for an alert.
    pub fn alert(self) -> (&'static str, &'static str) {
        (self.title(), self.message())
    }
}

/// Result of submitting a candidate to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason")]
pub enum ValidationOutcome {
    /// The word was added to the session.
    Accepted,
    /// The word was turned down; the session is unchanged.
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Returns true for [`ValidationOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationOutcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(reason) => Self::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_rejection_has_an_alert() {
        for reason in Rejection::iter() {
            let (title, message) = reason.alert();
            assert!(!title.is_empty(), "{} has no title", reason.as_ref());
            assert!(!message.is_empty(), "{} has no message", reason.as_ref());
            assert_eq!(reason.to_string(), title);
        }
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(ValidationOutcome::from(Ok(())), ValidationOutcome::Accepted);
        assert_eq!(
            ValidationOutcome::from(Err(Rejection::NotAWord)).rejection(),
            Some(Rejection::NotAWord)
        );
    }

    #[test]
    fn test_outcome_serializes_with_reason() {
        let json = serde_json::to_string(&ValidationOutcome::Rejected(Rejection::TooShort))
            .expect("serializable");
        assert_eq!(json, r#"{"outcome":"Rejected","reason":"TooShort"}"#);

        let json = serde_json::to_string(&ValidationOutcome::Accepted).expect("serializable");
        assert_eq!(json, r#"{"outcome":"Accepted"}"#);
    }
}
