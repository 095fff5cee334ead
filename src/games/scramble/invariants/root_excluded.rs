//! Root exclusion invariant: the root word is never an accepted word.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the root word does not appear among accepted words.
pub struct RootExcludedInvariant;

impl Invariant<GameSession> for RootExcludedInvariant {
    fn holds(session: &GameSession) -> bool {
        !session
            .accepted_words()
            .iter()
            .any(|word| word == session.root_word())
    }

    fn description() -> &'static str {
        "Root word is never an accepted word"
    }
}
