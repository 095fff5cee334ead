//! Letter tally invariant: the running total matches the accepted words.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `total_letters` equals the summed length of accepted words.
pub struct LetterTallyInvariant;

impl Invariant<GameSession> for LetterTallyInvariant {
    fn holds(session: &GameSession) -> bool {
        let summed: usize = session
            .accepted_words()
            .iter()
            .map(|word| word.chars().count())
            .sum();
        summed == session.total_letters()
    }

    fn description() -> &'static str {
        "Total letters equals the summed length of accepted words"
    }
}
