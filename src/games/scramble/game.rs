//! A running game: word list, dictionary, random source and current session.

use super::action::ValidationOutcome;
use super::session::GameSession;
use crate::dictionary::DictionaryOracle;
use crate::word_list::WordList;
use rand::Rng;
use tracing::instrument;

/// Everything a front end needs to play.
///
/// The random source is injected so callers can pin root word choices.
#[derive(Debug)]
pub struct Game<D, R> {
    word_list: WordList,
    dictionary: D,
    rng: R,
    language: String,
    session: GameSession,
}

impl<D, R> Game<D, R>
where
    D: DictionaryOracle,
    R: Rng,
{
    /// Creates a game and starts its first session.
    #[instrument(skip_all, fields(candidates = word_list.len(), language = %language.as_ref()))]
    pub fn new(word_list: WordList, dictionary: D, mut rng: R, language: impl AsRef<str>) -> Self {
        let language = language.as_ref().to_string();
        let session = GameSession::start(&word_list, &mut rng).with_language(language.clone());
        Self {
            word_list,
            dictionary,
            rng,
            language,
            session,
        }
    }

    /// Throws away the current session and draws a fresh root word.
    #[instrument(skip(self), fields(previous_root = %self.session.root_word()))]
    pub fn new_game(&mut self) -> &GameSession {
        self.session =
            GameSession::start(&self.word_list, &mut self.rng).with_language(self.language.clone());
        &self.session
    }

    /// Submits raw player input to the current session.
    #[instrument(skip(self))]
    pub fn submit(&mut self, raw: &str) -> ValidationOutcome {
        self.session.submit(raw, &self.dictionary)
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
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
    fn test_new_game_resets_session() {
        let words = WordList::parse("bobcat");
        let mut game = Game::new(words, accept_all, StdRng::seed_from_u64(3), "en");
        assert!(game.submit("cat").is_accepted());
        assert_eq!(game.session().word_count(), 1);

        let session = game.new_game();
        assert_eq!(session.root_word(), "bobcat");
        assert_eq!(session.word_count(), 0);
        assert_eq!(session.total_letters(), 0);
        assert!(game.submit("cat").is_accepted());
    }

    #[test]
    fn test_language_survives_new_game() {
        let words = WordList::parse("bobcat");
        let english_only = |_: &str, language: &str| language == "en";
        let mut game = Game::new(words, english_only, StdRng::seed_from_u64(3), "de");
        assert_eq!(game.submit("cat").rejection(), Some(Rejection::NotAWord));
        game.new_game();
        assert_eq!(game.session().language(), "de");
    }
}
