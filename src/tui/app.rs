//! Application state for the word entry screen.

use super::input::InputAction;
use tracing::{debug, instrument};
use word_scramble::{DictionaryOracle, Game, GameSession, ValidationOutcome};

/// Alert shown after a rejected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Alert title.
    pub title: &'static str,
    /// Alert body.
    pub message: &'static str,
}

/// Main application state.
#[derive(Debug)]
pub struct App<D, R> {
    game: Game<D, R>,
    input: String,
    alert: Option<Alert>,
    should_quit: bool,
}

impl<D, R> App<D, R>
where
    D: DictionaryOracle,
    R: rand::Rng,
{
    /// Creates a new application around a started game.
    pub fn new(game: Game<D, R>) -> Self {
        Self {
            game,
            input: String::new(),
            alert: None,
            should_quit: false,
        }
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        self.game.session()
    }

    /// Text in the entry field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The open alert, if any.
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one input action.
    #[instrument(skip(self), fields(input = %self.input))]
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Type(c) => self.input.push(c),
            InputAction::Erase => {
                self.input.pop();
            }
            InputAction::Submit => self.submit(),
            InputAction::NewGame => {
                let root = self.game.new_game().root_word().to_string();
                debug!(%root, "New word requested");
                self.input.clear();
                self.alert = None;
            }
            InputAction::Dismiss => self.alert = None,
            InputAction::Quit => self.should_quit = true,
        }
    }

    /// Submits the entry field; the field is cleared only when the word is accepted.
    fn submit(&mut self) {
        match self.game.submit(&self.input) {
            ValidationOutcome::Accepted => self.input.clear(),
            ValidationOutcome::Rejected(reason) => {
                self.alert = Some(Alert {
                    title: reason.title(),
                    message: reason.message(),
                });
            }
        }
    }
}
