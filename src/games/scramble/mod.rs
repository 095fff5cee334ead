//! Word scramble: find words hidden in the letters of a root word.

mod action;
pub mod contracts;
mod game;
pub mod invariants;
pub mod rules;
mod session;
mod types;

pub use action::{Rejection, ValidationOutcome};
pub use game::Game;
pub use session::GameSession;
pub use types::{Candidate, DEFAULT_LANGUAGE, DEFAULT_ROOT_WORD, MIN_WORD_LENGTH};
