//! Line-oriented front ends: an interactive loop and a batch checker.

use crate::dictionary::DictionaryOracle;
use crate::games::scramble::{Game, GameSession, ValidationOutcome};
use rand::Rng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const NEW_GAME_COMMAND: &str = ":new";
const QUIT_COMMAND: &str = ":quit";

/// Verdict on one word from [`check_words`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The word as given.
    pub word: String,
    /// What the session made of it.
    pub outcome: ValidationOutcome,
    /// Alert title for rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alert message for rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckReport {
    fn new(word: &str, outcome: ValidationOutcome) -> Self {
        let (title, message) = match outcome.rejection() {
            Some(reason) => (Some(reason.title().to_string()), Some(reason.message().to_string())),
            None => (None, None),
        };
        Self {
            word: word.to_string(),
            outcome,
            title,
            message,
        }
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.title, &self.message) {
            (Some(title), Some(message)) => write!(f, "{}: {}: {}", self.word, title, message),
            _ => write!(f, "{}: accepted", self.word),
        }
    }
}

/// Submits each word, in order, to one session built on `root`.
#[instrument(skip(words, dictionary))]
pub fn check_words<I, S>(
    root: &str,
    language: &str,
    words: I,
    dictionary: &dyn DictionaryOracle,
) -> (GameSession, Vec<CheckReport>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = GameSession::with_root(root).with_language(language);
    let reports = words
        .into_iter()
        .map(|word| {
            let outcome = session.submit(word.as_ref(), dictionary);
            CheckReport::new(word.as_ref(), outcome)
        })
        .collect();
    (session, reports)
}

/// Plays a game over plain text streams.
///
/// Each input line is a submission; `:new` draws a new root word and
/// `:quit` (or end of input) stops.
#[instrument(skip_all)]
pub fn run_console<D, R, In, Out>(game: &mut Game<D, R>, input: In, mut output: Out) -> io::Result<()>
where
    D: DictionaryOracle,
    R: Rng,
    In: BufRead,
    Out: Write,
{
    info!(root = %game.session().root_word(), "Console game started");
    write_banner(&mut output, game.session())?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            QUIT_COMMAND => break,
            NEW_GAME_COMMAND => {
                let session = game.new_game();
                write_banner(&mut output, session)?;
            }
            "" => {}
            raw => {
                let outcome = game.submit(raw);
                debug!(?outcome, "Console submission");
                match outcome.rejection() {
                    None => {
                        let session = game.session();
                        if let Some(word) = session.accepted_words().first() {
                            writeln!(
                                output,
                                "+ {} ({})   Total words = {}   Total letters = {}",
                                word,
                                word.chars().count(),
                                session.word_count(),
                                session.total_letters()
                            )?;
                        }
                    }
                    Some(reason) => writeln!(output, "! {}: {}", reason.title(), reason.message())?,
                }
            }
        }
        output.flush()?;
    }

    let session = game.session();
    writeln!(
        output,
        "Final: {} words, {} letters",
        session.word_count(),
        session.total_letters()
    )?;
    Ok(())
}

fn write_banner(output: &mut impl Write, session: &GameSession) -> io::Result<()> {
    writeln!(output, "Root word: {}", session.root_word())?;
    writeln!(
        output,
        "Enter words made from its letters ({} for a new word, {} to stop)",
        NEW_GAME_COMMAND, QUIT_COMMAND
    )
}
