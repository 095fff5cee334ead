//! Letter feasibility: can the word be spelled from the root's letters?

use tracing::{debug, instrument};

/// Checks that every letter of `word` can be drawn from `root`.
///
/// Each letter of the root may be used at most once, so repeated letters
/// in the word need repeated letters in the root.
#[instrument]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => {
                debug!(%letter, "Letter not available in root word");
                return false;
            }
        }
    }

    true
}
