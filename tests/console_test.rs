//! Tests for the line-oriented front ends.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_scramble::{
    Game, Rejection, ValidationOutcome, WordList, WordSetDictionary, check_words, run_console,
};

fn dictionary() -> WordSetDictionary {
    WordSetDictionary::from_text("en", "cat\nbat\ncob\n")
}

#[test]
fn test_console_session() {
    let mut game = Game::new(
        WordList::parse("bobcat"),
        dictionary(),
        StdRng::seed_from_u64(1),
        "en",
    );
    let input = Cursor::new("cat\nca\ncat\n\nbob\n:new\nbat\n:quit\ncob\n");
    let mut output = Vec::new();

    run_console(&mut game, input, &mut output).expect("console io");
    let text = String::from_utf8(output).unwrap();

    assert!(text.starts_with("Root word: bobcat\n"));
    assert!(text.contains("+ cat (3)   Total words = 1   Total letters = 3"));
    assert!(text.contains("! Word too short: Words must be at least 3 letters long"));
    assert!(text.contains("! Word used already: Try another word"));
    assert!(text.contains("! Not a real word: Please try another word"));
    assert_eq!(text.matches("Root word: bobcat").count(), 2);
    assert!(text.contains("+ bat (3)   Total words = 1   Total letters = 3"));
    assert!(text.ends_with("Final: 1 words, 3 letters\n"));
    assert!(!text.contains("cob"));
}

#[test]
fn test_console_stops_at_end_of_input() {
    let mut game = Game::new(WordList::parse(""), dictionary(), StdRng::seed_from_u64(1), "en");
    let mut output = Vec::new();

    run_console(&mut game, Cursor::new(""), &mut output).expect("console io");
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Root word: silkworm\n"));
    assert!(text.ends_with("Final: 0 words, 0 letters\n"));
}

#[test]
fn test_check_words_reports_in_order() {
    let (session, reports) = check_words("bobcat", "en", ["cat", "CAT", "bobcat", "dog"], &dictionary());

    let outcomes: Vec<_> = reports.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        [
            ValidationOutcome::Accepted,
            ValidationOutcome::Rejected(Rejection::AlreadyUsed),
            ValidationOutcome::Rejected(Rejection::IsRootWord),
            ValidationOutcome::Rejected(Rejection::InfeasibleLetters),
        ]
    );
    assert_eq!(reports[1].title.as_deref(), Some("Word used already"));
    assert_eq!(reports[0].title, None);
    assert_eq!(session.accepted_words(), ["cat"]);
}

#[test]
fn test_check_words_json_lines() {
    let (_, reports) = check_words("bobcat", "en", ["ab"], &dictionary());
    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["word"], "ab");
    assert_eq!(json["outcome"]["outcome"], "Rejected");
    assert_eq!(json["outcome"]["reason"], "TooShort");
    assert_eq!(json["message"], "Words must be at least 3 letters long");
}
