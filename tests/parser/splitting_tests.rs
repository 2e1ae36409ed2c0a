//! Tokenizer and splitter tests.

use castaway_parser::{CommandParser, CommandSplitter, InputTokenizer};
use proptest::prelude::*;

#[test]
fn split_fill_bucket_with_river() {
    let cmd = CommandSplitter::split(&InputTokenizer::tokenize("fill bucket with river"));
    assert_eq!(cmd.action_str, "FILL");
    assert_eq!(cmd.object_str.as_deref(), Some("BUCKET"));
    assert_eq!(cmd.preposition_str.as_deref(), Some("WITH"));
    assert_eq!(cmd.preposition_object_str.as_deref(), Some("RIVER"));
}

#[test]
fn multi_word_phrases_survive_splitting() {
    let cmd = CommandParser::split("Empty  fuel can INTO the engine room engine");
    assert_eq!(cmd.object_str.as_deref(), Some("FUEL CAN"));
    assert_eq!(cmd.preposition_str.as_deref(), Some("INTO"));
    assert_eq!(cmd.preposition_object_str.as_deref(), Some("THE ENGINE ROOM ENGINE"));
}

#[test]
fn in_is_a_preposition() {
    let cmd = CommandParser::split("empty bucket in well");
    assert_eq!(cmd.object_str.as_deref(), Some("BUCKET"));
    assert_eq!(cmd.preposition_str.as_deref(), Some("IN"));
}

#[test]
fn blank_input_splits_to_nothing() {
    assert!(CommandParser::split("").is_empty());
    assert!(CommandParser::split(" \t\n ").is_empty());
}

proptest! {
    #[test]
    fn tokenizing_is_idempotent(input in "[a-zA-Z \t]{0,40}") {
        let once = InputTokenizer::tokenize(&input);
        let twice = InputTokenizer::tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tokens_are_uppercase_and_trimmed(input in "[a-z ]{1,40}") {
        for token in InputTokenizer::tokenize(&input) {
            prop_assert_eq!(token.to_uppercase(), token.clone());
            prop_assert!(!token.contains(' '));
        }
    }
}
