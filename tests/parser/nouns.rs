//! Integration tests for noun resolution

use waymark_foundation::{Direction, ItemId, RoomId};
use waymark_parser::{CommandParser, Noun};
use waymark_runtime::demo::demo_pack;

fn noun(raw: &str) -> Noun {
    let vocabulary = demo_pack().vocabulary().unwrap();
    CommandParser::new(&vocabulary).parse(raw, RoomId::new(1)).noun()
}

#[test]
fn item_nouns_resolve_to_items() {
    assert_eq!(noun("take lamp"), Noun::Item(ItemId::new(1)));
    assert_eq!(noun("drop coin"), Noun::Item(ItemId::new(4)));
}

#[test]
fn only_the_first_word_counts() {
    assert_eq!(noun("take key quickly"), Noun::Item(ItemId::new(2)));
    assert_eq!(noun("take the key"), Noun::Unresolved);
}

#[test]
fn unknown_nouns_are_unresolved() {
    assert_eq!(noun("take sword"), Noun::Unresolved);
    assert!(noun("quit now").is_unresolved());
}

#[test]
fn one_character_phrases_count_as_elided() {
    assert_eq!(noun("take k"), Noun::Absent);
}

#[test]
fn verbs_without_a_phrase_have_no_noun() {
    assert_eq!(noun("save"), Noun::Absent);
    assert_eq!(noun("take"), Noun::Absent);
}

#[test]
fn unknown_verb_without_a_phrase_is_unresolved() {
    assert_eq!(noun("dance"), Noun::Unresolved);
    assert_eq!(noun(""), Noun::Unresolved);
}

#[test]
fn direction_words_resolve_to_directions() {
    assert_eq!(noun("go west"), Noun::Direction(Direction::West));
    assert_eq!(noun("take north"), Noun::Direction(Direction::North));
}
