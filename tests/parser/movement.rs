//! Integration tests for movement parsing
//!
//! Tests synonyms, elided directions, and the coded form of moves.

use proptest::prelude::*;
use waymark_foundation::{Direction, RoomId};
use waymark_parser::{CommandParser, Noun, ParsedCommand};
use waymark_runtime::demo::demo_pack;

fn parse_in(raw: &str, room: u32) -> ParsedCommand {
    let vocabulary = demo_pack().vocabulary().unwrap();
    CommandParser::new(&vocabulary).parse(raw, RoomId::new(room))
}

// =============================================================================
// Directions
// =============================================================================

#[test]
fn compass_letter_supplies_its_direction() {
    let command = parse_in("n", 15);
    assert_eq!(command.noun(), Noun::Direction(Direction::North));
    assert_eq!(command.coded(), Some((RoomId::new(15), Direction::North)));
}

#[test]
fn full_words_normalise_to_letters() {
    let command = parse_in("North", 3);
    assert_eq!(command.input(), "n");
    assert_eq!(command.coded(), Some((RoomId::new(3), Direction::North)));
}

#[test]
fn vertical_words_become_go_commands() {
    for (raw, direction) in [
        ("up", Direction::Up),
        ("d", Direction::Down),
        ("enter", Direction::In),
        ("outside", Direction::Out),
        ("in", Direction::In),
    ] {
        let command = parse_in(raw, 14);
        assert_eq!(command.verb_word(), "go", "{raw}");
        assert_eq!(command.coded(), Some((RoomId::new(14), direction)), "{raw}");
    }
}

#[test]
fn go_alone_is_ambiguous() {
    let command = parse_in("go", 1);
    assert_eq!(command.noun(), Noun::Ambiguous);
    assert_eq!(command.coded(), None);
    assert_eq!(command.origin(), Some(RoomId::new(1)));
}

#[test]
fn go_with_an_item_has_no_coded_form() {
    let command = parse_in("go lamp", 1);
    assert!(command.is_move());
    assert_eq!(command.coded(), None);
}

#[test]
fn non_moves_have_no_origin() {
    let command = parse_in("take lamp", 5);
    assert_eq!(command.origin(), None);
    assert!(!command.is_move());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn compass_letters_are_moves_from_any_room(room in 1u32..=20, letter in prop::sample::select(vec!["n", "s", "e", "w"])) {
        let command = parse_in(letter, room);
        prop_assert!(command.is_move());
        prop_assert_eq!(command.origin(), Some(RoomId::new(room)));
        prop_assert!(command.noun().direction().is_some());
    }

    #[test]
    fn parsing_never_panics(raw in ".{0,40}") {
        let command = parse_in(&raw, 1);
        prop_assert_eq!(command.input(), command.input().trim());
    }
}
