//! Integration tests for command classification

use waymark_foundation::RoomId;
use waymark_parser::{CommandParser, CommandState, CommandType, ParsedCommand};
use waymark_runtime::demo::demo_pack;
use waymark_storage::Vocabulary;

fn parse(vocabulary: &Vocabulary, raw: &str) -> ParsedCommand {
    CommandParser::new(vocabulary).parse(raw, RoomId::new(1))
}

fn classified(raw: &str) -> (CommandState, CommandType) {
    let vocabulary = demo_pack().vocabulary().unwrap();
    let command = parse(&vocabulary, raw);
    (command.state(), command.kind())
}

// =============================================================================
// States
// =============================================================================

#[test]
fn compass_verbs_and_go_are_moves() {
    for raw in ["n", "s", "e", "w", "go north", "go"] {
        assert_eq!(classified(raw), (CommandState::Move, CommandType::None), "{raw}");
    }
}

#[test]
fn single_commands() {
    assert_eq!(classified("load"), (CommandState::SingleCommand, CommandType::Load));
    assert_eq!(classified("save"), (CommandState::SingleCommand, CommandType::Save));
    assert_eq!(classified("quit"), (CommandState::SingleCommand, CommandType::Quit));
    assert_eq!(classified("restart"), (CommandState::SingleCommand, CommandType::Restart));
}

#[test]
fn multiple_commands() {
    assert_eq!(classified("take lamp"), (CommandState::MultipleCommand, CommandType::Take));
    assert_eq!(classified("drop lamp"), (CommandState::MultipleCommand, CommandType::Drop));
    assert_eq!(classified("give coin"), (CommandState::MultipleCommand, CommandType::Give));
    assert_eq!(classified("examine key"), (CommandState::MultipleCommand, CommandType::None));
}

#[test]
fn unknown_verbs_have_no_state() {
    assert_eq!(classified("dance"), (CommandState::None, CommandType::None));
    assert_eq!(classified(""), (CommandState::None, CommandType::None));
}

#[test]
fn input_is_lower_cased_before_lookup() {
    assert_eq!(classified("TAKE LAMP"), (CommandState::MultipleCommand, CommandType::Take));
}

// =============================================================================
// Parsed Text
// =============================================================================

#[test]
fn command_keeps_canonical_input() {
    let vocabulary = demo_pack().vocabulary().unwrap();
    let command = parse(&vocabulary, "  Take   the Lamp ");
    assert_eq!(command.input(), "take   the lamp");
    assert_eq!(command.verb_word(), "take");
    assert_eq!(command.split().noun_phrase, "the lamp");
    assert_eq!(command.tokens(), ["take", "the", "lamp"]);
    assert!(command.has_noun_phrase());
}
