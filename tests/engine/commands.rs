//! Integration tests for validation, movement, and item commands

use waymark_foundation::{ItemId, RoomId, Stat};
use waymark_storage::ItemLocation;

use crate::run_all;

fn message(result: &waymark_engine::ActionResult) -> &str {
    result.game.messages().last().map_or("", String::as_str)
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn unknown_words_say_what() {
    let result = run_all(1, &["xyzzy"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "What!!");
}

#[test]
fn unknown_noun_names_the_input() {
    let result = run_all(1, &["take sword"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "You can't take sword");
}

#[test]
fn take_needs_a_noun() {
    let result = run_all(1, &["take"]);
    assert_eq!(message(&result), "Most commands need two words");
}

#[test]
fn go_needs_a_direction() {
    let result = run_all(1, &["go"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "Most commands need two words");
}

#[test]
fn rejected_commands_change_nothing_but_the_message() {
    let result = run_all(1, &["dance"]);
    assert_eq!(result.player.room(), RoomId::new(1));
    assert_eq!(result.game.messages(), ["What!!"]);
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn walking_east_along_the_top_row() {
    let result = run_all(1, &["e", "east", "go east", "e"]);
    assert!(result.valid);
    assert_eq!(result.player.room(), RoomId::new(5));
    assert_eq!(message(&result), "Ok");
    assert!(result.game.room_visited(RoomId::new(3)).unwrap());
}

#[test]
fn blocked_exit() {
    let result = run_all(1, &["n"]);
    assert!(!result.valid);
    assert_eq!(result.player.room(), RoomId::new(1));
    assert_eq!(message(&result), "You can't go that way");
}

#[test]
fn hidden_exit_blocks_movement() {
    let result = run_all(9, &["e"]);
    assert!(!result.valid);
    assert_eq!(result.player.room(), RoomId::new(9));
}

#[test]
fn vertical_moves_are_not_understood() {
    let result = run_all(1, &["go up"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "I don't understand");
}

#[test]
fn down_to_the_cellar() {
    let result = run_all(1, &["s"]);
    assert!(result.valid);
    assert_eq!(result.player.room(), RoomId::new(11));
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn take_and_drop_the_lamp() {
    let result = run_all(5, &["take lamp"]);
    assert!(result.valid);
    assert_eq!(message(&result), "Taken");
    assert!(result.game.item(ItemId::new(1)).unwrap().is_carried());
    assert!((result.player.stat(Stat::Weight) - 1.0).abs() < f64::EPSILON);

    let result = run_all(5, &["take lamp", "e", "drop lamp"]);
    assert!(result.valid);
    assert_eq!(message(&result), "Dropped");
    assert_eq!(
        result.game.item(ItemId::new(1)).unwrap().location(),
        ItemLocation::Room(RoomId::new(6))
    );
    assert!(result.player.stat(Stat::Weight).abs() < f64::EPSILON);
}

#[test]
fn take_something_elsewhere() {
    let result = run_all(1, &["take lamp"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "I don't see it here");
}

#[test]
fn take_twice() {
    let result = run_all(5, &["take lamp", "take lamp"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "You already have it");
}

#[test]
fn drop_what_you_do_not_have() {
    let result = run_all(5, &["drop lamp"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "You are not carrying it");
}

#[test]
fn nobody_takes_gifts() {
    let result = run_all(5, &["take lamp", "give lamp"]);
    assert!(!result.valid);
    assert_eq!(message(&result), "Nobody here wants it");
    assert!(result.game.item(ItemId::new(1)).unwrap().is_carried());
}

#[test]
fn other_verbs_do_nothing() {
    let result = run_all(1, &["examine key"]);
    assert!(result.valid);
    assert_eq!(message(&result), "Nothing happens");
}

// =============================================================================
// Faults
// =============================================================================

#[test]
fn missing_room_returns_the_state_from_before() {
    let result = run_all(30, &["e"]);
    assert!(!result.valid);
    assert_eq!(result.player.room(), RoomId::new(30));
    assert_eq!(result.game.messages(), ["Let your quest begin!"]);
}
