//! Integration tests for game state
//!
//! Tests room and item queries, descriptions, and message buffers.

use waymark_foundation::constants::OPENING_MESSAGE;
use waymark_foundation::{Direction, ItemId, RoomId};
use waymark_runtime::demo::demo_pack;
use waymark_storage::{Game, ItemLocation};

fn game() -> Game {
    demo_pack().build_game().unwrap()
}

// =============================================================================
// Rooms
// =============================================================================

#[test]
fn room_queries() {
    let game = game();
    assert_eq!(game.room_count(), 20);
    assert_eq!(game.room_name(RoomId::new(5)).unwrap(), "in the old mill");
    assert_eq!(game.room_exits(RoomId::new(5)).unwrap(), [false, true, true, true]);
    assert_eq!(game.room_image_type(RoomId::new(4)).unwrap(), "water");
}

#[test]
fn unknown_rooms_are_index_faults() {
    let game = game();
    assert!(game.room(RoomId::new(0)).unwrap_err().is_index_fault());
    assert!(game.room(RoomId::new(21)).unwrap_err().is_index_fault());
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn items_description_lists_visible_items() {
    let game = game();
    assert_eq!(game.items_description(RoomId::new(5)).unwrap(), "You see: a brass lamp");
    assert_eq!(game.items_description(RoomId::new(2)).unwrap(), "");
}

#[test]
fn special_item_comes_first() {
    let mut game = game();
    game.place_item(ItemId::new(2), ItemLocation::Room(RoomId::new(1))).unwrap();
    assert_eq!(
        game.items_description(RoomId::new(1)).unwrap(),
        "You see: a weathered signpost, an iron key"
    );
}

#[test]
fn flagged_items_are_hidden() {
    let mut game = game();
    game.item_mut(ItemId::new(1)).unwrap().set_flag(1);
    assert_eq!(game.items_description(RoomId::new(5)).unwrap(), "");
}

#[test]
fn hidden_exit_is_not_listed() {
    let game = game();
    assert!(!game.check_exit(RoomId::new(9), Direction::East).unwrap());
    assert!(game.check_exit(RoomId::new(9), Direction::West).unwrap());
    assert_eq!(game.exits_description(RoomId::new(9)).unwrap(), "You can go: West");
}

#[test]
fn special_exit_description() {
    let game = game();
    assert_eq!(game.special_exit_description(RoomId::new(14)), "A trapdoor lies open in the floor");
    assert_eq!(game.special_exit_description(RoomId::new(1)), "");
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn opening_message_is_first() {
    assert_eq!(game().messages(), [OPENING_MESSAGE]);
}

#[test]
fn clear_replaces_messages() {
    let mut game = game();
    game.add_message("first", false, false);
    assert_eq!(game.messages().len(), 2);
    game.add_message("second", true, false);
    assert_eq!(game.messages(), ["second"]);
}

#[test]
fn long_messages_wrap() {
    let mut game = game().with_line_width(10);
    game.add_message("the quick brown fox", true, true);
    assert_eq!(game.messages(), ["the quick", "brown fox"]);
}

#[test]
fn history_keeps_the_last_three() {
    let mut game = game();
    for command in ["n", "s", "e", "w"] {
        game.record_command(command);
    }
    assert_eq!(game.history().slots(), ["s", "e", "w"]);
}
