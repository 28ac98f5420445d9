//! Integration tests for content packs
//!
//! Tests that packs build games and that broken packs are refused.

use waymark_foundation::{Direction, ErrorKind, ItemId, RoomId};
use waymark_runtime::demo::demo_pack;
use waymark_storage::{ContentPack, ItemSpec, RoomSpec, SpecialExit, Trapdoor};

fn is_invalid_content(pack: &ContentPack) -> bool {
    matches!(pack.build_game().map(|_| ()).unwrap_err().kind, ErrorKind::InvalidContent(_))
}

#[test]
fn demo_pack_marks_start_room_visited() {
    let game = demo_pack().build_game().unwrap();
    assert!(game.room_visited(RoomId::new(1)).unwrap());
    assert!(!game.room_visited(RoomId::new(2)).unwrap());
}

#[test]
fn item_in_missing_room_is_refused() {
    let mut pack = demo_pack();
    pack.items.push(ItemSpec::new("stone", "a stone", 99, 0));
    assert!(is_invalid_content(&pack));
}

#[test]
fn start_room_must_exist() {
    let mut pack = demo_pack();
    pack.start_room = RoomId::new(21);
    assert!(is_invalid_content(&pack));
}

#[test]
fn hidden_exit_must_be_compass() {
    let mut pack = demo_pack();
    pack.special_exits.push((
        RoomId::new(3),
        SpecialExit {
            hidden: Some(Direction::Up),
            description: String::new(),
        },
    ));
    assert!(is_invalid_content(&pack));
}

#[test]
fn trapdoor_needs_destinations() {
    let mut pack = demo_pack();
    pack.trapdoor = Some(Trapdoor {
        room: RoomId::new(14),
        direction: Direction::Down,
        item: ItemId::new(5),
        destinations: Vec::new(),
    });
    assert!(is_invalid_content(&pack));
}

#[test]
fn malformed_room_is_refused() {
    let mut pack = demo_pack();
    pack.rooms.push(RoomSpec::new("1a broken room10x1", "indoors"));
    assert!(pack.vocabulary().is_err());
    assert!(is_invalid_content(&pack));
}

#[test]
fn verb_table_must_open_with_moves() {
    let mut pack = demo_pack();
    pack.verbs.swap(0, 1);
    assert!(pack.vocabulary().is_err());
}
