//! Integration tests for directions and room ids
//!
//! Tests direction codes, grid offsets, and room arithmetic.

use waymark_foundation::constants::ROW_WIDTH;
use waymark_foundation::{Direction, RoomId};

// =============================================================================
// Codes
// =============================================================================

#[test]
fn codes_round_trip_for_every_direction() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_code(direction.code()), Some(direction));
    }
}

#[test]
fn code_zero_and_past_end_are_none() {
    assert_eq!(Direction::from_code(0), None);
    assert_eq!(Direction::from_code(9), None);
}

// =============================================================================
// Grid Movement
// =============================================================================

#[test]
fn compass_offsets_follow_the_grid() {
    let room = RoomId::new(15);
    assert_eq!(room.offset(Direction::North.modifier().unwrap()), Some(RoomId::new(5)));
    assert_eq!(room.offset(Direction::South.modifier().unwrap()), Some(RoomId::new(25)));
    assert_eq!(room.offset(Direction::East.modifier().unwrap()), Some(RoomId::new(16)));
    assert_eq!(room.offset(Direction::West.modifier().unwrap()), Some(RoomId::new(14)));
}

#[test]
fn north_from_the_top_row_leaves_the_grid() {
    assert_eq!(RoomId::new(3).offset(-ROW_WIDTH), None);
}

#[test]
fn vertical_directions_have_no_offset() {
    for direction in [Direction::Up, Direction::Down, Direction::In, Direction::Out] {
        assert_eq!(direction.modifier(), None);
        assert!(!direction.is_compass());
    }
}

#[test]
fn room_display_names_the_number() {
    assert_eq!(RoomId::new(12).to_string(), "room 12");
}
