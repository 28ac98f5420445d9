//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use waymark_foundation::{Error, ErrorKind, Stat};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_room_out_of_range() {
    let err = Error::room_out_of_range(25, 20);
    assert!(matches!(err.kind, ErrorKind::RoomOutOfRange { id: 25, count: 20 }));
    let msg = format!("{err}");
    assert!(msg.contains("25"));
    assert!(msg.contains("20"));
}

#[test]
fn error_item_out_of_range() {
    let err = Error::item_out_of_range(0, 5);
    assert!(matches!(err.kind, ErrorKind::ItemOutOfRange { .. }));
    assert!(err.is_index_fault());
}

#[test]
fn error_invalid_content() {
    let err = Error::invalid_content("room 3 has no name");
    assert!(!err.is_index_fault());
    assert_eq!(format!("{err}"), "invalid content: room 3 has no name");
}

#[test]
fn error_unknown_stat() {
    let err = Stat::from_name("charisma").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownStat(ref name) if name == "charisma"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::io("disk full").with_context("saving save-3");
    assert_eq!(err.context.as_deref(), Some("saving save-3"));
    assert!(format!("{err}").contains("disk full"));
}

#[test]
fn error_vocabulary_index_is_index_fault() {
    let err = Error::new(ErrorKind::VocabularyIndex {
        table: "verb",
        index: 40,
        length: 14,
    });
    assert!(err.is_index_fault());
    assert!(format!("{err}").contains("verb"));
}
