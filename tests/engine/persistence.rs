//! Integration tests for the persistence commands

use waymark_engine::persistence::save_name;
use waymark_engine::{MemoryPersistence, Persistence};
use waymark_foundation::RoomId;
use waymark_storage::LifecycleState;

use crate::{run_all, setup};

#[test]
fn quit_ends_the_game() {
    let result = run_all(1, &["quit"]);
    assert!(result.valid);
    assert_eq!(result.game.state(), LifecycleState::Ended);
    assert_eq!(result.game.messages(), ["Game over"]);
}

#[test]
fn restart_is_requested() {
    let result = run_all(1, &["e", "restart"]);
    assert!(result.valid);
    assert_eq!(result.game.state(), LifecycleState::Restart);
}

#[test]
fn load_without_saves() {
    let result = run_all(1, &["load"]);
    assert!(!result.valid);
    assert_eq!(result.game.messages(), ["No saved games"]);
    assert_eq!(result.game.state(), LifecycleState::Started);
}

#[test]
fn save_then_browse_then_load() {
    let (mut processor, game, player) = setup(1);
    let mut store = MemoryPersistence::new();

    let saved = processor.execute("save", game, player, &mut store);
    assert_eq!(saved.game.messages(), ["Game saved as save-1"]);
    assert_eq!(store.names(), [save_name(1)]);

    let moved = processor.execute("e", saved.game, saved.player, &mut store);
    assert_eq!(moved.player.room(), RoomId::new(2));

    let browsing = processor.execute("load", moved.game, moved.player, &mut store);
    assert!(browsing.valid);
    assert_eq!(browsing.game.state(), LifecycleState::SavedGames);
    assert_eq!(browsing.game.saves().displayed()[0], "save-1");

    let mut game = browsing.game;
    assert!(game.saves_mut().select(0));
    let loaded = processor.execute("load", game, browsing.player, &mut store);
    assert!(loaded.valid);
    assert_eq!(loaded.player.room(), RoomId::new(1));
    assert_eq!(loaded.game.state(), LifecycleState::Running);
    assert_eq!(loaded.game.messages(), ["Game loaded"]);
}

#[test]
fn quit_twice_stays_ended() {
    let (_, game, player) = setup(1);
    let mut store = MemoryPersistence::new();
    let ended = store.quit(game, player).unwrap();
    let again = store.quit(ended.game, ended.player).unwrap();
    assert_eq!(again.game.state(), LifecycleState::Ended);
}

#[test]
fn restart_after_ending_is_a_fault() {
    let (_, game, player) = setup(1);
    let mut store = MemoryPersistence::new();
    let ended = store.quit(game, player).unwrap();
    assert!(store.restart(ended.game, ended.player).is_err());
}
