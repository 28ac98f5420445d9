//! Save files on disk driven through the game engine

use std::fs;
use std::path::{Path, PathBuf};

use waymark_foundation::RoomId;
use waymark_runtime::demo::demo_pack;
use waymark_runtime::{FilePersistence, GameEngine, RuntimeConfig};
use waymark_storage::LifecycleState;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("waymark-it-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn engine_in(dir: &Path) -> GameEngine {
    let config = RuntimeConfig::testing().with_save_dir(dir);
    GameEngine::new(demo_pack(), config, Box::new(FilePersistence::new(dir))).unwrap()
}

#[test]
fn save_walk_and_load_back() {
    let dir = scratch_dir("walk");
    let mut engine = engine_in(&dir);
    engine.advance_intro();

    engine.process_command("save");
    assert_eq!(engine.messages(), ["Game saved as save-1"]);
    assert!(dir.join("save-1.sav").exists());

    engine.process_command("e");
    engine.process_command("load");
    assert_eq!(engine.state(), LifecycleState::SavedGames);
    assert_eq!(engine.displayed_saved_games()[0], "save-1");

    assert!(engine.select_saved_game(0));
    assert_eq!(engine.current_room(), RoomId::new(1));
    assert_eq!(engine.state(), LifecycleState::Running);
    assert_eq!(engine.messages(), ["Game loaded"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn paging_through_seven_saves() {
    let dir = scratch_dir("pages");
    let mut engine = engine_in(&dir);
    engine.advance_intro();
    for _ in 0..7 {
        engine.process_command("save");
    }

    engine.process_command("load");
    assert!(engine.lower_limit_saved_games());
    assert!(!engine.upper_limit_saved_games());
    assert_eq!(engine.displayed_saved_games()[4], "save-5");

    engine.increase_load_position();
    assert!(!engine.lower_limit_saved_games());
    assert!(engine.upper_limit_saved_games());
    assert_eq!(engine.displayed_saved_games()[..2], ["save-6", "save-7"]);

    engine.increase_load_position();
    assert_eq!(engine.displayed_saved_games()[0], "save-6");

    engine.decrease_load_position();
    assert_eq!(engine.displayed_saved_games()[0], "save-1");

    assert!(engine.select_saved_game(4));
    assert_eq!(engine.state(), LifecycleState::Running);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_slot_is_refused() {
    let dir = scratch_dir("empty-slot");
    let mut engine = engine_in(&dir);
    engine.process_command("save");
    engine.process_command("load");
    assert!(!engine.select_saved_game(3));
    assert_eq!(engine.state(), LifecycleState::SavedGames);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_save_fails_without_losing_the_game() {
    let dir = scratch_dir("corrupt");
    let mut engine = engine_in(&dir);
    engine.process_command("save");
    fs::write(dir.join("save-1.sav"), b"not a save").unwrap();
    engine.process_command("e");
    engine.process_command("load");
    assert!(engine.select_saved_game(0));

    assert_eq!(engine.messages(), ["Unable to load save-1"]);
    assert_eq!(engine.current_room(), RoomId::new(2));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn load_with_no_directory() {
    let dir = scratch_dir("nothing");
    let mut engine = engine_in(&dir);
    engine.process_command("load");
    assert_eq!(engine.messages(), ["No saved games"]);
    assert_ne!(engine.state(), LifecycleState::SavedGames);
}
