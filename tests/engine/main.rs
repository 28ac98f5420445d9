//! Integration tests for Layer 3: Engine
//!
//! Tests the command pipeline against the demonstration content.

mod commands;
mod persistence;
mod trapdoor;

use waymark_engine::{ActionResult, CommandProcessor, MemoryPersistence};
use waymark_foundation::RoomId;
use waymark_runtime::RuntimeConfig;
use waymark_runtime::demo::demo_pack;
use waymark_storage::{Game, Player};

/// A processor, a fresh game, and a player standing in `room`.
pub fn setup(room: u32) -> (CommandProcessor, Game, Player) {
    let pack = demo_pack();
    let processor = CommandProcessor::new(pack.vocabulary().unwrap(), 7);
    let player = Player::new(RoomId::new(room), RuntimeConfig::starting_stats());
    (processor, pack.build_game().unwrap(), player)
}

/// Runs each input in turn, threading state through, and returns the last result.
pub fn run_all(room: u32, inputs: &[&str]) -> ActionResult {
    let (mut processor, mut game, mut player) = setup(room);
    let mut persistence = MemoryPersistence::new();
    let mut last = None;
    for input in inputs {
        let result = processor.execute(input, game, player, &mut persistence);
        game = result.game.clone();
        player = result.player.clone();
        last = Some(result);
    }
    last.unwrap()
}
