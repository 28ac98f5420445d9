//! Integration tests for the storeroom trapdoor

use proptest::prelude::*;
use waymark_engine::MemoryPersistence;
use waymark_foundation::{ItemId, RoomId};

use crate::{run_all, setup};

#[test]
fn trapdoor_drops_into_the_top_row() {
    let result = run_all(14, &["go down"]);
    assert!(result.valid);
    let landing = result.player.room().get();
    assert!((1..=5).contains(&landing), "landed in {landing}");
    assert!(result.game.room_visited(result.player.room()).unwrap());
    assert_eq!(result.game.messages(), ["Ok"]);
}

#[test]
fn same_seed_same_landing() {
    let first = run_all(14, &["d"]);
    let second = run_all(14, &["d"]);
    assert_eq!(first.player.room(), second.player.room());
}

#[test]
fn closed_trapdoor_is_an_ordinary_move() {
    let (mut processor, mut game, player) = setup(14);
    game.item_mut(ItemId::new(5)).unwrap().set_flag(1);
    let result = processor.execute("go down", game, player, &mut MemoryPersistence::new());
    assert!(!result.valid);
    assert_eq!(result.player.room(), RoomId::new(14));
    assert_eq!(result.game.messages(), ["I don't understand"]);
}

#[test]
fn trapdoor_only_opens_downwards() {
    let result = run_all(14, &["go up"]);
    assert!(!result.valid);
    assert_eq!(result.player.room(), RoomId::new(14));
}

proptest! {
    #[test]
    fn every_seed_lands_in_the_top_row(seed in any::<u64>()) {
        let pack = waymark_runtime::demo::demo_pack();
        let mut processor = waymark_engine::CommandProcessor::new(pack.vocabulary().unwrap(), seed);
        let player = waymark_storage::Player::new(RoomId::new(14), waymark_runtime::RuntimeConfig::starting_stats());
        let result = processor.execute("go down", pack.build_game().unwrap(), player, &mut MemoryPersistence::new());
        prop_assert!(result.valid);
        prop_assert!((1..=5).contains(&result.player.room().get()));
    }
}
