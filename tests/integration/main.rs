//! Cross-layer integration tests for Waymark
//!
//! Tests that drive the whole pipeline through the game engine.

mod properties;
mod save_files;

use waymark_engine::MemoryPersistence;
use waymark_foundation::RoomId;
use waymark_runtime::{GameEngine, RuntimeConfig};
use waymark_storage::{ContentPack, RoomSpec};

/// Verbs used by every hand-built pack.
pub const VERBS: [&str; 9] = ["n", "s", "e", "w", "go", "take", "drop", "save", "quit"];

/// A 3x10 grid where every room is open on all four sides, except at the
/// outer edges.
pub fn open_grid() -> ContentPack {
    let rooms = (1..=30u32)
        .map(|n| {
            let north = n > 10;
            let south = n <= 20;
            let east = n % 10 != 0;
            let west = n % 10 != 1;
            let flags: String = [north, south, east, west]
                .iter()
                .map(|open| if *open { '1' } else { '0' })
                .collect();
            RoomSpec::new(format!("0cell {n}{flags}"), "plain")
        })
        .collect();
    ContentPack {
        verbs: VERBS.iter().map(ToString::to_string).collect(),
        rooms,
        start_room: RoomId::new(15),
        ..ContentPack::default()
    }
}

/// An engine over `pack` with in-memory saves and no intro.
pub fn engine(pack: ContentPack) -> GameEngine {
    GameEngine::new(pack, RuntimeConfig::testing(), Box::new(MemoryPersistence::new())).unwrap()
}
