//! Room-specific overrides: special exits, special item lines, and the trapdoor.
//!
//! These tables are content, not code. Empty tables leave the generic exit
//! bitfield and item listings untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use im::HashMap;
use waymark_foundation::{Direction, ItemId, RoomId};

/// A room's exit override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialExit {
    /// Geometric exit hidden from listings and movement, if any.
    pub hidden: Option<Direction>,
    /// Extra line describing the exit.
    pub description: String,
}

/// Per-room exit overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialExitHandler {
    exits: HashMap<RoomId, SpecialExit>,
}

impl SpecialExitHandler {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override for a room.
    pub fn insert(&mut self, room: RoomId, exit: SpecialExit) {
        self.exits.insert(room, exit);
    }

    /// Returns false if the room hides this direction.
    #[must_use]
    pub fn display_exit(&self, room: RoomId, direction: Direction) -> bool {
        self.exits
            .get(&room)
            .is_none_or(|exit| exit.hidden != Some(direction))
    }

    /// Extra exit description for a room, empty when there is none.
    #[must_use]
    pub fn special_exit(&self, room: RoomId) -> &str {
        self.exits
            .get(&room)
            .map_or("", |exit| exit.description.as_str())
    }
}

/// Per-room lines listed ahead of the room's items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialItemHandler {
    descriptions: HashMap<RoomId, String>,
}

impl SpecialItemHandler {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a description for a room.
    pub fn insert(&mut self, room: RoomId, description: impl Into<String>) {
        self.descriptions.insert(room, description.into());
    }

    /// Description for a room, empty when there is none.
    #[must_use]
    pub fn special_items(&self, room: RoomId) -> &str {
        self.descriptions.get(&room).map_or("", String::as_str)
    }
}

/// A chute that drops the player into a random room.
///
/// Fires when the player moves `direction` from `room` while `item`'s flag
/// is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trapdoor {
    /// Room holding the trapdoor.
    pub room: RoomId,
    /// Direction that triggers it.
    pub direction: Direction,
    /// Item whose flag arms it.
    pub item: ItemId,
    /// Rooms the player may land in.
    pub destinations: Vec<RoomId>,
}
