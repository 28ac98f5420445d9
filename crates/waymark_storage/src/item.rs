//! Items.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::{ItemId, RoomId};

/// Where an item currently is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemLocation {
    /// Not placed anywhere in the world.
    Nowhere,
    /// Lying in a room.
    Room(RoomId),
    /// In the player's possession.
    Carried,
}

impl ItemLocation {
    /// Decodes the integer form used by content tables, where 0 means unplaced.
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        if code == 0 {
            Self::Nowhere
        } else {
            Self::Room(RoomId::new(code))
        }
    }

    /// Integer form: the room number, or 0 for carried and unplaced items.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Room(room) => room.get(),
            Self::Nowhere | Self::Carried => 0,
        }
    }
}

/// An object in the world.
///
/// The flag is an item-specific state field; any value of 1 or more keeps
/// the item out of room listings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    id: ItemId,
    name: String,
    flag: i32,
    location: ItemLocation,
}

impl Item {
    /// Creates an item.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, flag: i32, location: ItemLocation) -> Self {
        Self {
            id,
            name: name.into(),
            flag,
            location,
        }
    }

    /// This item's id.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item-specific state flag.
    #[must_use]
    pub fn flag(&self) -> i32 {
        self.flag
    }

    /// Overwrites the state flag.
    pub fn set_flag(&mut self, flag: i32) {
        self.flag = flag;
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> ItemLocation {
        self.location
    }

    /// Moves the item.
    pub fn set_location(&mut self, location: ItemLocation) {
        self.location = location;
    }

    /// Returns true if the item lies in the given room.
    #[must_use]
    pub fn is_at_location(&self, room: RoomId) -> bool {
        self.location == ItemLocation::Room(room)
    }

    /// Returns true if the player holds the item.
    #[must_use]
    pub fn is_carried(&self) -> bool {
        self.location == ItemLocation::Carried
    }

    /// Returns true if room listings show the item.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flag < 1
    }
}
