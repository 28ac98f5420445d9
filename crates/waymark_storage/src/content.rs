//! Static content packs.
//!
//! A [`ContentPack`] is the plain data a game is built from: vocabulary
//! tables, encoded rooms, items, and the room-specific overrides. Building
//! validates the data once so the pipeline never sees malformed tables.

use waymark_foundation::{Error, ItemId, Result, RoomId};

use crate::game::Game;
use crate::item::{Item, ItemLocation};
use crate::room::Room;
use crate::special::{SpecialExit, SpecialExitHandler, SpecialItemHandler, Trapdoor};
use crate::vocabulary::{DIRECTION_NOUNS, Vocabulary};

/// One room in packed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSpec {
    /// `<preposition digit><name><NSEW flags>`, see [`Room::from_encoded`].
    pub encoded: String,
    /// Image type shown for the room.
    pub image: String,
}

impl RoomSpec {
    /// Creates a room spec.
    #[must_use]
    pub fn new(encoded: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
            image: image.into(),
        }
    }
}

/// One item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    /// Word the parser matches, e.g. `"lamp"`.
    pub noun: String,
    /// Display name, e.g. `"a brass lamp"`.
    pub name: String,
    /// Starting room number; 0 leaves the item unplaced.
    pub location: u32,
    /// Starting flag.
    pub flag: i32,
}

impl ItemSpec {
    /// Creates an item spec.
    #[must_use]
    pub fn new(noun: impl Into<String>, name: impl Into<String>, location: u32, flag: i32) -> Self {
        Self {
            noun: noun.into(),
            name: name.into(),
            location,
            flag,
        }
    }
}

/// Everything needed to build a vocabulary and a fresh game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPack {
    /// Verb table; must start with `n s e w go`.
    pub verbs: Vec<String>,
    /// Prepositions referenced by encoded room names.
    pub prepositions: Vec<String>,
    /// Rooms in id order.
    pub rooms: Vec<RoomSpec>,
    /// Items in id order.
    pub items: Vec<ItemSpec>,
    /// Per-room exit overrides.
    pub special_exits: Vec<(RoomId, SpecialExit)>,
    /// Per-room lines listed ahead of the items.
    pub special_items: Vec<(RoomId, String)>,
    /// Optional trapdoor rule.
    pub trapdoor: Option<Trapdoor>,
    /// Room the player starts in.
    pub start_room: RoomId,
}

impl Default for ContentPack {
    fn default() -> Self {
        Self {
            verbs: Vec::new(),
            prepositions: Vec::new(),
            rooms: Vec::new(),
            items: Vec::new(),
            special_exits: Vec::new(),
            special_items: Vec::new(),
            trapdoor: None,
            start_room: RoomId::new(1),
        }
    }
}

impl ContentPack {
    fn decode_rooms(&self) -> Result<Vec<Room>> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(slot, spec)| {
                Room::from_encoded(RoomId::from_slot(slot), &spec.encoded, &self.prepositions, spec.image.as_str())
            })
            .collect()
    }

    /// Noun table: item nouns in id order, then the direction words.
    #[must_use]
    pub fn nouns(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.noun.clone())
            .chain(DIRECTION_NOUNS.iter().map(ToString::to_string))
            .collect()
    }

    /// Builds the read-only vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error for malformed tables or rooms.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let rooms = self.decode_rooms()?;
        Vocabulary::new(
            self.verbs.clone(),
            self.nouns(),
            self.prepositions.clone(),
            rooms.iter().map(|room| room.name().to_string()).collect(),
            self.items.iter().map(|item| item.name.clone()).collect(),
        )
    }

    /// Builds a fresh game with the start room marked visited.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error when rooms fail to decode, or when
    /// an override, item, or the start room points at a room that does
    /// not exist.
    pub fn build_game(&self) -> Result<Game> {
        let rooms = self.decode_rooms()?;
        let room_count = rooms.len();
        let check_room = |room: RoomId, what: &str| -> Result<()> {
            if room.slot().is_some_and(|slot| slot < room_count) {
                Ok(())
            } else {
                Err(Error::invalid_content(format!("{what} refers to missing {room}")))
            }
        };

        check_room(self.start_room, "start room")?;

        let mut items = Vec::with_capacity(self.items.len());
        for (slot, spec) in self.items.iter().enumerate() {
            let location = ItemLocation::from_code(spec.location);
            if let ItemLocation::Room(room) = location {
                check_room(room, spec.name.as_str())?;
            }
            items.push(Item::new(ItemId::from_slot(slot), spec.name.as_str(), spec.flag, location));
        }

        let mut exits = SpecialExitHandler::new();
        for (room, exit) in &self.special_exits {
            check_room(*room, "special exit")?;
            if exit.hidden.is_some_and(|direction| !direction.is_compass()) {
                return Err(Error::invalid_content(format!(
                    "special exit in {room} hides a non-compass direction"
                )));
            }
            exits.insert(*room, exit.clone());
        }

        let mut descriptions = SpecialItemHandler::new();
        for (room, description) in &self.special_items {
            check_room(*room, "special item")?;
            descriptions.insert(*room, description.as_str());
        }

        let mut game = Game::new(rooms, items)
            .with_special_exits(exits)
            .with_special_items(descriptions);

        if let Some(trapdoor) = &self.trapdoor {
            check_room(trapdoor.room, "trapdoor")?;
            if trapdoor.item.slot().is_none_or(|slot| slot >= self.items.len()) {
                return Err(Error::invalid_content(format!(
                    "trapdoor refers to missing {}",
                    trapdoor.item
                )));
            }
            if trapdoor.destinations.is_empty() {
                return Err(Error::invalid_content("trapdoor has no destinations"));
            }
            for room in &trapdoor.destinations {
                check_room(*room, "trapdoor destination")?;
            }
            game = game.with_trapdoor(trapdoor.clone());
        }

        game.set_room_visited(self.start_room)?;
        tracing::debug!(
            rooms = game.room_count(),
            items = game.item_count(),
            "game built from content pack"
        );
        Ok(game)
    }
}
