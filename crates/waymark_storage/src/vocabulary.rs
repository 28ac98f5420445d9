//! Vocabulary store for parser lookups.
//!
//! Holds the verb and noun tables plus the display names for rooms, items,
//! and prepositions. Read-only after construction. Tables are small (tens of
//! entries) so lookups are plain linear scans.

use waymark_foundation::{Direction, Error, ErrorKind, ItemId, NounId, Result, RoomId, VerbId};

/// Verbs that must open the verb table, in order. Ids 1..=5 form the move range.
pub const MOVE_VERBS: [&str; 5] = ["n", "s", "e", "w", "go"];

/// Direction words that follow the item nouns, in [`Direction::ALL`] order.
pub const DIRECTION_NOUNS: [&str; 8] = ["north", "south", "east", "west", "up", "down", "in", "out"];

/// What a resolved noun refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NounTarget {
    /// One of the game's items.
    Item(ItemId),
    /// A direction word.
    Direction(Direction),
}

/// Verb ids with a fixed meaning to the command pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbCodes {
    /// The generic "go" verb.
    pub go: VerbId,
    /// Pick an item up.
    pub take: Option<VerbId>,
    /// Put a carried item down.
    pub drop: Option<VerbId>,
    /// Hand a carried item over.
    pub give: Option<VerbId>,
    /// Restore a saved game.
    pub load: Option<VerbId>,
    /// Save the current game.
    pub save: Option<VerbId>,
    /// End the game.
    pub quit: Option<VerbId>,
    /// Start over.
    pub restart: Option<VerbId>,
}

impl VerbCodes {
    /// Returns true if the verb sits in the contiguous move range.
    #[must_use]
    pub fn is_move(&self, verb: VerbId) -> bool {
        (1..=self.go.get()).contains(&verb.get())
    }

    /// Returns the direction encoded by a single-letter compass verb.
    #[must_use]
    pub fn compass_direction(&self, verb: VerbId) -> Option<Direction> {
        if verb.get() < self.go.get() {
            Direction::from_code(verb.get())
        } else {
            None
        }
    }

    /// Returns true if the verb is "go".
    #[must_use]
    pub fn is_go(&self, verb: VerbId) -> bool {
        verb == self.go
    }
}

/// Runtime storage for all vocabulary tables.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    verbs: Vec<String>,
    nouns: Vec<String>,
    prepositions: Vec<String>,
    room_names: Vec<String>,
    item_names: Vec<String>,
    codes: VerbCodes,
}

impl Vocabulary {
    /// Builds a vocabulary from its tables.
    ///
    /// The verb table must start with [`MOVE_VERBS`]. The noun table must hold
    /// one noun per item followed by the eight [`DIRECTION_NOUNS`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidContent`] when either layout is violated.
    pub fn new(
        verbs: Vec<String>,
        nouns: Vec<String>,
        prepositions: Vec<String>,
        room_names: Vec<String>,
        item_names: Vec<String>,
    ) -> Result<Self> {
        for (slot, expected) in MOVE_VERBS.iter().enumerate() {
            match verbs.get(slot) {
                Some(verb) if verb == expected => {}
                found => {
                    return Err(Error::invalid_content(format!(
                        "verb {} must be '{expected}', found {found:?}",
                        slot + 1
                    )));
                }
            }
        }

        let expected_nouns = item_names.len() + DIRECTION_NOUNS.len();
        if nouns.len() != expected_nouns {
            return Err(Error::invalid_content(format!(
                "noun table has {} entries, expected {} items plus {} directions",
                nouns.len(),
                item_names.len(),
                DIRECTION_NOUNS.len()
            )));
        }

        let find = |name: &str| Self::scan(&verbs, name).map(VerbId::from_slot);
        let codes = VerbCodes {
            go: VerbId::from_slot(MOVE_VERBS.len() - 1),
            take: find("take"),
            drop: find("drop"),
            give: find("give"),
            load: find("load"),
            save: find("save"),
            quit: find("quit"),
            restart: find("restart"),
        };

        Ok(Self {
            verbs,
            nouns,
            prepositions,
            room_names,
            item_names,
            codes,
        })
    }

    fn scan(table: &[String], word: &str) -> Option<usize> {
        table.iter().position(|entry| entry == word)
    }

    fn entry<'a>(table: &'a [String], name: &'static str, index: usize) -> Result<&'a str> {
        index
            .checked_sub(1)
            .and_then(|slot| table.get(slot))
            .map(String::as_str)
            .ok_or_else(|| {
                Error::new(ErrorKind::VocabularyIndex {
                    table: name,
                    index,
                    length: table.len(),
                })
            })
    }

    /// Looks a verb up by its exact word.
    #[must_use]
    pub fn verb_at(&self, word: &str) -> Option<VerbId> {
        Self::scan(&self.verbs, word).map(VerbId::from_slot)
    }

    /// Looks a noun up by its exact word.
    #[must_use]
    pub fn noun_at(&self, word: &str) -> Option<NounId> {
        Self::scan(&self.nouns, word).map(NounId::from_slot)
    }

    /// The verb id handed out when a word is not in the verb table.
    #[must_use]
    pub fn unknown_verb(&self) -> VerbId {
        VerbId::from_slot(self.verbs.len())
    }

    /// Returns true if the id names an entry of the verb table.
    #[must_use]
    pub fn is_known_verb(&self, verb: VerbId) -> bool {
        verb.slot().is_some_and(|slot| slot < self.verbs.len())
    }

    /// Decides whether a noun names an item or a direction.
    ///
    /// Item nouns occupy ids `1..=item_count`; the direction words follow,
    /// so their direction code is the id minus the item count.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::VocabularyIndex`] for ids outside the noun table.
    pub fn noun_target(&self, noun: NounId) -> Result<NounTarget> {
        let raw = noun.get() as usize;
        if raw == 0 || raw > self.nouns.len() {
            return Err(Error::new(ErrorKind::VocabularyIndex {
                table: "noun",
                index: raw,
                length: self.nouns.len(),
            }));
        }
        let item_count = self.item_names.len();
        if raw <= item_count {
            return Ok(NounTarget::Item(ItemId::new(noun.get())));
        }
        let code = u32::try_from(raw - item_count).unwrap_or(u32::MAX);
        Direction::from_code(code)
            .map(NounTarget::Direction)
            .ok_or_else(|| Error::new(ErrorKind::Internal(format!("no direction for {noun:?}"))))
    }

    /// Returns the word for a verb id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::VocabularyIndex`] for ids outside the table.
    pub fn verb(&self, verb: VerbId) -> Result<&str> {
        Self::entry(&self.verbs, "verb", verb.get() as usize)
    }

    /// Returns the word for a noun id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::VocabularyIndex`] for ids outside the table.
    pub fn noun(&self, noun: NounId) -> Result<&str> {
        Self::entry(&self.nouns, "noun", noun.get() as usize)
    }

    /// Returns a preposition by its 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::VocabularyIndex`] for indices outside the table.
    pub fn preposition(&self, index: usize) -> Result<&str> {
        Self::entry(&self.prepositions, "preposition", index)
    }

    /// Returns a room's display name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RoomOutOfRange`] for unknown rooms.
    pub fn room_name(&self, room: RoomId) -> Result<&str> {
        room.slot()
            .and_then(|slot| self.room_names.get(slot))
            .map(String::as_str)
            .ok_or_else(|| Error::room_out_of_range(i64::from(room.get()), self.room_names.len()))
    }

    /// Returns an item's display name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemOutOfRange`] for unknown items.
    pub fn item_name(&self, item: ItemId) -> Result<&str> {
        item.slot()
            .and_then(|slot| self.item_names.get(slot))
            .map(String::as_str)
            .ok_or_else(|| Error::item_out_of_range(i64::from(item.get()), self.item_names.len()))
    }

    /// Number of verbs.
    #[must_use]
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Number of nouns, directions included.
    #[must_use]
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Number of item nouns at the front of the noun table.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_names.len()
    }

    /// Verb ids with a fixed meaning.
    #[must_use]
    pub fn codes(&self) -> &VerbCodes {
        &self.codes
    }

    /// All verbs in id order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }
}
