//! Rooms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::constants::NUMBER_EXITS;
use waymark_foundation::{Direction, Error, Result, RoomId};

/// A location on the room grid.
///
/// Exit flags are fixed at construction. `visited` and `viewed` only ever
/// turn on; a restart builds fresh rooms.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    id: RoomId,
    name: String,
    exits: [bool; NUMBER_EXITS],
    visited: bool,
    viewed: bool,
    room_type: String,
}

impl Room {
    /// Creates a room with the given exits in N, S, E, W order.
    #[must_use]
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        exits: [bool; NUMBER_EXITS],
        room_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            exits,
            visited: false,
            viewed: false,
            room_type: room_type.into(),
        }
    }

    /// Builds a room from its packed content form.
    ///
    /// The packed form is `<preposition digit><name><NSEW flags>`, for example
    /// `"1the old mill1001"`. Digit 0 means no preposition; otherwise it is a
    /// 1-based index into `prepositions`. The trailing four characters are
    /// `0`/`1` exit flags.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error for malformed input.
    pub fn from_encoded(
        id: RoomId,
        encoded: &str,
        prepositions: &[String],
        room_type: impl Into<String>,
    ) -> Result<Self> {
        let room_type = room_type.into();
        let chars: Vec<char> = encoded.chars().collect();
        if chars.len() < NUMBER_EXITS + 1 {
            return Err(Error::invalid_content(format!("room name too short: {encoded:?}"))
                .with_context(id.to_string()));
        }
        if room_type.is_empty() {
            return Err(Error::invalid_content("room type cannot be empty").with_context(id.to_string()));
        }

        let prep_digit = chars[0]
            .to_digit(10)
            .ok_or_else(|| Error::invalid_content(format!("missing preposition digit: {encoded:?}")))?;

        let flag_start = chars.len() - NUMBER_EXITS;
        let mut exits = [false; NUMBER_EXITS];
        for (slot, ch) in chars[flag_start..].iter().enumerate() {
            exits[slot] = match ch {
                '0' => false,
                '1' => true,
                other => {
                    return Err(Error::invalid_content(format!(
                        "exit flag must be 0 or 1, found {other:?} in {encoded:?}"
                    ))
                    .with_context(id.to_string()));
                }
            };
        }

        let body: String = chars[1..flag_start].iter().collect();
        let name = if prep_digit == 0 {
            body
        } else {
            let prep = prepositions
                .get(prep_digit as usize - 1)
                .ok_or_else(|| Error::invalid_content(format!("no preposition {prep_digit}")))?;
            format!("{prep} {body}")
        };

        Ok(Self::new(id, name, exits, room_type))
    }

    /// This room's id.
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Display name, preposition included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exit flags in N, S, E, W order.
    #[must_use]
    pub fn exits(&self) -> [bool; NUMBER_EXITS] {
        self.exits
    }

    /// Returns true if the exit bitfield has an opening in that direction.
    ///
    /// Non-compass directions never have a geometric exit.
    #[must_use]
    pub fn has_exit(&self, direction: Direction) -> bool {
        direction.exit_index().is_some_and(|slot| self.exits[slot])
    }

    /// Marks the room as visited.
    pub fn set_visited(&mut self) {
        self.visited = true;
    }

    /// Whether the player has been here.
    #[must_use]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Marks the room as viewed on the map.
    pub fn set_viewed(&mut self) {
        self.viewed = true;
    }

    /// Whether the room has been shown on the map.
    #[must_use]
    pub fn viewed(&self) -> bool {
        self.viewed
    }

    /// Presentation tag for the room's picture.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }
}
