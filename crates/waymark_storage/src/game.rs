//! Game state: the world plus everything the front end reads back.
//!
//! Rooms and items live in persistent vectors so the pipeline can keep a
//! pre-command copy of the whole game at the cost of a pointer bump.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use im::Vector;
use waymark_foundation::constants::{NUMBER_EXITS, OPENING_MESSAGE};
use waymark_foundation::{Direction, Error, ItemId, Result, RoomId};

use crate::history::CommandHistory;
use crate::item::{Item, ItemLocation};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::message::MessageBuffer;
use crate::room::Room;
use crate::saves::SaveBrowser;
use crate::special::{SpecialExitHandler, SpecialItemHandler, Trapdoor};

/// The mutable world and its presentation buffers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    rooms: Vector<Room>,
    items: Vector<Item>,
    special_exits: SpecialExitHandler,
    special_items: SpecialItemHandler,
    trapdoor: Option<Trapdoor>,
    messages: MessageBuffer,
    panel: MessageBuffer,
    message_state: bool,
    history: CommandHistory,
    lifecycle: Lifecycle,
    saves: SaveBrowser,
}

impl Game {
    /// Creates a game over the given rooms and items.
    ///
    /// Room `n` and item `n` must sit at slot `n - 1`.
    #[must_use]
    pub fn new(rooms: Vec<Room>, items: Vec<Item>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
            items: items.into_iter().collect(),
            special_exits: SpecialExitHandler::new(),
            special_items: SpecialItemHandler::new(),
            trapdoor: None,
            messages: MessageBuffer::with_opening(OPENING_MESSAGE),
            panel: MessageBuffer::new(),
            message_state: false,
            history: CommandHistory::new(),
            lifecycle: Lifecycle::default(),
            saves: SaveBrowser::new(),
        }
    }

    /// Builder method to install special exits.
    #[must_use]
    pub fn with_special_exits(mut self, handler: SpecialExitHandler) -> Self {
        self.special_exits = handler;
        self
    }

    /// Builder method to install special item descriptions.
    #[must_use]
    pub fn with_special_items(mut self, handler: SpecialItemHandler) -> Self {
        self.special_items = handler;
        self
    }

    /// Builder method to install the trapdoor rule.
    #[must_use]
    pub fn with_trapdoor(mut self, trapdoor: Trapdoor) -> Self {
        self.trapdoor = Some(trapdoor);
        self
    }

    /// Builder method to set the intro countdown.
    #[must_use]
    pub fn with_intro_ticks(mut self, ticks: u32) -> Self {
        self.lifecycle = Lifecycle::new(ticks);
        self
    }

    /// Builder method to set the narrative wrap width.
    #[must_use]
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.messages = self.messages.with_width(width);
        self.panel = self.panel.with_width(width);
        self
    }

    // ---- rooms ----

    /// Looks a room up.
    ///
    /// # Errors
    ///
    /// Returns a room index error for ids outside `1..=room_count`.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        id.slot()
            .and_then(|slot| self.rooms.get(slot))
            .ok_or_else(|| Error::room_out_of_range(i64::from(id.get()), self.rooms.len()))
    }

    /// Looks a room up for mutation.
    ///
    /// # Errors
    ///
    /// Returns a room index error for ids outside `1..=room_count`.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        let count = self.rooms.len();
        id.slot()
            .and_then(|slot| self.rooms.get_mut(slot))
            .ok_or_else(|| Error::room_out_of_range(i64::from(id.get()), count))
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Display name of a room.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn room_name(&self, id: RoomId) -> Result<&str> {
        self.room(id).map(Room::name)
    }

    /// Whether the player has entered a room.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn room_visited(&self, id: RoomId) -> Result<bool> {
        self.room(id).map(Room::visited)
    }

    /// Number of rooms the player has entered.
    #[must_use]
    pub fn rooms_visited(&self) -> usize {
        self.rooms.iter().filter(|room| room.visited()).count()
    }

    /// Marks a room as entered.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn set_room_visited(&mut self, id: RoomId) -> Result<()> {
        self.room_mut(id).map(Room::set_visited)
    }

    /// Exit flags of a room in N, S, E, W order.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn room_exits(&self, id: RoomId) -> Result<[bool; NUMBER_EXITS]> {
        self.room(id).map(Room::exits)
    }

    /// Image type of a room.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn room_image_type(&self, id: RoomId) -> Result<&str> {
        self.room(id).map(Room::room_type)
    }

    // ---- items ----

    /// Looks an item up.
    ///
    /// # Errors
    ///
    /// Returns an item index error for ids outside `1..=item_count`.
    pub fn item(&self, id: ItemId) -> Result<&Item> {
        id.slot()
            .and_then(|slot| self.items.get(slot))
            .ok_or_else(|| Error::item_out_of_range(i64::from(id.get()), self.items.len()))
    }

    /// Looks an item up for mutation.
    ///
    /// # Errors
    ///
    /// Returns an item index error for ids outside `1..=item_count`.
    pub fn item_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        let count = self.items.len();
        id.slot()
            .and_then(|slot| self.items.get_mut(slot))
            .ok_or_else(|| Error::item_out_of_range(i64::from(id.get()), count))
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// All items in id order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Flag plus encoded location; content scripts use it as a single key.
    ///
    /// # Errors
    ///
    /// Returns an item index error for unknown items.
    pub fn item_flag_sum(&self, id: ItemId) -> Result<i64> {
        let item = self.item(id)?;
        Ok(i64::from(item.flag()) + i64::from(item.location().code()))
    }

    // ---- descriptions ----

    /// `"You see: a, b"` for the room, special description first.
    ///
    /// Empty when there is nothing to list.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn items_description(&self, id: RoomId) -> Result<String> {
        self.room(id)?;
        let special = self.special_items.special_items(id);
        let names = std::iter::once(special)
            .filter(|line| !line.is_empty())
            .chain(
                self.items
                    .iter()
                    .filter(|item| item.is_at_location(id) && item.is_visible())
                    .map(Item::name),
            )
            .collect::<Vec<_>>();
        if names.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("You see: {}", names.join(", ")))
        }
    }

    /// `"You can go: North, East"` over the exits the player may see.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn exits_description(&self, id: RoomId) -> Result<String> {
        let mut open = Vec::new();
        for direction in Direction::COMPASS {
            if self.check_exit(id, direction)? {
                open.push(direction.name());
            }
        }
        if open.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("You can go: {}", open.join(", ")))
        }
    }

    /// Extra exit line for a room, empty by default.
    #[must_use]
    pub fn special_exit_description(&self, id: RoomId) -> &str {
        self.special_exits.special_exit(id)
    }

    /// Whether the player may leave `id` heading `direction`.
    ///
    /// Only compass directions have geometric exits; the rest are never open.
    ///
    /// # Errors
    ///
    /// Returns a room index error for unknown rooms.
    pub fn check_exit(&self, id: RoomId, direction: Direction) -> Result<bool> {
        let room = self.room(id)?;
        Ok(room.has_exit(direction) && self.special_exits.display_exit(id, direction))
    }

    /// The trapdoor rule, if the content defines one.
    #[must_use]
    pub fn trapdoor(&self) -> Option<&Trapdoor> {
        self.trapdoor.as_ref()
    }

    /// Moves an item to a new location.
    ///
    /// # Errors
    ///
    /// Returns an item index error for unknown items.
    pub fn place_item(&mut self, id: ItemId, location: ItemLocation) -> Result<()> {
        self.item_mut(id).map(|item| item.set_location(location))
    }

    // ---- messages ----

    /// Adds a narrative message, word-wrapped when `long` is set.
    pub fn add_message(&mut self, message: &str, clear: bool, long: bool) {
        if long {
            self.messages.add_long(message, clear);
        } else {
            self.messages.add(message, clear);
        }
    }

    /// Adds a line to the side panel.
    pub fn add_panel_message(&mut self, message: &str, clear: bool) {
        self.panel.add(message, clear);
    }

    /// Narrative lines.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.messages.lines()
    }

    /// Panel lines.
    #[must_use]
    pub fn panel_messages(&self) -> &[String] {
        self.panel.lines()
    }

    /// Flips the presentation message flag.
    pub fn toggle_message_state(&mut self) {
        self.message_state = !self.message_state;
    }

    /// Presentation message flag.
    #[must_use]
    pub fn message_state(&self) -> bool {
        self.message_state
    }

    // ---- lifecycle, history, saves ----

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Requests a lifecycle transition.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition error when the move is forbidden.
    pub fn set_state(&mut self, to: LifecycleState) -> Result<()> {
        self.lifecycle.transition(to)
    }

    /// Counts down the intro. Returns true on the tick the game starts running.
    pub fn advance_intro(&mut self) -> bool {
        self.lifecycle.advance_intro()
    }

    /// Remembers a raw command.
    pub fn record_command(&mut self, command: &str) {
        self.history.record(command);
    }

    /// Recent commands.
    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Save-slot navigation state.
    #[must_use]
    pub fn saves(&self) -> &SaveBrowser {
        &self.saves
    }

    /// Save-slot navigation state, for mutation.
    pub fn saves_mut(&mut self) -> &mut SaveBrowser {
        &mut self.saves
    }
}
