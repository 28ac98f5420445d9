//! Take, drop, and give.

use waymark_foundation::{Result, Stat};
use waymark_parser::ParsedCommand;
use waymark_storage::{Game, ItemLocation, Player};

use crate::result::ActionResult;

/// Message after picking an item up.
pub const TAKEN: &str = "Taken";
/// Message when taking something already carried.
pub const ALREADY_CARRIED: &str = "You already have it";
/// Message when the item is not here.
pub const NOT_HERE: &str = "I don't see it here";
/// Message after putting an item down.
pub const DROPPED: &str = "Dropped";
/// Message when the item is not carried.
pub const NOT_CARRIED: &str = "You are not carrying it";
/// Message when nobody takes a gift.
pub const UNWANTED: &str = "Nobody here wants it";

/// Item handling for the executor.
pub struct ItemCommands;

impl ItemCommands {
    /// Picks up a visible item in the player's room.
    ///
    /// # Errors
    ///
    /// Returns an item index error for item nouns outside the item table.
    pub fn take(command: &ParsedCommand, mut game: Game, mut player: Player) -> Result<ActionResult> {
        let Some(id) = command.noun().item() else {
            return Ok(Self::refuse(game, player, NOT_HERE));
        };
        let item = game.item(id)?;
        if item.is_carried() {
            return Ok(Self::refuse(game, player, ALREADY_CARRIED));
        }
        if !(item.is_at_location(player.room()) && item.is_visible()) {
            return Ok(Self::refuse(game, player, NOT_HERE));
        }

        game.place_item(id, ItemLocation::Carried)?;
        player.set_stat(Stat::Weight, player.stat(Stat::Weight) + 1.0);
        game.add_message(TAKEN, true, true);
        tracing::debug!(%id, "item taken");
        Ok(ActionResult::success(game, player))
    }

    /// Puts a carried item down in the player's room.
    ///
    /// # Errors
    ///
    /// Returns an item index error for item nouns outside the item table.
    pub fn drop(command: &ParsedCommand, mut game: Game, mut player: Player) -> Result<ActionResult> {
        let Some(id) = Self::carried(command, &game)? else {
            return Ok(Self::refuse(game, player, NOT_CARRIED));
        };
        game.place_item(id, ItemLocation::Room(player.room()))?;
        player.reduce_stat(Stat::Weight);
        game.add_message(DROPPED, true, true);
        tracing::debug!(%id, room = %player.room(), "item dropped");
        Ok(ActionResult::success(game, player))
    }

    /// Offers a carried item. No one in the world accepts gifts.
    ///
    /// # Errors
    ///
    /// Returns an item index error for item nouns outside the item table.
    pub fn give(command: &ParsedCommand, game: Game, player: Player) -> Result<ActionResult> {
        if Self::carried(command, &game)?.is_none() {
            return Ok(Self::refuse(game, player, NOT_CARRIED));
        }
        Ok(Self::refuse(game, player, UNWANTED))
    }

    fn carried(command: &ParsedCommand, game: &Game) -> Result<Option<waymark_foundation::ItemId>> {
        match command.noun().item() {
            Some(id) => Ok(game.item(id)?.is_carried().then_some(id)),
            None => Ok(None),
        }
    }

    fn refuse(mut game: Game, player: Player, message: &str) -> ActionResult {
        game.add_message(message, true, true);
        ActionResult::failure(game, player)
    }
}
