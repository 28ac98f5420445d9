//! Movement on the room grid.
//!
//! Rooms sit on an implicit grid ten wide, so a compass step is a fixed
//! offset from the current room number.

use waymark_foundation::{Direction, Error, Result};
use waymark_parser::ParsedCommand;
use waymark_storage::{Game, Player};

use crate::result::ActionResult;
use crate::validator::DONT_UNDERSTAND;

/// Message for a direction with no open exit.
pub const BLOCKED: &str = "You can't go that way";
/// Message after a successful move.
pub const OK: &str = "Ok";

/// Validates and performs compass moves.
pub struct MoveCommand;

impl MoveCommand {
    /// The compass direction a command moves in, if it names one.
    #[must_use]
    pub fn direction(command: &ParsedCommand) -> Option<Direction> {
        command.noun().direction().filter(|direction| direction.is_compass())
    }

    /// Checks that the move names a direction with an open exit.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the player's room does not exist.
    pub fn validate(command: &ParsedCommand, mut game: Game, player: Player) -> Result<ActionResult> {
        let Some(direction) = Self::direction(command) else {
            game.add_message(DONT_UNDERSTAND, true, true);
            return Ok(ActionResult::failure(game, player));
        };
        if !game.check_exit(player.room(), direction)? {
            tracing::debug!(room = %player.room(), %direction, "exit blocked");
            game.add_message(BLOCKED, true, true);
            return Ok(ActionResult::failure(game, player));
        }
        Ok(ActionResult::success(game, player))
    }

    /// Moves the player one step and marks the destination visited.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the step leaves the room table.
    pub fn execute(command: &ParsedCommand, mut game: Game, mut player: Player) -> Result<ActionResult> {
        if Self::movement_restricted(&game, &player, command) {
            return Ok(ActionResult::failure(game, player));
        }
        let Some((direction, modifier)) = Self::direction(command)
            .and_then(|direction| direction.modifier().map(|modifier| (direction, modifier)))
        else {
            game.add_message(DONT_UNDERSTAND, true, true);
            return Ok(ActionResult::failure(game, player));
        };

        let from = player.room();
        let to = from.offset(modifier).ok_or_else(|| {
            Error::room_out_of_range(i64::from(from.get()) + i64::from(modifier), game.room_count())
        })?;
        game.room(to)?;

        player.set_room(to);
        game.add_message(OK, true, true);
        game.set_room_visited(to)?;
        tracing::debug!(%from, %to, %direction, "player moved");
        Ok(Self::room_entry_effects(game, player, command))
    }

    /// Validation followed by execution.
    ///
    /// # Errors
    ///
    /// Returns a room index error from either step.
    pub fn validate_and_execute(command: &ParsedCommand, game: Game, player: Player) -> Result<ActionResult> {
        let checked = Self::validate(command, game, player)?;
        if checked.is_valid() {
            Self::execute(command, checked.game, checked.player)
        } else {
            Ok(checked)
        }
    }

    /// Conditions that stop a move before the exit check applies.
    fn movement_restricted(_game: &Game, _player: &Player, _command: &ParsedCommand) -> bool {
        false
    }

    /// Effects of arriving in a room.
    fn room_entry_effects(game: Game, player: Player, _command: &ParsedCommand) -> ActionResult {
        ActionResult::success(game, player)
    }
}
