//! Command execution.
//!
//! Dispatches a validated command on its classification. Movement goes
//! through the trapdoor check first; persistence commands go to the
//! collaborator; anything else with a noun and no handler does nothing.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use waymark_foundation::{Error, ErrorKind, Result};
use waymark_parser::{CommandState, CommandType, ParsedCommand};
use waymark_storage::{Game, Player};

use crate::items::ItemCommands;
use crate::movement::{MoveCommand, OK};
use crate::persistence::Persistence;
use crate::result::ActionResult;

/// Message for a multi-word command with no effect.
pub const NOTHING_HAPPENS: &str = "Nothing happens";

/// Applies validated commands.
pub struct CommandExecutor {
    rng: ChaCha8Rng,
}

impl CommandExecutor {
    /// Creates an executor whose trapdoor draws from a seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Executes one command.
    ///
    /// # Errors
    ///
    /// Returns index faults and lifecycle faults; the processor turns these
    /// into a failed result.
    pub fn execute(
        &mut self,
        command: &ParsedCommand,
        game: Game,
        player: Player,
        persistence: &mut dyn Persistence,
    ) -> Result<ActionResult> {
        match (command.state(), command.kind()) {
            (CommandState::Move, _) => {
                if Self::trapdoor_armed(command, &game)? {
                    self.fall_through_trapdoor(game, player)
                } else {
                    MoveCommand::validate_and_execute(command, game, player)
                }
            }
            (_, CommandType::Save) => persistence.save(game, player),
            (_, CommandType::Load) => persistence.load(game, player),
            (_, CommandType::Quit) => persistence.quit(game, player),
            (_, CommandType::Restart) => persistence.restart(game, player),
            (_, CommandType::Take) => ItemCommands::take(command, game, player),
            (_, CommandType::Drop) => ItemCommands::drop(command, game, player),
            (_, CommandType::Give) => ItemCommands::give(command, game, player),
            (CommandState::MultipleCommand, CommandType::None) => {
                let mut game = game;
                game.add_message(NOTHING_HAPPENS, true, true);
                Ok(ActionResult::success(game, player))
            }
            (state, kind) => Err(Error::new(ErrorKind::Internal(format!(
                "no handler for {state:?}/{kind:?}"
            )))),
        }
    }

    fn trapdoor_armed(command: &ParsedCommand, game: &Game) -> Result<bool> {
        let Some(trapdoor) = game.trapdoor() else {
            return Ok(false);
        };
        if command.coded() != Some((trapdoor.room, trapdoor.direction)) {
            return Ok(false);
        }
        Ok(game.item(trapdoor.item)?.flag() == 0)
    }

    fn fall_through_trapdoor(&mut self, mut game: Game, mut player: Player) -> Result<ActionResult> {
        let landing = game
            .trapdoor()
            .and_then(|trapdoor| trapdoor.destinations.choose(&mut self.rng).copied())
            .ok_or_else(|| Error::invalid_content("trapdoor has no destinations"))?;
        game.room(landing)?;
        tracing::info!(from = %player.room(), to = %landing, "fell through trapdoor");
        player.set_room(landing);
        game.set_room_visited(landing)?;
        game.add_message(OK, true, true);
        Ok(ActionResult::success(game, player))
    }
}
