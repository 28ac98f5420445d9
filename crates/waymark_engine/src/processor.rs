//! The pipeline for one line of input.
//!
//! Parse, validate, execute, post-process. Every input yields exactly one
//! [`ActionResult`]. A fault anywhere in the pipeline is logged and the
//! state from before the command comes back marked invalid.

use waymark_foundation::Result;
use waymark_parser::{CommandParser, ParsedCommand};
use waymark_storage::{Game, Player, Vocabulary};

use crate::executor::CommandExecutor;
use crate::persistence::Persistence;
use crate::post_command::PostCommand;
use crate::result::ActionResult;
use crate::validator::CommandValidator;

/// Runs commands against a fixed vocabulary.
pub struct CommandProcessor {
    vocabulary: Vocabulary,
    executor: CommandExecutor,
}

impl CommandProcessor {
    /// Creates a processor. `seed` drives the trapdoor.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, seed: u64) -> Self {
        Self {
            vocabulary,
            executor: CommandExecutor::new(seed),
        }
    }

    /// The vocabulary commands are parsed against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses without running anything.
    #[must_use]
    pub fn parse(&self, raw: &str, player: &Player) -> ParsedCommand {
        CommandParser::new(&self.vocabulary).parse(raw, player.room())
    }

    /// Runs one input through the whole pipeline.
    pub fn execute(
        &mut self,
        raw: &str,
        game: Game,
        player: Player,
        persistence: &mut dyn Persistence,
    ) -> ActionResult {
        let before = (game.clone(), player.clone());
        match self.run(raw, game, player, persistence) {
            Ok(result) => {
                tracing::debug!(raw, valid = result.valid, "command processed");
                result
            }
            Err(error) => {
                tracing::error!(%error, context = ?error.context, raw, "command failed");
                ActionResult::failure(before.0, before.1)
            }
        }
    }

    fn run(
        &mut self,
        raw: &str,
        game: Game,
        player: Player,
        persistence: &mut dyn Persistence,
    ) -> Result<ActionResult> {
        let command = self.parse(raw, &player);
        let checked = CommandValidator::validate(&command, &self.vocabulary, game, player);
        if !checked.valid {
            return Ok(checked);
        }
        let executed = self
            .executor
            .execute(&command, checked.game, checked.player, persistence)?;
        if executed.valid {
            Ok(PostCommand::apply(executed))
        } else {
            Ok(executed)
        }
    }
}
