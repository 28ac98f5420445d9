//! Command validation.
//!
//! Five checks, tried in order. The first one that fires replaces the
//! narrative with its message and fails the command; the executor never
//! sees it.

use waymark_parser::{CommandState, ParsedCommand};
use waymark_storage::{Game, Player, Vocabulary};

use crate::result::ActionResult;

/// Message for input where neither word is known.
pub const WHAT: &str = "What!!";
/// Message for commands that need a noun and were given one word.
pub const TWO_WORDS: &str = "Most commands need two words";
/// Message for commands with no recognisable shape.
pub const DONT_UNDERSTAND: &str = "I don't understand";

/// Rejects malformed commands.
pub struct CommandValidator;

impl CommandValidator {
    /// Runs the checks against a parsed command.
    #[must_use]
    pub fn validate(command: &ParsedCommand, vocabulary: &Vocabulary, mut game: Game, player: Player) -> ActionResult {
        match Self::rejection(command, vocabulary) {
            Some(message) => {
                tracing::debug!(input = command.input(), %message, "command rejected");
                game.add_message(&message, true, true);
                ActionResult::failure(game, player)
            }
            None => ActionResult::success(game, player),
        }
    }

    /// The message of the first check that fires, if any.
    #[must_use]
    pub fn rejection(command: &ParsedCommand, vocabulary: &Vocabulary) -> Option<String> {
        let verb_invalid = !vocabulary.is_known_verb(command.verb());
        let noun_invalid = command.noun().is_unresolved();
        let state = command.state();

        if verb_invalid && noun_invalid {
            Some(WHAT.to_string())
        } else if verb_invalid || noun_invalid {
            Some(format!("You can't {}", command.input()))
        } else if state == CommandState::MultipleCommand && !command.has_noun_phrase() {
            Some(TWO_WORDS.to_string())
        } else if state == CommandState::None {
            // Only reachable when the command was classified against a
            // smaller vocabulary than the one validating it.
            Some(DONT_UNDERSTAND.to_string())
        } else if Self::needs_second_word(command) && command.tokens().len() <= 1 {
            Some(TWO_WORDS.to_string())
        } else {
            None
        }
    }

    fn needs_second_word(command: &ParsedCommand) -> bool {
        match command.state() {
            CommandState::MultipleCommand => true,
            CommandState::Move => command.verb_word() == "go",
            CommandState::None | CommandState::SingleCommand => false,
        }
    }
}
