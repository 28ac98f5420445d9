//! Movement normalisation.
//!
//! Direction nouns are already folded out of the noun table by
//! [`Vocabulary::noun_target`], so all that is left here is filling in a
//! direction the player implied with a compass verb, and remembering which
//! room the move was made from.

use waymark_foundation::{RoomId, VerbId};
use waymark_storage::{VerbCodes, Vocabulary};

use crate::command::{Noun, ParsedCommand};

/// Fills in an elided noun from a compass verb.
///
/// `n` on its own means "go north". Any other noun is returned unchanged.
#[must_use]
pub fn parse_single_direction(noun: Noun, verb: VerbId, codes: &VerbCodes) -> Noun {
    match noun {
        Noun::Absent => codes
            .compass_direction(verb)
            .map_or(Noun::Absent, Noun::Direction),
        other => other,
    }
}

/// Final pass over a movement command issued in `room`.
#[must_use]
pub fn normalise_move_command(command: ParsedCommand, room: RoomId, vocabulary: &Vocabulary) -> ParsedCommand {
    let noun = parse_single_direction(command.noun(), command.verb(), vocabulary.codes());
    let command = command.with_noun(noun).with_origin(room).reclassify(vocabulary);
    tracing::debug!(coded = ?command.coded(), "move command normalised");
    command
}
