//! Verb and noun resolution.

use waymark_foundation::{RoomId, VerbId};
use waymark_storage::Vocabulary;

use crate::command::{CommandState, Noun, ParsedCommand};
use crate::movement::{normalise_move_command, parse_single_direction};
use crate::normaliser::Normaliser;
use crate::tokenizer::CommandTokenizer;

/// Parses player input against a vocabulary.
pub struct CommandParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> CommandParser<'a> {
    /// Creates a parser over a vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Parses one line of input typed in `room`.
    #[must_use]
    pub fn parse(&self, raw: &str, room: RoomId) -> ParsedCommand {
        let input = Normaliser::canonical(raw);
        let split = CommandTokenizer::split(&input);
        let verb = self.resolve_verb(&split.verb);
        let noun = self.resolve_noun(&split.noun_phrase, verb);

        let command = ParsedCommand::new(verb, noun, input, self.vocabulary);
        tracing::debug!(
            raw,
            verb = verb.get(),
            ?noun,
            state = ?command.state(),
            kind = ?command.kind(),
            "parsed command"
        );

        if command.state() == CommandState::Move {
            normalise_move_command(command, room, self.vocabulary)
        } else {
            command
        }
    }

    /// Looks the verb up, falling back to the one-past-the-end sentinel.
    #[must_use]
    pub fn resolve_verb(&self, word: &str) -> VerbId {
        self.vocabulary
            .verb_at(word)
            .unwrap_or_else(|| self.vocabulary.unknown_verb())
    }

    /// Resolves a noun phrase in the light of an already resolved verb.
    ///
    /// Phrases of more than one character are cut to their first word and
    /// looked up. Shorter phrases count as elided: compass verbs supply their
    /// own direction and `go` becomes ambiguous.
    #[must_use]
    pub fn resolve_noun(&self, phrase: &str, verb: VerbId) -> Noun {
        if phrase.chars().count() > 1 {
            let word = CommandTokenizer::head_noun(phrase);
            return match self.vocabulary.noun_at(word) {
                Some(id) => match self.vocabulary.noun_target(id) {
                    Ok(target) => target.into(),
                    Err(error) => {
                        tracing::warn!(%error, word, "noun lookup out of range");
                        Noun::Unresolved
                    }
                },
                None => Noun::Unresolved,
            };
        }

        let codes = self.vocabulary.codes();
        if !self.vocabulary.is_known_verb(verb) {
            Noun::Unresolved
        } else if codes.is_go(verb) {
            Noun::Ambiguous
        } else {
            parse_single_direction(Noun::Absent, verb, codes)
        }
    }
}
