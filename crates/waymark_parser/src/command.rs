//! Parsed commands and their classification.

use waymark_foundation::{Direction, ItemId, RoomId, VerbId};
use waymark_storage::{NounTarget, Vocabulary};

use crate::tokenizer::{CommandTokenizer, SplitCommand};

/// What the noun of a command refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Noun {
    /// An item noun.
    Item(ItemId),
    /// A direction, typed or implied by a compass verb.
    Direction(Direction),
    /// `go` with no usable direction.
    Ambiguous,
    /// A word that is not in the noun table.
    Unresolved,
    /// No noun given, and none needed to make sense of the verb.
    Absent,
}

impl Noun {
    /// Returns true if the validator should treat the noun as invalid.
    #[must_use]
    pub fn is_unresolved(self) -> bool {
        self == Self::Unresolved
    }

    /// The direction, if this noun is one.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Direction(direction) => Some(direction),
            _ => None,
        }
    }

    /// The item, if this noun is one.
    #[must_use]
    pub fn item(self) -> Option<ItemId> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl From<NounTarget> for Noun {
    fn from(target: NounTarget) -> Self {
        match target {
            NounTarget::Item(item) => Self::Item(item),
            NounTarget::Direction(direction) => Self::Direction(direction),
        }
    }
}

/// Structural shape of a command, decided by verb id alone.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CommandState {
    /// Verb not in the vocabulary.
    #[default]
    None,
    /// One of the movement verbs.
    Move,
    /// Complete on its own: load, save, quit, restart.
    SingleCommand,
    /// Needs a noun.
    MultipleCommand,
}

/// Which built-in handler a command maps to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CommandType {
    /// No built-in handler.
    #[default]
    None,
    /// Pick an item up.
    Take,
    /// Hand an item over.
    Give,
    /// Put an item down.
    Drop,
    /// Restore a saved game.
    Load,
    /// Save the game.
    Save,
    /// End the game.
    Quit,
    /// Start over.
    Restart,
}

impl CommandState {
    /// Classifies a verb id.
    #[must_use]
    pub fn classify(verb: VerbId, vocabulary: &Vocabulary) -> (Self, CommandType) {
        let codes = vocabulary.codes();
        let is = |code: Option<VerbId>| code == Some(verb);

        if !vocabulary.is_known_verb(verb) {
            (Self::None, CommandType::None)
        } else if codes.is_move(verb) {
            (Self::Move, CommandType::None)
        } else if is(codes.load) {
            (Self::SingleCommand, CommandType::Load)
        } else if is(codes.save) {
            (Self::SingleCommand, CommandType::Save)
        } else if is(codes.quit) {
            (Self::SingleCommand, CommandType::Quit)
        } else if is(codes.restart) {
            (Self::SingleCommand, CommandType::Restart)
        } else if is(codes.take) {
            (Self::MultipleCommand, CommandType::Take)
        } else if is(codes.drop) {
            (Self::MultipleCommand, CommandType::Drop)
        } else if is(codes.give) {
            (Self::MultipleCommand, CommandType::Give)
        } else {
            (Self::MultipleCommand, CommandType::None)
        }
    }
}

/// One line of input after parsing.
///
/// State and type are derived from the verb when the command is built;
/// [`ParsedCommand::reclassify`] is the only way to derive them again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    verb: VerbId,
    noun: Noun,
    input: String,
    split: SplitCommand,
    tokens: Vec<String>,
    state: CommandState,
    kind: CommandType,
    origin: Option<RoomId>,
}

impl ParsedCommand {
    /// Builds a command from normalised input and resolved ids.
    #[must_use]
    pub fn new(verb: VerbId, noun: Noun, input: impl Into<String>, vocabulary: &Vocabulary) -> Self {
        let input = input.into();
        let split = CommandTokenizer::split(&input);
        let tokens = CommandTokenizer::tokenize(&input);
        let (state, kind) = CommandState::classify(verb, vocabulary);
        Self {
            verb,
            noun,
            input,
            split,
            tokens,
            state,
            kind,
            origin: None,
        }
    }

    /// Derives state and type from the verb again.
    #[must_use]
    pub fn reclassify(mut self, vocabulary: &Vocabulary) -> Self {
        (self.state, self.kind) = CommandState::classify(self.verb, vocabulary);
        self
    }

    /// Builder method to record the room the command was issued in.
    #[must_use]
    pub fn with_origin(mut self, room: RoomId) -> Self {
        self.origin = Some(room);
        self
    }

    /// Builder method to replace the noun.
    #[must_use]
    pub fn with_noun(mut self, noun: Noun) -> Self {
        self.noun = noun;
        self
    }

    /// Verb id; one past the table for unknown verbs.
    #[must_use]
    pub fn verb(&self) -> VerbId {
        self.verb
    }

    /// Resolved noun.
    #[must_use]
    pub fn noun(&self) -> Noun {
        self.noun
    }

    /// Normalised input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Verb word and noun phrase.
    #[must_use]
    pub fn split(&self) -> &SplitCommand {
        &self.split
    }

    /// Verb word as typed.
    #[must_use]
    pub fn verb_word(&self) -> &str {
        &self.split.verb
    }

    /// Every word of the input.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if anything followed the verb.
    #[must_use]
    pub fn has_noun_phrase(&self) -> bool {
        !self.split.noun_phrase.is_empty()
    }

    /// Structural shape.
    #[must_use]
    pub fn state(&self) -> CommandState {
        self.state
    }

    /// Built-in handler.
    #[must_use]
    pub fn kind(&self) -> CommandType {
        self.kind
    }

    /// Room the command was issued in, set for movement commands.
    #[must_use]
    pub fn origin(&self) -> Option<RoomId> {
        self.origin
    }

    /// Coded form of a movement: where it started and which way it went.
    #[must_use]
    pub fn coded(&self) -> Option<(RoomId, Direction)> {
        self.origin.zip(self.noun.direction())
    }

    /// Returns true for movement commands.
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.state == CommandState::Move
    }
}
