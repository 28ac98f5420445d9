//! Command parser for Waymark.
//!
//! Turns one line of player input into a [`ParsedCommand`]:
//!
//! 1. [`normaliser`] - lower-cases and applies the fixed synonym table
//! 2. [`tokenizer`] - splits into a verb word and a noun phrase
//! 3. [`parser`] - resolves verb and noun ids against the vocabulary
//! 4. [`movement`] - fills in elided directions and stamps the origin room
//!
//! Parsing never fails. Unknown words come back as sentinel verb ids or
//! [`Noun::Unresolved`] for the validator to reject.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod movement;
pub mod normaliser;
pub mod parser;
pub mod tokenizer;

pub use command::{CommandState, CommandType, Noun, ParsedCommand};
pub use movement::{normalise_move_command, parse_single_direction};
pub use normaliser::Normaliser;
pub use parser::CommandParser;
pub use tokenizer::{CommandTokenizer, SplitCommand};
