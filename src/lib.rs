//! Waymark: a text-adventure command interpreter.
//!
//! Player input flows parse → validate → execute → post-update over a world
//! and a player. Each stage lives in its own layer crate, re-exported here.
//!
//! ```text
//! runtime     GameEngine, GameSnapshot, FilePersistence, Repl, `waymark` binary
//! engine      CommandValidator, CommandExecutor, CommandProcessor, Persistence
//! parser      normaliser, tokenizer, CommandParser, ParsedCommand
//! storage     Vocabulary, Room, Item, Player, Game, ContentPack
//! foundation  ids, Direction, Stat, Error
//! ```

pub use waymark_engine as engine;
pub use waymark_foundation as foundation;
pub use waymark_parser as parser;
pub use waymark_runtime as runtime;
pub use waymark_storage as storage;
