//! Vocabulary store, rooms, items, player, and game state for Waymark.
//!
//! This crate provides:
//! - [`Vocabulary`] - Read-only verb and noun tables with display names
//! - [`Room`] and [`Item`] - World entities
//! - [`Player`] - Location, stats, and mode
//! - [`Game`] - Room and item collections, message buffers, history,
//!   save-slot navigation, and the lifecycle state machine
//! - [`ContentPack`] - Static content that builds a vocabulary and a game

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod game;
pub mod history;
pub mod item;
pub mod lifecycle;
pub mod message;
pub mod player;
pub mod room;
pub mod saves;
pub mod special;
pub mod vocabulary;

pub use content::{ContentPack, ItemSpec, RoomSpec};
pub use game::Game;
pub use history::CommandHistory;
pub use item::{Item, ItemLocation};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use message::MessageBuffer;
pub use player::{Player, PlayerMode};
pub use room::Room;
pub use saves::SaveBrowser;
pub use special::{SpecialExit, SpecialExitHandler, SpecialItemHandler, Trapdoor};
pub use vocabulary::{NounTarget, VerbCodes, Vocabulary};
