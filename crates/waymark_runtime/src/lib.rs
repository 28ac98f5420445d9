//! Runtime for Waymark: the game engine, save files, and the terminal front end.
//!
//! This crate provides:
//! - [`GameEngine`] - Owns the game and player and runs one command at a time
//! - [`GameSnapshot`] - Everything a front end shows after a command
//! - [`FilePersistence`] - `MessagePack` save files on disk
//! - [`RuntimeConfig`] - Save directory, seed, intro length, starting stats
//! - [`Repl`] - Interactive loop over a [`LineEditor`]
//! - [`demo`] - Built-in content so the binary is playable

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod engine;
pub mod repl;
pub mod save;
pub mod snapshot;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use engine::GameEngine;
pub use repl::Repl;
pub use save::{FilePersistence, SaveFile};
pub use snapshot::GameSnapshot;
