//! Command pipeline for Waymark.
//!
//! This crate provides:
//! - [`CommandValidator`] - First-match-wins rejection of malformed commands
//! - [`CommandExecutor`] - Movement, the trapdoor, item commands, persistence dispatch
//! - [`MoveCommand`] - Exit checks and grid arithmetic
//! - [`PostCommand`] - Win and lose checks after a successful command
//! - [`CommandProcessor`] - Parse, validate, execute, post-process for one input
//! - [`Persistence`] - The save/load/quit/restart collaborator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod executor;
pub mod items;
pub mod movement;
pub mod persistence;
pub mod post_command;
pub mod processor;
pub mod result;
pub mod validator;

pub use executor::CommandExecutor;
pub use items::ItemCommands;
pub use movement::MoveCommand;
pub use persistence::{MemoryPersistence, Persistence};
pub use post_command::PostCommand;
pub use processor::CommandProcessor;
pub use result::ActionResult;
pub use validator::CommandValidator;
