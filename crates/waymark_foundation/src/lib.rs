//! Core identifiers, directions, stats, and error types for Waymark.
//!
//! This crate provides:
//! - [`RoomId`], [`ItemId`], [`VerbId`], [`NounId`] - 1-based content identifiers
//! - [`Direction`] - Movement directions and grid arithmetic
//! - [`Stat`] and [`Stats`] - Fixed player stat slots
//! - [`Error`] - Rich error types with context
//! - [`constants`] - Fixed numbers shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constants;
pub mod direction;
pub mod error;
pub mod ids;
pub mod stat;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use ids::{ItemId, NounId, RoomId, VerbId};
pub use stat::{Stat, Stats};
