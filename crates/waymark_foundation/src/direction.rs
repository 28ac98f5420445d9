//! Movement directions.
//!
//! The four compass directions move the player across the room grid. The
//! vertical and threshold directions (up, down, in, out) have no grid offset;
//! only special exits give them meaning.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::ROW_WIDTH;

/// A direction a player can try to move in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Grid row above (-10).
    North,
    /// Grid row below (+10).
    South,
    /// Next room along the row (+1).
    East,
    /// Previous room along the row (-1).
    West,
    /// Upwards.
    Up,
    /// Downwards.
    Down,
    /// Into something.
    In,
    /// Out of something.
    Out,
}

impl Direction {
    /// Every direction in noun-table order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::In,
        Direction::Out,
    ];

    /// The compass directions in exit-flag order.
    pub const COMPASS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the direction with the given 1-based code.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        let slot = usize::try_from(code.checked_sub(1)?).ok()?;
        Self::ALL.get(slot).copied()
    }

    /// Returns this direction's 1-based code.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::North => 1,
            Self::South => 2,
            Self::East => 3,
            Self::West => 4,
            Self::Up => 5,
            Self::Down => 6,
            Self::In => 7,
            Self::Out => 8,
        }
    }

    /// Position of this direction in a room's exit flags, if it is a compass direction.
    #[must_use]
    pub fn exit_index(self) -> Option<usize> {
        match self {
            Self::North => Some(0),
            Self::South => Some(1),
            Self::East => Some(2),
            Self::West => Some(3),
            Self::Up | Self::Down | Self::In | Self::Out => None,
        }
    }

    /// Grid offset applied to a room number when moving this way.
    #[must_use]
    pub fn modifier(self) -> Option<i32> {
        match self {
            Self::North => Some(-ROW_WIDTH),
            Self::South => Some(ROW_WIDTH),
            Self::East => Some(1),
            Self::West => Some(-1),
            Self::Up | Self::Down | Self::In | Self::Out => None,
        }
    }

    /// Returns true for north, south, east, and west.
    #[must_use]
    pub fn is_compass(self) -> bool {
        self.exit_index().is_some()
    }

    /// Display name used in exit listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::In => "In",
            Self::Out => "Out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
