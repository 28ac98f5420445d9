//! Player stat slots.
//!
//! Stats live in a fixed array addressed by [`Stat`]. Names are still
//! accepted at the edges (content, saves, tooling) through [`Stat::from_name`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A named numeric player stat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stat {
    /// Turns left before the game runs out of time.
    TimeRemaining,
    /// Physical strength.
    Strength,
    /// Accumulated wisdom.
    Wisdom,
    /// Weight of what the player carries.
    Weight,
}

impl Stat {
    /// Every stat in slot order.
    pub const ALL: [Stat; 4] = [
        Stat::TimeRemaining,
        Stat::Strength,
        Stat::Wisdom,
        Stat::Weight,
    ];

    /// Returns the stat's name as used in content and save data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TimeRemaining => "timeRemaining",
            Self::Strength => "strength",
            Self::Wisdom => "wisdom",
            Self::Weight => "weight",
        }
    }

    /// Looks a stat up by name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownStat`] when no slot has that name.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.name() == name)
            .ok_or_else(|| Error::new(ErrorKind::UnknownStat(name.to_string())))
    }

    const fn slot(self) -> usize {
        match self {
            Self::TimeRemaining => 0,
            Self::Strength => 1,
            Self::Wisdom => 2,
            Self::Weight => 3,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_name(s)
    }
}

/// Values for every [`Stat`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    values: [f64; 4],
}

impl Stats {
    /// Creates a stat block with every slot at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a starting value.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: f64) -> Self {
        self.set(stat, value);
        self
    }

    /// Returns a stat's current value.
    #[must_use]
    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.slot()]
    }

    /// Overwrites a stat.
    pub fn set(&mut self, stat: Stat, value: f64) {
        self.values[stat.slot()] = value;
    }

    /// Adds `delta` to a stat without any clamping.
    pub fn adjust(&mut self, stat: Stat, delta: f64) {
        self.values[stat.slot()] += delta;
    }

    /// Lowers a stat by one, stopping at zero.
    pub fn reduce(&mut self, stat: Stat) {
        let value = self.get(stat);
        if value > 0.0 {
            self.set(stat, (value - 1.0).max(0.0));
        }
    }

    /// Iterates over `(stat, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}
