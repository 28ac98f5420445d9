//! Runtime configuration.

use std::path::PathBuf;

use waymark_foundation::constants::{INITIAL_INTRO_TICKS, LINE_LENGTH};
use waymark_foundation::{RoomId, Stat, Stats};

/// Environment variable that overrides the save directory.
pub const SAVE_DIR_ENV: &str = "WAYMARK_SAVE_DIR";

/// Settings for a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Where save files go.
    pub save_dir: PathBuf,
    /// Seed for the trapdoor.
    pub seed: u64,
    /// Intro ticks before the game starts running.
    pub intro_ticks: u32,
    /// Narrative wrap width.
    pub line_width: usize,
    /// Overrides the content's start room.
    pub start_room: Option<RoomId>,
    /// Starting stats.
    pub stats: Stats,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("saves"),
            seed: 0x5EED,
            intro_ticks: INITIAL_INTRO_TICKS,
            line_width: LINE_LENGTH,
            start_room: None,
            stats: Self::starting_stats(),
        }
    }
}

impl RuntimeConfig {
    /// Stats a new player starts with.
    #[must_use]
    pub fn starting_stats() -> Stats {
        Stats::new()
            .with(Stat::TimeRemaining, 1000.0)
            .with(Stat::Strength, 100.0)
            .with(Stat::Wisdom, 35.0)
            .with(Stat::Weight, 0.0)
    }

    /// Fixed seed and no intro, for tests and scripted runs.
    #[must_use]
    pub fn testing() -> Self {
        Self {
            seed: 1,
            intro_ticks: 0,
            ..Self::default()
        }
    }

    /// Builder method to set the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the intro length.
    #[must_use]
    pub fn with_intro_ticks(mut self, ticks: u32) -> Self {
        self.intro_ticks = ticks;
        self
    }

    /// Builder method to set the wrap width.
    #[must_use]
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Builder method to override the start room.
    #[must_use]
    pub fn with_start_room(mut self, room: RoomId) -> Self {
        self.start_room = Some(room);
        self
    }

    /// Builder method to set starting stats.
    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Applies [`SAVE_DIR_ENV`] when it is set and not empty.
    #[must_use]
    pub fn with_env(self) -> Self {
        match std::env::var(SAVE_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => self.with_save_dir(dir),
            _ => self,
        }
    }
}
