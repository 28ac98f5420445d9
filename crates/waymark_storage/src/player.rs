//! Player state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::{RoomId, Stat, Stats};

/// Coarse player condition. Presentation hides room detail outside `Normal`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum PlayerMode {
    /// Ordinary play.
    #[default]
    Normal,
}

/// The player: where they are, what they are shown, and their stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    room: RoomId,
    display_room: RoomId,
    stats: Stats,
    mode: PlayerMode,
}

impl Player {
    /// Creates a player standing in `room` with the given stats.
    #[must_use]
    pub fn new(room: RoomId, stats: Stats) -> Self {
        Self {
            room,
            display_room: room,
            stats,
            mode: PlayerMode::Normal,
        }
    }

    /// Room the player is actually in.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Room whose description is shown.
    #[must_use]
    pub fn display_room(&self) -> RoomId {
        self.display_room
    }

    /// Moves the player; the displayed room follows.
    pub fn set_room(&mut self, room: RoomId) {
        tracing::info!(room = room.get(), "player moved");
        self.room = room;
        self.display_room = room;
    }

    /// Shows a different room without moving the player.
    pub fn set_display_room(&mut self, room: RoomId) {
        self.display_room = room;
    }

    /// Current value of a stat.
    #[must_use]
    pub fn stat(&self, stat: Stat) -> f64 {
        self.stats.get(stat)
    }

    /// Overwrites a stat.
    pub fn set_stat(&mut self, stat: Stat, value: f64) {
        tracing::debug!(%stat, value, "stat set");
        self.stats.set(stat, value);
    }

    /// Lowers a stat by one without going below zero.
    pub fn reduce_stat(&mut self, stat: Stat) {
        self.stats.reduce(stat);
    }

    /// All stats.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Per-command upkeep: one unit of time passes.
    ///
    /// Unlike [`reduce_stat`](Self::reduce_stat) this is not clamped, so time
    /// remaining keeps falling past zero.
    pub fn turn_update_stats(&mut self) {
        self.stats.adjust(Stat::TimeRemaining, -1.0);
        tracing::debug!(time = self.stats.get(Stat::TimeRemaining), "turn passed");
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Puts the player back into normal mode.
    pub fn set_mode_normal(&mut self) {
        self.mode = PlayerMode::Normal;
    }

    /// Returns true in normal mode.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.mode == PlayerMode::Normal
    }

    /// Status line: strength to two places, wisdom as a whole number.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Strength: {:.2}         wisdom: {:.0}",
            self.stat(Stat::Strength),
            self.stat(Stat::Wisdom)
        )
    }

    /// Time line shown under the status.
    #[must_use]
    pub fn time_line(&self) -> String {
        format!("Time Remaining: {:.0}", self.stat(Stat::TimeRemaining))
    }
}
