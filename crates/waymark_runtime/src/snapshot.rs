//! Immutable view of the game for front ends.

use waymark_foundation::RoomId;
use waymark_foundation::constants::{COMMAND_HISTORY, SAVE_SLOTS_DISPLAYED};
use waymark_storage::LifecycleState;

/// Everything a front end shows after one command.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    /// `"You are <room name>"` for the display room.
    pub room_description: String,
    /// `"You see: ..."`, blank outside normal mode.
    pub items: String,
    /// `"You can go: ..."`, blank outside normal mode.
    pub exits: String,
    /// Extra exit line, blank outside normal mode.
    pub special_exits: String,
    /// `"Time Remaining: N"`.
    pub time: String,
    /// Strength and wisdom line.
    pub status: String,
    /// Room the player is in.
    pub room: RoomId,
    /// Score if the game ended now.
    pub final_score: i64,
    /// Lifecycle state.
    pub state: LifecycleState,
    /// Presentation message flag.
    pub message_state: bool,
    /// Whether the player is in normal mode.
    pub normal: bool,
    /// Save labels on the current page.
    pub save_slots: [String; SAVE_SLOTS_DISPLAYED],
    /// First page of saves is showing.
    pub lower_limit: bool,
    /// Last page of saves is showing.
    pub upper_limit: bool,
    /// Recent commands, oldest first.
    pub history: [String; COMMAND_HISTORY],
    /// Narrative lines.
    pub messages: Vec<String>,
    /// Panel lines.
    pub panel: Vec<String>,
}

impl GameSnapshot {
    /// Returns true while the intro is showing.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.state == LifecycleState::Started
    }

    /// Returns true during normal play.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    /// Returns true while browsing saves.
    #[must_use]
    pub fn is_saved_games(&self) -> bool {
        self.state == LifecycleState::SavedGames
    }

    /// Returns true once the player has quit.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state == LifecycleState::Ended
    }

    /// Returns true when a restart was requested.
    #[must_use]
    pub fn is_restart(&self) -> bool {
        self.state == LifecycleState::Restart
    }

    /// Lines to print, blanks skipped.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![self.room_description.clone()];
        lines.extend(
            [&self.items, &self.exits, &self.special_exits]
                .into_iter()
                .filter(|line| !line.is_empty())
                .cloned(),
        );
        lines.push(String::new());
        lines.extend(self.messages.iter().cloned());
        lines.extend(self.panel.iter().cloned());
        lines.push(format!("{}    {}", self.status, self.time));
        lines
    }
}
