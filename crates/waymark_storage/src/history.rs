//! Recent command history.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::constants::COMMAND_HISTORY;

/// The last few raw commands, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandHistory {
    entries: VecDeque<String>,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a command, dropping the oldest once the ring is full.
    pub fn record(&mut self, command: impl Into<String>) {
        if self.entries.len() == COMMAND_HISTORY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.into());
    }

    /// Fixed-size view padded with empty strings, oldest first.
    #[must_use]
    pub fn slots(&self) -> [String; COMMAND_HISTORY] {
        std::array::from_fn(|i| self.entries.get(i).cloned().unwrap_or_default())
    }

    /// Number of remembered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
