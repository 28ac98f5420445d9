//! Top-level game lifecycle.
//!
//! ```text
//! STARTED ──► RUNNING ◄──► SAVED_GAMES
//!    │           │              │
//!    └───────────┴──────────────┴──► ENDED | RESTART
//! ```
//!
//! STARTED lasts for a countdown of intro ticks, then the first check after
//! the countdown moves it to RUNNING. ENDED and RESTART are terminal.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::constants::INITIAL_INTRO_TICKS;
use waymark_foundation::{Error, ErrorKind, Result};

/// Lifecycle states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifecycleState {
    /// Intro banner period.
    Started,
    /// Normal play.
    Running,
    /// Browsing saved games.
    SavedGames,
    /// The game is over.
    Ended,
    /// The game should be rebuilt from scratch.
    Restart,
}

impl LifecycleState {
    /// Returns true for states that end input processing.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Restart)
    }

    /// Returns true if the machine may move from `self` to `to`.
    ///
    /// Staying in the same state is always allowed.
    #[must_use]
    pub fn can_transition(self, to: Self) -> bool {
        use LifecycleState::{Ended, Restart, Running, SavedGames, Started};
        if self == to {
            return true;
        }
        match (self, to) {
            (Ended | Restart, _) | (_, Started) => false,
            (Started, _) | (Running | SavedGames, Running | SavedGames | Ended | Restart) => true,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Started => "STARTED",
            Self::Running => "RUNNING",
            Self::SavedGames => "SAVED_GAMES",
            Self::Ended => "ENDED",
            Self::Restart => "RESTART",
        };
        f.write_str(name)
    }
}

/// The lifecycle state machine with its intro countdown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lifecycle {
    state: LifecycleState,
    intro_ticks: u32,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(INITIAL_INTRO_TICKS)
    }
}

impl Lifecycle {
    /// Creates a machine in STARTED that waits `intro_ticks` checks.
    #[must_use]
    pub fn new(intro_ticks: u32) -> Self {
        Self {
            state: LifecycleState::Started,
            intro_ticks,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Counts down one intro tick.
    ///
    /// Returns true exactly once: on the first check after the countdown has
    /// run out, when the machine moves from STARTED to RUNNING.
    pub fn advance_intro(&mut self) -> bool {
        if self.intro_ticks > 0 {
            self.intro_ticks -= 1;
            false
        } else if self.state == LifecycleState::Started {
            tracing::info!("intro finished, game running");
            self.state = LifecycleState::Running;
            true
        } else {
            false
        }
    }

    /// Moves to another state.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidTransition`] for moves the machine forbids.
    pub fn transition(&mut self, to: LifecycleState) -> Result<()> {
        if !self.state.can_transition(to) {
            return Err(Error::new(ErrorKind::InvalidTransition {
                from: self.state.to_string(),
                to: to.to_string(),
            }));
        }
        if self.state != to {
            tracing::info!(from = %self.state, %to, "lifecycle transition");
        }
        self.state = to;
        Ok(())
    }
}
