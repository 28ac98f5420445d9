//! The persistence collaborator.
//!
//! The executor hands save, load, quit, and restart commands to a
//! [`Persistence`] implementation and trusts the result it returns. I/O
//! problems become failed results with a message for the player; only core
//! faults such as a forbidden lifecycle transition come back as `Err`.

use waymark_foundation::Result;
use waymark_storage::{Game, LifecycleState, Player};

use crate::result::ActionResult;

/// Message after quitting.
pub const GAME_OVER: &str = "Game over";
/// Message after restoring a save.
pub const GAME_LOADED: &str = "Game loaded";
/// Message when there is nothing to load.
pub const NO_SAVES: &str = "No saved games";

/// Save, load, quit, and restart.
pub trait Persistence {
    /// Stores the current game.
    ///
    /// # Errors
    ///
    /// Returns an error only for core faults.
    fn save(&mut self, game: Game, player: Player) -> Result<ActionResult>;

    /// Restores the selected save, or lists the saves to choose from.
    ///
    /// # Errors
    ///
    /// Returns an error only for core faults.
    fn load(&mut self, game: Game, player: Player) -> Result<ActionResult>;

    /// Ends the game.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition error if the game has already finished.
    fn quit(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        game.set_state(LifecycleState::Ended)?;
        game.add_message(GAME_OVER, true, true);
        Ok(ActionResult::success(game, player))
    }

    /// Asks the caller to start over.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition error if the game has already finished.
    fn restart(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        game.set_state(LifecycleState::Restart)?;
        Ok(ActionResult::success(game, player))
    }
}

/// Name given to the `n`th save.
#[must_use]
pub fn save_name(n: usize) -> String {
    format!("save-{n}")
}

/// First `save-<n>` name not already taken.
#[must_use]
pub fn next_save_name(existing: &[String]) -> String {
    (existing.len() + 1..)
        .map(save_name)
        .find(|name| !existing.contains(name))
        .unwrap_or_else(|| save_name(existing.len() + 1))
}

/// Shows a page of saves and switches to save browsing.
///
/// # Errors
///
/// Returns an invalid transition error if the game has already finished.
pub fn browse_saves(mut game: Game, player: Player, names: &[String]) -> Result<ActionResult> {
    if names.is_empty() {
        tracing::warn!("load requested with no saved games");
        game.add_message(NO_SAVES, true, true);
        return Ok(ActionResult::failure(game, player));
    }
    game.set_state(LifecycleState::SavedGames)?;
    game.saves_mut().show_page(names);
    Ok(ActionResult::success(game, player))
}

/// Finishes a load: back to running in normal mode, with the confirmation
/// message.
///
/// # Errors
///
/// Returns an invalid transition error if the saved game had finished.
pub fn restore(mut game: Game, mut player: Player) -> Result<ActionResult> {
    game.set_state(LifecycleState::Running)?;
    player.set_mode_normal();
    game.add_message(GAME_LOADED, true, true);
    tracing::info!(room = %player.room(), "game loaded");
    Ok(ActionResult::success(game, player))
}

/// Keeps saves in memory for the life of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    saves: Vec<(String, Game, Player)>,
}

impl MemoryPersistence {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the stored saves, oldest first.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.saves.iter().map(|(name, _, _)| name.clone()).collect()
    }
}

impl Persistence for MemoryPersistence {
    fn save(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        let name = next_save_name(&self.names());
        self.saves.push((name.clone(), game.clone(), player.clone()));
        game.add_message(&format!("Game saved as {name}"), true, true);
        tracing::info!(%name, "game saved");
        Ok(ActionResult::success(game, player))
    }

    fn load(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        let Some(name) = game.saves_mut().take_selected() else {
            return browse_saves(game, player, &self.names());
        };
        match self.saves.iter().find(|(saved, _, _)| *saved == name) {
            Some((_, saved_game, saved_player)) => restore(saved_game.clone(), saved_player.clone()),
            None => {
                tracing::warn!(%name, "selected save not found");
                game.add_message(NO_SAVES, true, true);
                Ok(ActionResult::failure(game, player))
            }
        }
    }
}
