//! The state triple threaded through the pipeline.

use waymark_storage::{Game, Player};

/// Game, player, and whether the stage succeeded.
///
/// Every stage takes the state by value and hands back a fresh result.
#[derive(Clone, Debug)]
pub struct ActionResult {
    /// Game state after the stage.
    pub game: Game,
    /// Player state after the stage.
    pub player: Player,
    /// Whether the stage succeeded.
    pub valid: bool,
}

impl ActionResult {
    /// Creates a result.
    #[must_use]
    pub fn new(game: Game, player: Player, valid: bool) -> Self {
        Self { game, player, valid }
    }

    /// A successful result.
    #[must_use]
    pub fn success(game: Game, player: Player) -> Self {
        Self::new(game, player, true)
    }

    /// A failed result.
    #[must_use]
    pub fn failure(game: Game, player: Player) -> Self {
        Self::new(game, player, false)
    }

    /// Returns true if the stage succeeded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Splits the result back into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Game, Player, bool) {
        (self.game, self.player, self.valid)
    }
}
