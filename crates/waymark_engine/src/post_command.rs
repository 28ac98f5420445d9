//! Automatic updates after a successful command.

use waymark_storage::{Game, Player};

use crate::result::ActionResult;

/// Win and lose checks, then the panel summary. The last pipeline stage;
/// its result is final.
pub struct PostCommand;

impl PostCommand {
    /// Applies end-of-command effects. Always returns a valid result.
    #[must_use]
    pub fn apply(result: ActionResult) -> ActionResult {
        let (mut game, mut player, _) = result.into_parts();
        if Self::check_win(&game, &player) {
            Self::apply_win(&mut game, &mut player);
        }
        if Self::check_lose(&game, &player) {
            Self::apply_lose(&mut game, &mut player);
        }
        let explored = format!("Rooms explored: {}", game.rooms_visited());
        game.add_panel_message(&explored, true);
        ActionResult::success(game, player)
    }

    fn check_win(_game: &Game, _player: &Player) -> bool {
        false
    }

    fn check_lose(_game: &Game, _player: &Player) -> bool {
        false
    }

    fn apply_win(_game: &mut Game, _player: &mut Player) {}

    fn apply_lose(_game: &mut Game, _player: &mut Player) {}
}
