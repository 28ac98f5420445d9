//! The game engine: owns the state between commands.
//!
//! One command at a time. `process_command` takes `&mut self`, so a second
//! command cannot start while one is running.

use waymark_engine::{ActionResult, CommandProcessor, Persistence};
use waymark_foundation::constants::{TIME_BONUS_THRESHOLD, TIME_SCORE_DIVISOR};
use waymark_foundation::{Result, RoomId, Stat};
use waymark_storage::{ContentPack, Game, LifecycleState, Player};

use crate::config::RuntimeConfig;
use crate::snapshot::GameSnapshot;

/// Drives a game from raw commands.
pub struct GameEngine {
    content: ContentPack,
    config: RuntimeConfig,
    processor: CommandProcessor,
    persistence: Box<dyn Persistence>,
    game: Game,
    player: Player,
}

impl GameEngine {
    /// Builds a fresh game from content.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error if the pack does not build.
    pub fn new(content: ContentPack, config: RuntimeConfig, persistence: Box<dyn Persistence>) -> Result<Self> {
        let processor = CommandProcessor::new(content.vocabulary()?, config.seed);
        let (game, player) = Self::fresh_state(&content, &config)?;
        tracing::info!(rooms = game.room_count(), seed = config.seed, "game engine ready");
        Ok(Self {
            content,
            config,
            processor,
            persistence,
            game,
            player,
        })
    }

    fn fresh_state(content: &ContentPack, config: &RuntimeConfig) -> Result<(Game, Player)> {
        let start = config.start_room.unwrap_or(content.start_room);
        let mut game = content
            .build_game()?
            .with_intro_ticks(config.intro_ticks)
            .with_line_width(config.line_width);
        game.set_room_visited(start)?;
        Ok((game, Player::new(start, config.stats.clone())))
    }

    /// Starts over from the content pack.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error if the pack does not build.
    pub fn restart(&mut self) -> Result<()> {
        (self.game, self.player) = Self::fresh_state(&self.content, &self.config)?;
        tracing::info!("game restarted");
        Ok(())
    }

    // ---- core loop ----

    /// Runs one command, applies its result, and records it in the history.
    pub fn process_command(&mut self, command: &str) {
        let game = self.game.clone();
        let player = self.player.clone();
        let result = self
            .processor
            .execute(command, game, player, self.persistence.as_mut());
        self.apply_result(result);
        self.game.record_command(command);
    }

    fn apply_result(&mut self, result: ActionResult) {
        let (game, player, _) = result.into_parts();
        self.game = game;
        self.player = player;
        self.player.turn_update_stats();
    }

    /// Adds a narrative message.
    pub fn add_message(&mut self, message: &str, clear: bool, long: bool) {
        self.game.add_message(message, clear, long);
    }

    // ---- presentation ----

    /// `"You are <room>"` for the display room.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the display room does not exist.
    pub fn room_description(&self) -> Result<String> {
        Ok(format!("You are {}", self.game.room_name(self.player.display_room())?))
    }

    /// Items line, blank outside normal mode.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the display room does not exist.
    pub fn items(&self) -> Result<String> {
        if self.player.is_normal() {
            self.game.items_description(self.player.display_room())
        } else {
            Ok(String::new())
        }
    }

    /// Exits line, blank outside normal mode.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the player's room does not exist.
    pub fn exits(&self) -> Result<String> {
        if self.player.is_normal() {
            self.game.exits_description(self.player.room())
        } else {
            Ok(String::new())
        }
    }

    /// Special exit line, blank outside normal mode.
    #[must_use]
    pub fn special_exits(&self) -> String {
        if self.player.is_normal() {
            self.game.special_exit_description(self.player.room()).to_string()
        } else {
            String::new()
        }
    }

    /// Time line.
    #[must_use]
    pub fn time(&self) -> String {
        self.player.time_line()
    }

    /// Status line.
    #[must_use]
    pub fn status(&self) -> String {
        self.player.status_line()
    }

    /// Narrative lines.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.game.messages()
    }

    /// Panel lines.
    #[must_use]
    pub fn panel_messages(&self) -> &[String] {
        self.game.panel_messages()
    }

    /// Recent commands, oldest first.
    #[must_use]
    pub fn commands(&self) -> [String; 3] {
        self.game.history().slots()
    }

    /// Strength plus wisdom, less a seventh of the remaining time when
    /// little is left.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn final_score(&self) -> i64 {
        let time = self.player.stat(Stat::TimeRemaining).trunc();
        let penalty = if time < TIME_BONUS_THRESHOLD {
            time / TIME_SCORE_DIVISOR
        } else {
            0.0
        };
        let strength = self.player.stat(Stat::Strength).trunc();
        let wisdom = self.player.stat(Stat::Wisdom).trunc();
        (strength + wisdom - penalty) as i64
    }

    /// Everything a front end needs, in one value.
    ///
    /// # Errors
    ///
    /// Returns a room index error if the player's rooms do not exist.
    pub fn snapshot(&self) -> Result<GameSnapshot> {
        let saves = self.game.saves();
        Ok(GameSnapshot {
            room_description: self.room_description()?,
            items: self.items()?,
            exits: self.exits()?,
            special_exits: self.special_exits(),
            time: self.time(),
            status: self.status(),
            room: self.player.room(),
            final_score: self.final_score(),
            state: self.game.state(),
            message_state: self.game.message_state(),
            normal: self.player.is_normal(),
            save_slots: saves.displayed().clone(),
            lower_limit: saves.lower_limit(),
            upper_limit: saves.upper_limit(),
            history: self.commands(),
            messages: self.game.messages().to_vec(),
            panel: self.game.panel_messages().to_vec(),
        })
    }

    // ---- saved games ----

    /// Shows the next page of saves.
    pub fn increase_load_position(&mut self) {
        self.game.saves_mut().increase();
        self.process_command("load");
    }

    /// Shows the previous page of saves.
    pub fn decrease_load_position(&mut self) {
        self.game.saves_mut().decrease();
        self.process_command("load");
    }

    /// Loads the save in a displayed slot. Returns false for an empty slot.
    pub fn select_saved_game(&mut self, slot: usize) -> bool {
        if !self.game.saves_mut().select(slot) {
            return false;
        }
        self.process_command("load");
        true
    }

    /// Label flags for the save page.
    #[must_use]
    pub fn lower_limit_saved_games(&self) -> bool {
        self.game.saves().lower_limit()
    }

    /// Label flags for the save page.
    #[must_use]
    pub fn upper_limit_saved_games(&self) -> bool {
        self.game.saves().upper_limit()
    }

    /// Save labels on the current page.
    #[must_use]
    pub fn displayed_saved_games(&self) -> &[String] {
        self.game.saves().displayed()
    }

    // ---- lifecycle ----

    /// Leaves save browsing or the intro. The next browse starts on the
    /// first page.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition error once the game has finished.
    pub fn set_running_state(&mut self) -> Result<()> {
        self.game.set_state(LifecycleState::Running)?;
        self.game.saves_mut().reset();
        Ok(())
    }

    /// Enters save browsing.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition error once the game has finished.
    pub fn set_saved_games_state(&mut self) -> Result<()> {
        self.game.set_state(LifecycleState::SavedGames)
    }

    /// Flips the presentation message flag.
    pub fn toggle_message_state(&mut self) {
        self.game.toggle_message_state();
    }

    /// Counts down the intro. Returns true on the tick the game starts.
    pub fn advance_intro(&mut self) -> bool {
        self.game.advance_intro()
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.game.state()
    }

    /// Whether the player is in normal mode.
    #[must_use]
    pub fn is_normal_state(&self) -> bool {
        self.player.is_normal()
    }

    // ---- rooms ----

    /// Room the player is in.
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.player.room()
    }

    /// Moves the player directly, for map navigation.
    ///
    /// # Errors
    ///
    /// Returns a room index error for rooms that do not exist.
    pub fn set_room(&mut self, room: RoomId) -> Result<()> {
        self.game.room(room)?;
        self.player.set_room(room);
        Ok(())
    }

    /// Whether a room has been visited.
    ///
    /// # Errors
    ///
    /// Returns a room index error for rooms that do not exist.
    pub fn room_visited(&self, room: RoomId) -> Result<bool> {
        self.game.room_visited(room)
    }

    /// A room's exit flags.
    ///
    /// # Errors
    ///
    /// Returns a room index error for rooms that do not exist.
    pub fn room_exits(&self, room: RoomId) -> Result<[bool; 4]> {
        self.game.room_exits(room)
    }

    /// A room's image type.
    ///
    /// # Errors
    ///
    /// Returns a room index error for rooms that do not exist.
    pub fn room_image_type(&self, room: RoomId) -> Result<&str> {
        self.game.room_image_type(room)
    }

    /// A room's name.
    ///
    /// # Errors
    ///
    /// Returns a room index error for rooms that do not exist.
    pub fn room_name(&self, room: RoomId) -> Result<&str> {
        self.game.room_name(room)
    }

    /// The game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The vocabulary commands are parsed against.
    #[must_use]
    pub fn vocabulary(&self) -> &waymark_storage::Vocabulary {
        self.processor.vocabulary()
    }
}
