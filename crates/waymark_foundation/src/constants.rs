//! Fixed numbers shared across the interpreter.

/// Number of compass exits a room carries (N, S, E, W).
pub const NUMBER_EXITS: usize = 4;

/// Rooms are laid out on an implicit grid this many rooms wide.
pub const ROW_WIDTH: i32 = 10;

/// Ticks the game stays in its intro state before it starts running.
pub const INITIAL_INTRO_TICKS: u32 = 2;

/// Width narrative messages are wrapped to.
pub const LINE_LENGTH: usize = 90;

/// Commands remembered in the history ring.
pub const COMMAND_HISTORY: usize = 3;

/// Save slots shown per page while browsing saved games.
pub const SAVE_SLOTS_DISPLAYED: usize = 5;

/// Time remaining below which the final score is penalised.
pub const TIME_BONUS_THRESHOLD: f64 = 640.0;

/// Divisor applied to remaining time when computing the penalty.
pub const TIME_SCORE_DIVISOR: f64 = 7.0;

/// Message shown when a new game begins.
pub const OPENING_MESSAGE: &str = "Let your quest begin!";
