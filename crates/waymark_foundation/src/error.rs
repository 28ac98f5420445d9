//! Error types for the Waymark interpreter.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Unrecognised player input is never an error; these types cover content
//! faults, invalid state transitions, and persistence I/O.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Waymark operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional note about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a room index error.
    #[must_use]
    pub fn room_out_of_range(id: i64, count: usize) -> Self {
        Self::new(ErrorKind::RoomOutOfRange { id, count })
    }

    /// Creates an item index error.
    #[must_use]
    pub fn item_out_of_range(id: i64, count: usize) -> Self {
        Self::new(ErrorKind::ItemOutOfRange { id, count })
    }

    /// Creates an invalid content error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContent(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Returns true if this error is an out-of-range index fault.
    #[must_use]
    pub fn is_index_fault(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RoomOutOfRange { .. }
                | ErrorKind::ItemOutOfRange { .. }
                | ErrorKind::VocabularyIndex { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room id outside `1..=count`.
    #[error("invalid room number: {id} (rooms: {count})")]
    RoomOutOfRange {
        /// The id that was requested.
        id: i64,
        /// Number of rooms in the game.
        count: usize,
    },

    /// An item id outside `1..=count`.
    #[error("invalid item number: {id} (items: {count})")]
    ItemOutOfRange {
        /// The id that was requested.
        id: i64,
        /// Number of items in the game.
        count: usize,
    },

    /// A verb or noun index outside its table.
    #[error("invalid {table} index: {index} (length {length})")]
    VocabularyIndex {
        /// Which table was indexed ("verb", "noun", "preposition").
        table: &'static str,
        /// The index that was accessed.
        index: usize,
        /// The actual length of the table.
        length: usize,
    },

    /// Content data that cannot be turned into a game.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// A lifecycle transition that the state machine forbids.
    #[error("invalid lifecycle transition: {from} -> {to}")]
    InvalidTransition {
        /// State the game was in.
        from: String,
        /// State that was requested.
        to: String,
    },

    /// A stat name with no slot.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding or decoding failure.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Terminal line editor failure.
    #[error("editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
