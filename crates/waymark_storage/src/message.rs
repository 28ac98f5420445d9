//! Message buffers for narrative output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::constants::LINE_LENGTH;

/// An ordered list of message lines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageBuffer {
    lines: Vec<String>,
    width: usize,
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuffer {
    /// Creates an empty buffer wrapping at [`LINE_LENGTH`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            width: LINE_LENGTH,
        }
    }

    /// Creates a buffer holding one opening line.
    #[must_use]
    pub fn with_opening(message: impl Into<String>) -> Self {
        let mut buffer = Self::new();
        buffer.lines.push(message.into());
        buffer
    }

    /// Builder method to set the wrap width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Appends a line, first emptying the buffer when `clear` is set.
    pub fn add(&mut self, message: impl Into<String>, clear: bool) {
        if clear {
            self.lines.clear();
        }
        self.lines.push(message.into());
    }

    /// Appends a message word-wrapped to the buffer width.
    pub fn add_long(&mut self, message: &str, clear: bool) {
        if clear {
            self.lines.clear();
        }
        self.lines.extend(wrap(message, self.width));
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Most recent line, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(message: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in message.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
