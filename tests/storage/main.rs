//! Integration tests for Layer 1: Storage
//!
//! Tests for the vocabulary, content packs, game state, and lifecycle.

mod content;
mod game;
