//! Integration tests for Layer 2: Parser
//!
//! Tests normalisation, tokenizing, and verb and noun resolution against a
//! real content pack.

mod classification;
mod movement;
mod nouns;
