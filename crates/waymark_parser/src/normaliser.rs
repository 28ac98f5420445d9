//! Input normalisation.
//!
//! A flat substitution table applied to the whole input after lower-casing.
//! Matches are exact: `"north"` becomes `"n"`, but `"go north"` is untouched.

/// Whole-input synonyms and their canonical forms.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("u", "go up"),
    ("up", "go up"),
    ("d", "go down"),
    ("down", "go down"),
    ("i", "go in"),
    ("enter", "go in"),
    ("inside", "go in"),
    ("go inside", "go in"),
    ("o", "go out"),
    ("exit", "go out"),
    ("outside", "go out"),
    ("go outside", "go out"),
    ("north", "n"),
    ("south", "s"),
    ("east", "e"),
    ("west", "w"),
];

/// Words that get a `"go "` prefix when typed on their own.
const BARE_MOVES: [&str; 4] = ["in", "out", "up", "down"];

/// Rewrites raw input into canonical command text.
pub struct Normaliser;

impl Normaliser {
    /// Trims, lower-cases, and applies [`SYNONYMS`].
    #[must_use]
    pub fn normalise(input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        SYNONYMS
            .iter()
            .find(|(from, _)| *from == lowered)
            .map_or(lowered, |(_, to)| (*to).to_string())
    }

    /// Prefixes a bare `in`, `out`, `up`, or `down` with `"go "`.
    #[must_use]
    pub fn expand_movement(input: String) -> String {
        if BARE_MOVES.contains(&input.as_str()) {
            format!("go {input}")
        } else {
            input
        }
    }

    /// Both steps, in order.
    #[must_use]
    pub fn canonical(input: &str) -> String {
        Self::expand_movement(Self::normalise(input))
    }
}
