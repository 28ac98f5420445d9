//! Command tokenizing.

/// Input split into a verb word and everything after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitCommand {
    /// First whitespace-delimited word.
    pub verb: String,
    /// The rest of the input, trimmed. May be empty.
    pub noun_phrase: String,
}

/// Splits normalised input.
pub struct CommandTokenizer;

impl CommandTokenizer {
    /// Splits into verb word and noun phrase.
    #[must_use]
    pub fn split(input: &str) -> SplitCommand {
        let input = input.trim_start();
        match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => SplitCommand {
                verb: verb.to_string(),
                noun_phrase: rest.trim().to_string(),
            },
            None => SplitCommand {
                verb: input.to_string(),
                noun_phrase: String::new(),
            },
        }
    }

    /// Every whitespace-delimited word.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input.split_whitespace().map(ToString::to_string).collect()
    }

    /// First word of a noun phrase; later words are ignored.
    #[must_use]
    pub fn head_noun(phrase: &str) -> &str {
        phrase.split_whitespace().next().unwrap_or("")
    }
}
