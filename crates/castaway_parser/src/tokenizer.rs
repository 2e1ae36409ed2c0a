//! Input tokenization.
//!
//! Converts raw player input into a list of uppercase word tokens.

use tracing::trace;

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Collapses runs of whitespace
    /// - Converts words to uppercase
    /// - Returns a single empty token for empty or all-whitespace input,
    ///   which callers read as "no command entered"
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let tokens: Vec<String> = input.split_whitespace().map(str::to_uppercase).collect();
        trace!(?tokens, "tokenized");
        if tokens.is_empty() {
            return vec![String::new()];
        }
        tokens
    }
}
