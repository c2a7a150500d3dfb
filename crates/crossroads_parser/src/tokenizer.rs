//! Input tokenization.
//!
//! Converts raw player input into a stream of lowercase words.

use crossroads_world::IGNORED_PUNCTUATION;

/// Tokenizes player input.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on whitespace
    /// - Strips `. , ! ? ; : ' "`
    /// - Keeps hyphens, so `t-shirt` stays one word
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            match ch {
                c if c.is_whitespace() => {
                    if !current_word.is_empty() {
                        tokens.push(std::mem::take(&mut current_word));
                    }
                }
                c if IGNORED_PUNCTUATION.contains(&c) => {}
                _ => current_word.extend(ch.to_lowercase()),
            }
        }

        if !current_word.is_empty() {
            tokens.push(current_word);
        }

        tokens
    }
}
