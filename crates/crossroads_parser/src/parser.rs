//! Main parser pipeline.
//!
//! Turns a raw input line into a [`Command`]: tokenize, look up the verb,
//! then read a direction or an item phrase from the remaining words.

use std::sync::LazyLock;

use thiserror::Error;

use crate::command::{Command, LookTarget, Phrase};
use crate::tokenizer::Tokenizer;
use crate::vocabulary::{Verb, VocabularyRegistry};

/// A parse error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing was typed.
    #[error("empty input")]
    EmptyInput,
    /// The first word is neither a verb nor a direction.
    #[error("unknown verb \"{0}\"")]
    UnknownVerb(String),
    /// `go` without a direction.
    #[error("missing direction")]
    MissingDirection,
    /// `go` followed by a word that is not a direction.
    #[error("unknown direction \"{0}\"")]
    UnknownDirection(String),
}

static STANDARD: LazyLock<CommandParser> =
    LazyLock::new(|| CommandParser::new(VocabularyRegistry::standard()));

/// Parses a line with the standard vocabulary.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line is empty, starts with an unknown
/// word, or has a bad direction after `go`.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    STANDARD.parse(input)
}

/// Command parser over a vocabulary.
#[derive(Clone, Debug)]
pub struct CommandParser {
    vocabulary: VocabularyRegistry,
}

impl CommandParser {
    /// Creates a new parser with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: VocabularyRegistry) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Parses a line of player input.
    ///
    /// A bare direction word is a `go`. A verb that needs an item but has
    /// none yields an empty phrase, which the engine reports.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(&self, input: &str) -> Result<Command, ParseError> {
        let mut tokens = Tokenizer::tokenize(input);
        if tokens.is_empty() {
            // A line of pure punctuation such as "?" is still one word
            let raw = input.trim();
            if raw.is_empty() {
                return Err(ParseError::EmptyInput);
            }
            tokens.push(raw.to_string());
        }

        let (first, rest) = tokens.split_first().ok_or(ParseError::EmptyInput)?;

        if let Some(direction) = self.vocabulary.lookup_direction(first) {
            return Ok(Command::Go(direction));
        }

        let verb = self
            .vocabulary
            .lookup_verb(first)
            .ok_or_else(|| ParseError::UnknownVerb(first.clone()))?;

        let command = match verb {
            Verb::Go => {
                let word = self
                    .phrase_words(rest)
                    .next()
                    .ok_or(ParseError::MissingDirection)?;
                let direction = self
                    .vocabulary
                    .lookup_direction(word)
                    .ok_or_else(|| ParseError::UnknownDirection(word.to_string()))?;
                Command::Go(direction)
            }
            Verb::Look => self.look_target(rest),
            Verb::Take => {
                // "pick up the sword"
                let rest = match rest.split_first() {
                    Some((up, tail)) if first == "pick" && up == "up" => tail,
                    _ => rest,
                };
                Command::Take(self.phrase(rest))
            }
            Verb::Drop => Command::Drop(self.phrase(rest)),
            Verb::Eat => Command::Eat(self.phrase(rest)),
            Verb::Buy => Command::Buy(self.phrase(rest)),
            Verb::Sell => Command::Sell(self.phrase(rest)),
            Verb::List => Command::List,
            Verb::Inventory => Command::Inventory,
            Verb::Exits => Command::ToggleExits,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };

        Ok(command)
    }

    fn look_target(&self, rest: &[String]) -> Command {
        let phrase = self.phrase(rest);
        let target = match phrase.tokens() {
            [] => LookTarget::Room,
            [word] => match self.vocabulary.lookup_direction(word) {
                Some(direction) => LookTarget::Direction(direction),
                None => LookTarget::Item(phrase),
            },
            _ => LookTarget::Item(phrase),
        };
        Command::Look(target)
    }

    fn phrase(&self, words: &[String]) -> Phrase {
        Phrase::new(self.phrase_words(words))
    }

    fn phrase_words<'a>(&'a self, words: &'a [String]) -> impl Iterator<Item = &'a str> {
        words
            .iter()
            .map(String::as_str)
            .filter(|w| !self.vocabulary.is_filler(w))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(VocabularyRegistry::standard())
    }
}
