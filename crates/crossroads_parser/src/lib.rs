//! Command parsing and item resolution for Crossroads.
//!
//! This crate turns player input like "take lock picks" or "go north" into
//! [`Command`] values, and resolves the item words in a command against a
//! pool of candidate items.
//!
//! # Architecture
//!
//! ```text
//! "Pick up the lock picks!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["pick", "up", "the", "lock", "picks"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Take, fillers dropped
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Take(Phrase["lock", "picks"])
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLVER        │  → first item in the pool sharing a word
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`vocabulary`] - Verbs, directions, and filler words
//! - [`command`] - Parsed command representation
//! - [`parser`] - Parser pipeline
//! - [`resolver`] - Item phrase resolution, first match wins

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod resolver;
pub mod tokenizer;
pub mod vocabulary;

pub use command::{Command, LookTarget, Phrase};
pub use parser::{CommandParser, ParseError, parse};
pub use resolver::{CommandResolver, Resolution};
pub use tokenizer::Tokenizer;
pub use vocabulary::{Verb, VocabularyRegistry};
