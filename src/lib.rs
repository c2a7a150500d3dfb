//! Crossroads - a text-adventure world model and command resolver
//!
//! This crate re-exports all layers of the Crossroads system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: crossroads_runtime    - REPL, line editor, text formatting, CLI, config
//! Layer 3: crossroads_engine     - Game state, actions, events, room views
//! Layer 2: crossroads_parser     - Tokenizer, vocabulary, command parser, item resolver
//! Layer 1: crossroads_world      - Rooms, item catalog, world definitions, the town
//! Layer 0: crossroads_foundation - Core types (RoomId, ItemId, Direction, Error)
//! ```

pub use crossroads_engine as engine;
pub use crossroads_foundation as foundation;
pub use crossroads_parser as parser;
pub use crossroads_runtime as runtime;
pub use crossroads_world as world;
