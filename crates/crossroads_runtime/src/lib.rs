//! REPL, CLI, and text presentation for Crossroads.
//!
//! This crate provides:
//! - [`Repl`] - the interactive game loop over a [`LineEditor`]
//! - [`GameConfig`] and [`Arguments`] - configuration and the command line
//! - [`load_world`] - the built-in town or a JSON world file
//! - [`format`] - room views, events, and refusals as player-facing text
//!
//! ```text
//!   LineEditor ──line──▶ CommandParser ──Command──▶ Game::apply
//!        ▲                                              │
//!        └──────── Repl ◀── format ◀── Event/ActionError┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod help;
pub mod loader;
pub mod logging;
pub mod repl;

pub use config::{Arguments, GameConfig, WorldSource};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use error::{Result, RuntimeError};
pub use loader::{LoadedWorld, load_world, parse_definition, read_definition};
pub use repl::Repl;
