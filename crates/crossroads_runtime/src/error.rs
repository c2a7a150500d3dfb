//! Runtime errors.
//!
//! These cover startup and terminal failures. Refused player actions are
//! not errors at this layer; the REPL prints them and keeps going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures that stop the game from starting or running.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The world or game state is invalid.
    #[error(transparent)]
    World(#[from] crossroads_foundation::Error),

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file.
        path: PathBuf,
        /// The underlying failure.
        source: io::Error,
    },

    /// A world file is not a valid world definition.
    #[error("invalid world file {}: {source}", path.display())]
    Decode {
        /// The file.
        path: PathBuf,
        /// The underlying failure.
        source: serde_json::Error,
    },

    /// The line editor failed.
    #[error("line editor: {0}")]
    Editor(String),

    /// Writing output failed.
    #[error("output: {0}")]
    Io(#[from] io::Error),
}
