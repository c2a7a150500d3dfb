//! Error types for the Crossroads system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! These are data-integrity errors: a well-formed world never produces them
//! at play time, and when world validation reports one it is fatal.

use std::fmt;

use thiserror::Error;

use crate::direction::Direction;
use crate::id::{ItemId, RoomId};

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Crossroads operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates an error for a room name with no record.
    #[must_use]
    pub fn room_name_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomNameNotFound(name.into()))
    }

    /// Creates an error for an item name with no template.
    #[must_use]
    pub fn item_name_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNameNotFound(name.into()))
    }

    /// Creates an item-not-on-ground error.
    #[must_use]
    pub fn item_not_on_ground(room: RoomId, item: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotOnGround { room, item })
    }

    /// Creates a no-exit error.
    #[must_use]
    pub fn no_exit(room: RoomId, direction: Direction) -> Self {
        Self::new(ErrorKind::NoExit { room, direction })
    }

    /// Creates a world definition error.
    #[must_use]
    pub fn definition(error: DefinitionError) -> Self {
        Self::new(ErrorKind::Definition(error))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error signals a missing exit.
    #[must_use]
    pub fn is_no_exit(&self) -> bool {
        matches!(self.kind, ErrorKind::NoExit { .. })
    }
}

impl From<DefinitionError> for Error {
    fn from(error: DefinitionError) -> Self {
        Self::definition(error)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Room id has no record.
    #[error("room not found: {0:?}")]
    RoomNotFound(RoomId),

    /// Item id has no template.
    #[error("item not found: {0:?}")]
    ItemNotFound(ItemId),

    /// No room carries the given name.
    #[error("no room named \"{0}\"")]
    RoomNameNotFound(String),

    /// No item template carries the given name.
    #[error("no item named \"{0}\"")]
    ItemNameNotFound(String),

    /// The item does not lie on the ground of the room.
    #[error("{item:?} is not on the ground in {room:?}")]
    ItemNotOnGround {
        /// The room that was searched.
        room: RoomId,
        /// The item that was missing.
        item: ItemId,
    },

    /// The room has no exit in that direction.
    #[error("no exit {direction} from {room:?}")]
    NoExit {
        /// The room that was queried.
        room: RoomId,
        /// The direction without an exit.
        direction: Direction,
    },

    /// World definition failed validation.
    #[error("invalid world definition: {0}")]
    Definition(DefinitionError),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Referential-integrity and shape violations found while building a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two rooms share a name.
    #[error("duplicate room \"{0}\"")]
    DuplicateRoom(String),

    /// Two items share a name.
    #[error("duplicate item \"{0}\"")]
    DuplicateItem(String),

    /// An exit points at a room that does not exist.
    #[error("room \"{room}\" exit {direction} leads to unknown room \"{target}\"")]
    UnknownRoom {
        /// Room declaring the exit.
        room: String,
        /// Direction of the exit.
        direction: Direction,
        /// The missing target name.
        target: String,
    },

    /// A ground or shop list names an item that does not exist.
    #[error("room \"{room}\" lists unknown item \"{item}\"")]
    UnknownItem {
        /// Room declaring the list.
        room: String,
        /// The missing item name.
        item: String,
    },

    /// An item has no recognition words.
    #[error("item \"{0}\" has no recognition words")]
    EmptyRecognitionWords(String),

    /// A recognition word is empty, has whitespace, or is not lowercase.
    #[error("item \"{item}\" has invalid recognition word \"{word}\"")]
    InvalidRecognitionWord {
        /// Item declaring the word.
        item: String,
        /// The offending word.
        word: String,
    },

    /// The world declares no rooms.
    #[error("world has no rooms")]
    NoRooms,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or data set name.
    pub source: Option<String>,
    /// Operation trail leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
