//! Core types for Crossroads.
//!
//! This crate provides:
//! - [`RoomId`] and [`ItemId`] - Opaque arena identifiers
//! - [`Direction`] - The six exit directions
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod id;

pub use direction::Direction;
pub use error::{DefinitionError, Error, ErrorContext, ErrorKind, Result};
pub use id::{ItemId, RoomId};
