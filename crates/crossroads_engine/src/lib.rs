//! Player state and actions for Crossroads.
//!
//! This crate provides:
//! - [`PlayerState`] / [`GameState`] - Persistent game state
//! - [`execute`] / [`Game`] - Command execution
//! - [`action`] - One function per player action
//! - [`RoomView`] - Text-ready room rendering
//! - [`ActionError`] - Refused actions
//!
//! The engine never prints. Every successful command yields an [`Event`]
//! for the presentation layer to describe.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod error;
pub mod event;
pub mod game;
pub mod render;
pub mod state;

pub use error::{ActionError, Pool};
pub use event::{Event, Outcome};
pub use game::{Game, execute};
pub use render::{ExitListing, RoomView, render_room};
pub use state::{GameState, PlayerState};
