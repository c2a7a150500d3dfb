//! World graph and item catalog for Crossroads.
//!
//! This crate provides:
//! - [`WorldGraph`] - Rooms, exits, shops, and the mutable ground lists
//! - [`ItemCatalog`] - Immutable item templates keyed by [`ItemId`]
//! - [`WorldDefinition`] / [`WorldBuilder`] - Name-keyed source form, validated once
//! - [`town`] - The built-in town
//!
//! [`ItemId`]: crossroads_foundation::ItemId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod definition;
pub mod graph;
pub mod item;
pub mod room;
pub mod town;

pub use builder::WorldBuilder;
pub use definition::{ItemDefinition, RoomDefinition, WorldDefinition};
pub use graph::WorldGraph;
pub use item::{IGNORED_PUNCTUATION, ItemCatalog, ItemTemplate};
pub use room::Room;
pub use town::town;
