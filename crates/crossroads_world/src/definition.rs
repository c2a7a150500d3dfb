//! Name-keyed world definitions.
//!
//! A [`WorldDefinition`] is the source form of a world: rooms and items refer
//! to each other by name. [`WorldDefinition::build`] validates it once and
//! produces the id-keyed [`WorldGraph`] and [`ItemCatalog`].

use std::collections::BTreeMap;

use crossroads_foundation::{Direction, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::WorldBuilder;
use crate::graph::WorldGraph;
use crate::item::ItemCatalog;

/// Source form of an item template.
///
/// `takeable` defaults to true and `edible` to false when omitted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemDefinition {
    /// Reference name.
    pub name: String,
    /// Sentence shown while the item lies on the ground.
    pub ground_description: String,
    /// Short noun phrase.
    pub short_description: String,
    /// Text shown when looked at.
    pub long_description: String,
    /// Whether the item can be picked up.
    pub takeable: bool,
    /// Whether the item can be eaten.
    pub edible: bool,
    /// Recognition words.
    pub words: Vec<String>,
}

impl Default for ItemDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            ground_description: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            takeable: true,
            edible: false,
            words: Vec::new(),
        }
    }
}

impl ItemDefinition {
    /// Creates an item with the given name and recognition words.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the ground description.
    #[must_use]
    pub fn with_ground_description(mut self, text: impl Into<String>) -> Self {
        self.ground_description = text.into();
        self
    }

    /// Sets the short description.
    #[must_use]
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Marks the item as impossible to pick up.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Marks the item as edible.
    #[must_use]
    pub fn edible(mut self) -> Self {
        self.edible = true;
        self
    }
}

/// Source form of a room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomDefinition {
    /// Reference name and title.
    pub name: String,
    /// Prose description.
    pub description: String,
    /// Exit targets by room name.
    pub exits: BTreeMap<Direction, String>,
    /// Names of items initially on the ground, duplicates allowed.
    pub ground: Vec<String>,
    /// Names of items sold here, if this is a shop.
    pub shop: Option<Vec<String>>,
}

impl RoomDefinition {
    /// Creates a room with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Adds an item to the initial ground list.
    #[must_use]
    pub fn with_ground(mut self, item: impl Into<String>) -> Self {
        self.ground.push(item.into());
        self
    }

    /// Adds an item to the shop list, making the room a shop.
    #[must_use]
    pub fn with_shop_item(mut self, item: impl Into<String>) -> Self {
        self.shop.get_or_insert_with(Vec::new).push(item.into());
        self
    }
}

/// Complete name-keyed world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldDefinition {
    /// Item templates.
    pub items: Vec<ItemDefinition>,
    /// Rooms.
    pub rooms: Vec<RoomDefinition>,
}

impl WorldDefinition {
    /// Validates the definition and builds the world.
    ///
    /// # Errors
    ///
    /// Returns a `Definition` error describing the first referential
    /// integrity or shape violation found.
    pub fn build(&self) -> Result<(WorldGraph, ItemCatalog)> {
        WorldBuilder::from_definition(self.clone()).build()
    }
}
