//! Room records.

use std::collections::BTreeMap;

use crossroads_foundation::{Direction, ItemId, RoomId};

/// Static part of a room: everything except its ground items.
///
/// Ground items change as the player takes and drops things, so they live in
/// the persistent side of [`WorldGraph`](crate::WorldGraph).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// Reference name, also shown as the room title.
    pub name: String,
    /// Prose description.
    pub description: String,
    /// Exits keyed by direction. Iteration follows [`Direction::ALL`] order.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items for sale, if this room is a shop.
    pub shop: Option<Vec<ItemId>>,
}

impl Room {
    /// Returns the target of the exit in `direction`, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Returns true if this room sells items.
    #[must_use]
    pub fn is_shop(&self) -> bool {
        self.shop.is_some()
    }

    /// Directions with an exit, in listing order.
    pub fn exit_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.exits.keys().copied()
    }
}
