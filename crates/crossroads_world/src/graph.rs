//! The world graph with persistent ground lists.
//!
//! The `WorldGraph` pairs the immutable room arena with one persistent
//! vector of ground items per room. Clone is O(1) due to structural sharing,
//! and all mutation methods return a new `WorldGraph`, so a failed operation
//! leaves the original untouched.

use std::collections::HashMap;
use std::sync::Arc;

use crossroads_foundation::{Direction, Error, ItemId, Result, RoomId};

use crate::item::index_u32;
use crate::room::Room;

/// Rooms, exits, shops, and the items lying in each room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGraph {
    /// Room arena, indexed by `RoomId`.
    rooms: Arc<[Room]>,
    /// Room name -> id.
    names: Arc<HashMap<String, RoomId>>,
    /// Ground items per room, parallel to `rooms`.
    ground: im::Vector<im::Vector<ItemId>>,
}

impl WorldGraph {
    /// Creates a graph from rooms and their initial ground lists.
    ///
    /// `ground` must be parallel to `rooms`; the builder guarantees this
    /// along with referential integrity of every id.
    pub(crate) fn from_parts(rooms: Vec<Room>, ground: Vec<Vec<ItemId>>) -> Self {
        debug_assert_eq!(rooms.len(), ground.len());
        let names = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (room.name.clone(), RoomId::new(index_u32(i))))
            .collect();
        Self {
            rooms: rooms.into(),
            names: Arc::new(names),
            ground: ground.into_iter().map(im::Vector::from).collect(),
        }
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this graph.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.slot())
            .ok_or_else(|| Error::room_not_found(id))
    }

    /// Finds a room id by its name.
    ///
    /// # Errors
    ///
    /// Returns an error if no room carries the name.
    pub fn room_by_name(&self, name: &str) -> Result<RoomId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::room_name_not_found(name))
    }

    /// Returns the room reached by leaving `id` in `direction`.
    ///
    /// # Errors
    ///
    /// Returns a `NoExit` error if the room has no exit that way, or a
    /// not-found error for an unknown room.
    pub fn exit(&self, id: RoomId, direction: Direction) -> Result<RoomId> {
        self.room(id)?
            .exit(direction)
            .ok_or_else(|| Error::no_exit(id, direction))
    }

    /// Items lying on the ground in a room, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this graph.
    pub fn ground_items(&self, id: RoomId) -> Result<&im::Vector<ItemId>> {
        self.ground
            .get(id.slot())
            .ok_or_else(|| Error::room_not_found(id))
    }

    /// Items sold in a room, or `None` if the room is not a shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this graph.
    pub fn shop_items(&self, id: RoomId) -> Result<Option<&[ItemId]>> {
        Ok(self.room(id)?.shop.as_deref())
    }

    /// Returns a new graph with `item` appended to the room's ground list.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this graph.
    pub fn add_ground_item(&self, id: RoomId, item: ItemId) -> Result<Self> {
        let mut items = self.ground_items(id)?.clone();
        items.push_back(item);
        Ok(self.with_ground(id, items))
    }

    /// Returns a new graph with one occurrence of `item` removed from the
    /// room's ground list.
    ///
    /// Only the first matching occurrence is removed.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotOnGround` if the item is not lying in the room.
    pub fn remove_ground_item(&self, id: RoomId, item: ItemId) -> Result<Self> {
        let mut items = self.ground_items(id)?.clone();
        let index = items
            .index_of(&item)
            .ok_or_else(|| Error::item_not_on_ground(id, item))?;
        items.remove(index);
        Ok(self.with_ground(id, items))
    }

    /// Counts occurrences of `item` on the ground of a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this graph.
    pub fn ground_count(&self, id: RoomId, item: ItemId) -> Result<usize> {
        Ok(self.ground_items(id)?.iter().filter(|&&i| i == item).count())
    }

    /// Iterates over all room ids.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(|i| RoomId::new(index_u32(i)))
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn with_ground(&self, id: RoomId, items: im::Vector<ItemId>) -> Self {
        Self {
            rooms: Arc::clone(&self.rooms),
            names: Arc::clone(&self.names),
            ground: self.ground.update(id.slot(), items),
        }
    }
}
