//! Player and game state.
//!
//! Both types are persistent values: clone is O(1) and every change
//! produces a new value, so an action that fails partway leaves the state
//! it started from untouched.

use crossroads_foundation::{Error, ItemId, Result, RoomId};
use crossroads_world::WorldGraph;

/// Where the player is, what they carry, and how exits are listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    room: RoomId,
    inventory: im::Vector<ItemId>,
    full_exits: bool,
}

impl PlayerState {
    /// Creates a player in `room` carrying `inventory`, with full exit
    /// listings.
    #[must_use]
    pub fn new(room: RoomId, inventory: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            room,
            inventory: inventory.into_iter().collect(),
            full_exits: true,
        }
    }

    /// The current room.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Carried items in acquisition order, duplicates allowed.
    #[must_use]
    pub fn inventory(&self) -> &im::Vector<ItemId> {
        &self.inventory
    }

    /// Returns true if exits are listed with their destinations.
    #[must_use]
    pub fn full_exits(&self) -> bool {
        self.full_exits
    }

    /// Counts how many of `item` the player carries.
    #[must_use]
    pub fn count(&self, item: ItemId) -> usize {
        self.inventory.iter().filter(|&&i| i == item).count()
    }

    /// The inventory grouped by item, in first-acquired order.
    #[must_use]
    pub fn grouped_inventory(&self) -> Vec<(ItemId, usize)> {
        let mut groups: Vec<(ItemId, usize)> = Vec::new();
        for &item in &self.inventory {
            match groups.iter_mut().find(|(id, _)| *id == item) {
                Some((_, count)) => *count += 1,
                None => groups.push((item, 1)),
            }
        }
        groups
    }

    /// Returns a player standing in `room`.
    #[must_use]
    pub fn moved_to(&self, room: RoomId) -> Self {
        Self {
            room,
            ..self.clone()
        }
    }

    /// Returns a player carrying one more `item`, appended last.
    #[must_use]
    pub fn with_item(&self, item: ItemId) -> Self {
        let mut inventory = self.inventory.clone();
        inventory.push_back(item);
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Returns a player carrying one fewer `item`.
    ///
    /// The first occurrence is removed.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the player does not carry the item.
    pub fn without_item(&self, item: ItemId) -> Result<Self> {
        let mut inventory = self.inventory.clone();
        let index = inventory
            .index_of(&item)
            .ok_or_else(|| Error::internal(format!("{item} is not in the inventory")))?;
        inventory.remove(index);
        Ok(Self {
            inventory,
            ..self.clone()
        })
    }

    /// Returns a player with the exit display mode flipped.
    #[must_use]
    pub fn with_exits_toggled(&self) -> Self {
        Self {
            full_exits: !self.full_exits,
            ..self.clone()
        }
    }
}

/// The whole mutable game: the world's ground lists and the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    world: WorldGraph,
    player: PlayerState,
}

impl GameState {
    /// Starts a game in `start` with the given inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not a room of `world`.
    pub fn new(
        world: WorldGraph,
        start: RoomId,
        inventory: impl IntoIterator<Item = ItemId>,
    ) -> Result<Self> {
        world.room(start)?;
        Ok(Self {
            world,
            player: PlayerState::new(start, inventory),
        })
    }

    /// Assembles a state from parts.
    #[must_use]
    pub fn from_parts(world: WorldGraph, player: PlayerState) -> Self {
        Self { world, player }
    }

    /// The world graph.
    #[must_use]
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The current room.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.player.room
    }

    /// Ground items of the current room followed by the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current room is not in the world.
    pub fn nearby(&self) -> Result<impl Iterator<Item = ItemId> + '_> {
        let ground = self.world.ground_items(self.player.room)?;
        Ok(ground.iter().chain(self.player.inventory.iter()).copied())
    }

    /// Returns a state with the player replaced.
    #[must_use]
    pub fn with_player(&self, player: PlayerState) -> Self {
        Self {
            world: self.world.clone(),
            player,
        }
    }
}
