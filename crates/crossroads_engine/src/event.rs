//! What a successful command produced.

use crossroads_foundation::{Direction, ItemId};

use crate::render::RoomView;
use crate::state::GameState;

/// The observable result of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The player walked into a new room.
    Moved {
        /// Direction taken.
        direction: Direction,
        /// The room arrived in.
        view: RoomView,
    },
    /// The player looked around the current room.
    Looked(RoomView),
    /// The player looked at an item.
    Examined {
        /// The item looked at.
        item: ItemId,
        /// Its long description.
        description: String,
    },
    /// The player looked through an exit.
    Peeked {
        /// Direction looked.
        direction: Direction,
        /// Name of the room that way.
        room: String,
    },
    /// An item moved from the ground to the inventory.
    Took(ItemId),
    /// An item moved from the inventory to the ground.
    Dropped(ItemId),
    /// An item left the inventory by being eaten.
    Ate(ItemId),
    /// An item was added to the inventory from the shop.
    Bought(ItemId),
    /// An item left the inventory by being sold.
    Sold(ItemId),
    /// The current shop's wares, in shop order.
    ShopListing(Vec<ItemId>),
    /// The inventory grouped by item, in first-acquired order.
    Inventory(Vec<(ItemId, usize)>),
    /// The exit display mode changed.
    ExitsToggled {
        /// True if exits are now listed with destinations.
        full: bool,
    },
    /// The player asked for help.
    Help,
    /// The player asked to leave.
    Quit,
}

/// A new state paired with the event that produced it.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// The state after the command.
    pub state: GameState,
    /// What happened.
    pub event: Event,
}

impl Outcome {
    /// Creates an outcome.
    #[must_use]
    pub fn new(state: GameState, event: Event) -> Self {
        Self { state, event }
    }
}
