//! Room views.
//!
//! A [`RoomView`] is everything needed to print a room, already resolved to
//! text. Layout and wrapping are left to the presentation layer.

use crossroads_foundation::{Direction, Result, RoomId};
use crossroads_world::{ItemCatalog, WorldGraph};

/// How a room's exits are listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitListing {
    /// Each exit with the name of the room it leads to.
    Full(Vec<(Direction, String)>),
    /// Only the directions.
    Compact(Vec<Direction>),
}

impl ExitListing {
    /// Returns true if the room has no exits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ExitListing::Full(exits) => exits.is_empty(),
            ExitListing::Compact(directions) => directions.is_empty(),
        }
    }
}

/// A room resolved to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomView {
    /// Room name.
    pub title: String,
    /// Prose description.
    pub description: String,
    /// Ground descriptions of items lying here, in ground order.
    pub ground: Vec<String>,
    /// Exits in direction order.
    pub exits: ExitListing,
}

/// Builds the view of a room.
///
/// # Errors
///
/// Returns an error if the room, an exit target, or a ground item is not
/// part of the world.
pub fn render_room(
    world: &WorldGraph,
    catalog: &ItemCatalog,
    room: RoomId,
    full_exits: bool,
) -> Result<RoomView> {
    let record = world.room(room)?;

    let ground = world
        .ground_items(room)?
        .iter()
        .map(|&item| Ok(catalog.lookup(item)?.ground_description.clone()))
        .collect::<Result<Vec<_>>>()?;

    let exits = if full_exits {
        ExitListing::Full(
            record
                .exits
                .iter()
                .map(|(&direction, &target)| Ok((direction, world.room(target)?.name.clone())))
                .collect::<Result<Vec<_>>>()?,
        )
    } else {
        ExitListing::Compact(record.exit_directions().collect())
    };

    Ok(RoomView {
        title: record.name.clone(),
        description: record.description.clone(),
        ground,
        exits,
    })
}
