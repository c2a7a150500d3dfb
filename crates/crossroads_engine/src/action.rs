//! Player actions.
//!
//! Each action takes the current state by reference and either returns an
//! [`Outcome`] holding a new state, or an [`ActionError`] with the input
//! state untouched. Phrases are resolved with first-match-wins against the
//! pool that fits the verb.

use crossroads_foundation::{Direction, ItemId, RoomId};
use crossroads_parser::{CommandResolver, LookTarget, Phrase, Verb};
use crossroads_world::ItemCatalog;

use crate::error::{ActionError, Pool};
use crate::event::{Event, Outcome};
use crate::render::render_room;
use crate::state::GameState;

/// Result type for actions.
pub type ActionResult = Result<Outcome, ActionError>;

/// Moves through the exit in `direction`.
///
/// # Errors
///
/// Returns [`ActionError::NoExit`] if the room has no exit that way.
pub fn go(catalog: &ItemCatalog, state: &GameState, direction: Direction) -> ActionResult {
    let target = exit(state, direction)?;
    let player = state.player().moved_to(target);
    let view = render_room(state.world(), catalog, target, player.full_exits())?;
    Ok(Outcome::new(
        state.with_player(player),
        Event::Moved { direction, view },
    ))
}

/// Looks at the room, through an exit, or at a nearby item.
///
/// Items are searched on the ground first, then in the inventory.
///
/// # Errors
///
/// Returns [`ActionError::NoExit`] for a direction without an exit, or
/// [`ActionError::ItemNotFound`] if nothing nearby matches.
pub fn look(catalog: &ItemCatalog, state: &GameState, target: &LookTarget) -> ActionResult {
    let event = match target {
        LookTarget::Room => Event::Looked(render_room(
            state.world(),
            catalog,
            state.room(),
            state.player().full_exits(),
        )?),
        LookTarget::Direction(direction) => {
            let target = exit(state, *direction)?;
            Event::Peeked {
                direction: *direction,
                room: state.world().room(target)?.name.clone(),
            }
        }
        LookTarget::Item(phrase) => {
            require_phrase(Verb::Look, phrase)?;
            let item = resolve(catalog, phrase, state.nearby()?, Pool::Nearby)?;
            Event::Examined {
                item,
                description: catalog.lookup(item)?.long_description.clone(),
            }
        }
    };
    Ok(Outcome::new(state.clone(), event))
}

/// Picks up an item from the ground.
///
/// # Errors
///
/// Returns [`ActionError::ItemNotFound`] if nothing on the ground matches,
/// or [`ActionError::NotTakeable`] for fixed items.
pub fn take(catalog: &ItemCatalog, state: &GameState, phrase: &Phrase) -> ActionResult {
    require_phrase(Verb::Take, phrase)?;
    let room = state.room();
    let ground = state.world().ground_items(room)?;
    let item = resolve(catalog, phrase, ground.iter().copied(), Pool::Ground)?;
    if !catalog.is_takeable(item)? {
        return Err(ActionError::NotTakeable(item));
    }

    let world = state.world().remove_ground_item(room, item)?;
    let player = state.player().with_item(item);
    Ok(Outcome::new(
        GameState::from_parts(world, player),
        Event::Took(item),
    ))
}

/// Puts an inventory item on the ground of the current room.
///
/// # Errors
///
/// Returns [`ActionError::ItemNotFound`] if the player carries no match.
pub fn drop(catalog: &ItemCatalog, state: &GameState, phrase: &Phrase) -> ActionResult {
    require_phrase(Verb::Drop, phrase)?;
    let item = resolve_carried(catalog, state, phrase)?;

    let player = state.player().without_item(item)?;
    let world = state.world().add_ground_item(state.room(), item)?;
    Ok(Outcome::new(
        GameState::from_parts(world, player),
        Event::Dropped(item),
    ))
}

/// Eats an inventory item.
///
/// # Errors
///
/// Returns [`ActionError::ItemNotFound`] if the player carries no match, or
/// [`ActionError::NotEdible`] if the item cannot be eaten.
pub fn eat(catalog: &ItemCatalog, state: &GameState, phrase: &Phrase) -> ActionResult {
    require_phrase(Verb::Eat, phrase)?;
    let item = resolve_carried(catalog, state, phrase)?;
    if !catalog.is_edible(item)? {
        return Err(ActionError::NotEdible(item));
    }

    let player = state.player().without_item(item)?;
    Ok(Outcome::new(state.with_player(player), Event::Ate(item)))
}

/// Buys an item from the current shop. Shops never run out.
///
/// # Errors
///
/// Returns [`ActionError::NotAShop`] outside shops,
/// [`ActionError::ItemNotFound`] if the shop sells no match, or
/// [`ActionError::NotTakeable`] for items that could never be carried.
pub fn buy(catalog: &ItemCatalog, state: &GameState, phrase: &Phrase) -> ActionResult {
    let wares = state
        .world()
        .shop_items(state.room())?
        .ok_or(ActionError::NotAShop)?;
    require_phrase(Verb::Buy, phrase)?;
    let item = resolve(catalog, phrase, wares.iter().copied(), Pool::Shop)?;
    if !catalog.is_takeable(item)? {
        return Err(ActionError::NotTakeable(item));
    }

    let player = state.player().with_item(item);
    Ok(Outcome::new(state.with_player(player), Event::Bought(item)))
}

/// Sells an inventory item. Works in any room.
///
/// # Errors
///
/// Returns [`ActionError::ItemNotFound`] if the player carries no match.
pub fn sell(catalog: &ItemCatalog, state: &GameState, phrase: &Phrase) -> ActionResult {
    require_phrase(Verb::Sell, phrase)?;
    let item = resolve_carried(catalog, state, phrase)?;

    let player = state.player().without_item(item)?;
    Ok(Outcome::new(state.with_player(player), Event::Sold(item)))
}

/// Lists the current shop's wares.
///
/// # Errors
///
/// Returns [`ActionError::NotAShop`] outside shops.
pub fn list(state: &GameState) -> ActionResult {
    let wares = state
        .world()
        .shop_items(state.room())?
        .ok_or(ActionError::NotAShop)?;
    Ok(Outcome::new(
        state.clone(),
        Event::ShopListing(wares.to_vec()),
    ))
}

/// Reports the inventory grouped by item.
#[must_use]
pub fn inventory(state: &GameState) -> Outcome {
    Outcome::new(
        state.clone(),
        Event::Inventory(state.player().grouped_inventory()),
    )
}

/// Flips between full and compact exit listings.
#[must_use]
pub fn toggle_exits(state: &GameState) -> Outcome {
    let player = state.player().with_exits_toggled();
    let full = player.full_exits();
    Outcome::new(state.with_player(player), Event::ExitsToggled { full })
}

fn exit(state: &GameState, direction: Direction) -> Result<RoomId, ActionError> {
    state.world().exit(state.room(), direction).map_err(|err| {
        if err.is_no_exit() {
            ActionError::NoExit { direction }
        } else {
            ActionError::Internal(err)
        }
    })
}

fn require_phrase(verb: Verb, phrase: &Phrase) -> Result<(), ActionError> {
    if phrase.is_empty() {
        Err(ActionError::MissingObject(verb))
    } else {
        Ok(())
    }
}

fn resolve(
    catalog: &ItemCatalog,
    phrase: &Phrase,
    candidates: impl IntoIterator<Item = ItemId>,
    pool: Pool,
) -> Result<ItemId, ActionError> {
    CommandResolver::new(catalog)
        .resolve(phrase, candidates)?
        .item()
        .ok_or_else(|| ActionError::not_found(phrase, pool))
}

fn resolve_carried(
    catalog: &ItemCatalog,
    state: &GameState,
    phrase: &Phrase,
) -> Result<ItemId, ActionError> {
    let carried = state.player().inventory().iter().copied();
    resolve(catalog, phrase, carried, Pool::Inventory)
}
