//! World construction and validation.

use std::collections::{BTreeMap, HashMap};

use crossroads_foundation::{DefinitionError, ItemId, Result, RoomId};
use tracing::debug;

use crate::definition::{ItemDefinition, RoomDefinition, WorldDefinition};
use crate::graph::WorldGraph;
use crate::item::{IGNORED_PUNCTUATION, ItemCatalog, ItemTemplate, index_u32};
use crate::room::Room;

/// Collects item and room definitions and validates them into a world.
///
/// Validation checks, in order:
/// 1. item names are unique and every item has valid recognition words
/// 2. the world has at least one room and room names are unique
/// 3. every exit target names a room
/// 4. every ground and shop entry names an item
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    definition: WorldDefinition,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with an existing definition.
    #[must_use]
    pub fn from_definition(definition: WorldDefinition) -> Self {
        Self { definition }
    }

    /// Adds an item definition.
    #[must_use]
    pub fn item(mut self, item: ItemDefinition) -> Self {
        self.definition.items.push(item);
        self
    }

    /// Adds a room definition.
    #[must_use]
    pub fn room(mut self, room: RoomDefinition) -> Self {
        self.definition.rooms.push(room);
        self
    }

    /// Returns the collected definition.
    #[must_use]
    pub fn into_definition(self) -> WorldDefinition {
        self.definition
    }

    /// Validates the definitions and builds the world.
    ///
    /// # Errors
    ///
    /// Returns a `Definition` error for the first violation found.
    pub fn build(self) -> Result<(WorldGraph, ItemCatalog)> {
        let WorldDefinition { items, rooms } = self.definition;

        let (templates, item_ids) = build_items(items)?;
        let room_ids = index_rooms(&rooms)?;

        let mut arena = Vec::with_capacity(rooms.len());
        let mut ground = Vec::with_capacity(rooms.len());
        for def in rooms {
            let exits: BTreeMap<_, _> = def
                .exits
                .iter()
                .map(|(&direction, target)| {
                    room_ids
                        .get(target.as_str())
                        .map(|&id| (direction, id))
                        .ok_or_else(|| DefinitionError::UnknownRoom {
                            room: def.name.clone(),
                            direction,
                            target: target.clone(),
                        })
                })
                .collect::<std::result::Result<_, DefinitionError>>()?;

            let ground_items = resolve_items(&def.name, &def.ground, &item_ids)?;
            let shop = def
                .shop
                .as_ref()
                .map(|names| resolve_items(&def.name, names, &item_ids))
                .transpose()?;

            arena.push(Room {
                name: def.name,
                description: def.description,
                exits,
                shop,
            });
            ground.push(ground_items);
        }

        debug!(
            rooms = arena.len(),
            items = templates.len(),
            "world definition validated"
        );

        Ok((
            WorldGraph::from_parts(arena, ground),
            ItemCatalog::from_templates(templates),
        ))
    }
}

fn build_items(
    items: Vec<ItemDefinition>,
) -> std::result::Result<(Vec<ItemTemplate>, HashMap<String, ItemId>), DefinitionError> {
    let mut ids = HashMap::with_capacity(items.len());
    let mut templates = Vec::with_capacity(items.len());

    for (i, def) in items.into_iter().enumerate() {
        if ids.contains_key(&def.name) {
            return Err(DefinitionError::DuplicateItem(def.name));
        }
        if def.words.is_empty() {
            return Err(DefinitionError::EmptyRecognitionWords(def.name));
        }
        if let Some(bad) = def.words.iter().find(|w| !is_valid_word(w)) {
            return Err(DefinitionError::InvalidRecognitionWord {
                item: def.name.clone(),
                word: bad.clone(),
            });
        }

        ids.insert(def.name.clone(), ItemId::new(index_u32(i)));
        templates.push(ItemTemplate {
            name: def.name,
            ground_description: def.ground_description,
            short_description: def.short_description,
            long_description: def.long_description,
            takeable: def.takeable,
            edible: def.edible,
            words: def.words.into_iter().collect(),
        });
    }

    Ok((templates, ids))
}

fn index_rooms(
    rooms: &[RoomDefinition],
) -> std::result::Result<HashMap<String, RoomId>, DefinitionError> {
    if rooms.is_empty() {
        return Err(DefinitionError::NoRooms);
    }

    let mut ids = HashMap::with_capacity(rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        if ids
            .insert(room.name.clone(), RoomId::new(index_u32(i)))
            .is_some()
        {
            return Err(DefinitionError::DuplicateRoom(room.name.clone()));
        }
    }
    Ok(ids)
}

fn resolve_items(
    room: &str,
    names: &[String],
    ids: &HashMap<String, ItemId>,
) -> std::result::Result<Vec<ItemId>, DefinitionError> {
    names
        .iter()
        .map(|name| {
            ids.get(name)
                .copied()
                .ok_or_else(|| DefinitionError::UnknownItem {
                    room: room.to_string(),
                    item: name.clone(),
                })
        })
        .collect()
}

/// Recognition words are non-empty lowercase tokens without whitespace.
fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && !word.chars().any(char::is_whitespace)
        && !word.chars().any(char::is_uppercase)
        && !word.contains(IGNORED_PUNCTUATION)
}
