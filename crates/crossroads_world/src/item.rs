//! Item templates and the item catalog.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crossroads_foundation::{Error, ItemId, Result};

/// Punctuation dropped from player input before words are matched.
///
/// A recognition word containing any of these can never be typed.
pub const IGNORED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '\'', '"'];

/// Immutable blueprint for one kind of item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTemplate {
    /// Reference name, unique across the catalog.
    pub name: String,
    /// Sentence shown in a room listing while the item lies on the ground.
    pub ground_description: String,
    /// Short noun phrase used in sentences ("You take a sword.").
    pub short_description: String,
    /// Text shown when the player looks at the item.
    pub long_description: String,
    /// Whether the item can be picked up from the ground.
    pub takeable: bool,
    /// Whether the item can be eaten.
    pub edible: bool,
    /// Lowercase words that refer to this item in commands.
    pub words: BTreeSet<String>,
}

impl ItemTemplate {
    /// Returns true if `token` is one of this item's recognition words.
    ///
    /// The token is compared case-insensitively.
    #[must_use]
    pub fn recognizes(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }
}

/// Arena of item templates with name lookup.
///
/// Clone is O(1); the catalog never changes after construction.
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    items: Arc<[ItemTemplate]>,
    names: Arc<HashMap<String, ItemId>>,
}

impl ItemCatalog {
    /// Creates a catalog from templates whose positions become their ids.
    ///
    /// Callers are expected to have validated names and words; see
    /// [`WorldBuilder`](crate::WorldBuilder).
    pub(crate) fn from_templates(items: Vec<ItemTemplate>) -> Self {
        let names = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.name.clone(), ItemId::new(index_u32(i))))
            .collect();
        Self {
            items: items.into(),
            names: Arc::new(names),
        }
    }

    /// Looks up an item template.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn lookup(&self, id: ItemId) -> Result<&ItemTemplate> {
        self.items
            .get(id.slot())
            .ok_or_else(|| Error::item_not_found(id))
    }

    /// Finds an item id by its reference name.
    ///
    /// # Errors
    ///
    /// Returns an error if no item carries the name.
    pub fn by_name(&self, name: &str) -> Result<ItemId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::item_name_not_found(name))
    }

    /// Returns whether the item can be picked up.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn is_takeable(&self, id: ItemId) -> Result<bool> {
        Ok(self.lookup(id)?.takeable)
    }

    /// Returns whether the item can be eaten.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn is_edible(&self, id: ItemId) -> Result<bool> {
        Ok(self.lookup(id)?.edible)
    }

    /// Returns the item's recognition words.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn recognition_words(&self, id: ItemId) -> Result<&BTreeSet<String>> {
        Ok(&self.lookup(id)?.words)
    }

    /// Returns the item's reference name.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn name(&self, id: ItemId) -> Result<&str> {
        Ok(&self.lookup(id)?.name)
    }

    /// Every recognition word in the catalog, sorted and deduplicated.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.words.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Iterates over all ids in the catalog.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(|i| ItemId::new(index_u32(i)))
    }

    /// Number of item templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Converts an arena position to an id index.
///
/// Arenas are built from definitions that fit comfortably in memory, so a
/// position beyond `u32::MAX` cannot occur.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn index_u32(i: usize) -> u32 {
    i as u32
}
