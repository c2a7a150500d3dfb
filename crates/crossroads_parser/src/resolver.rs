//! Item phrase resolution.
//!
//! Maps the words a player typed to one item in a candidate pool. An item
//! matches if any token of the phrase is one of its recognition words. When
//! several distinct items match, the first one in pool order wins, so callers
//! control priority through the order of the pool they pass.

use crossroads_foundation::{ItemId, Result};
use crossroads_world::ItemCatalog;
use tracing::trace;

use crate::command::Phrase;

/// Result of phrase resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The first matching item in pool order.
    Found(ItemId),
    /// No item in the pool matches.
    NotFound,
}

impl Resolution {
    /// Returns the resolved item, if any.
    #[must_use]
    pub fn item(self) -> Option<ItemId> {
        match self {
            Resolution::Found(id) => Some(id),
            Resolution::NotFound => None,
        }
    }
}

/// Resolves item phrases against candidate pools.
#[derive(Clone, Copy, Debug)]
pub struct CommandResolver<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> CommandResolver<'a> {
    /// Creates a resolver over a catalog.
    #[must_use]
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves a phrase to the first matching item in `pool`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool holds an id the catalog does not know.
    pub fn resolve<I>(&self, phrase: &Phrase, pool: I) -> Result<Resolution>
    where
        I: IntoIterator<Item = ItemId>,
    {
        let matches = self.matches(phrase, pool)?;
        if matches.len() > 1 {
            trace!(
                %phrase,
                candidates = matches.len(),
                "ambiguous phrase, taking first match"
            );
        }
        Ok(matches
            .first()
            .copied()
            .map_or(Resolution::NotFound, Resolution::Found))
    }

    /// Returns every distinct item in `pool` matching the phrase, in pool
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool holds an id the catalog does not know.
    pub fn matches<I>(&self, phrase: &Phrase, pool: I) -> Result<Vec<ItemId>>
    where
        I: IntoIterator<Item = ItemId>,
    {
        let mut found: Vec<ItemId> = Vec::new();
        if phrase.is_empty() {
            return Ok(found);
        }

        for id in pool {
            if found.contains(&id) {
                continue;
            }
            let template = self.catalog.lookup(id)?;
            if phrase.tokens().iter().any(|t| template.recognizes(t)) {
                found.push(id);
            }
        }

        Ok(found)
    }
}
