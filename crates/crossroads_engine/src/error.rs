//! Action failures.
//!
//! Every variant except [`ActionError::Internal`] is a normal game outcome:
//! the player asked for something the world does not allow, and the state
//! is left exactly as it was.

use std::fmt;

use crossroads_foundation::{Direction, Error, ItemId};
use crossroads_parser::{Phrase, Verb};
use thiserror::Error;

/// The candidate list an item phrase was resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Items lying in the current room.
    Ground,
    /// Items the player carries.
    Inventory,
    /// Items sold in the current room.
    Shop,
    /// Ground items followed by inventory.
    Nearby,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pool::Ground => "ground",
            Pool::Inventory => "inventory",
            Pool::Shop => "shop",
            Pool::Nearby => "nearby",
        })
    }
}

/// Why an action was refused.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The current room has no exit that way.
    #[error("no exit {direction}")]
    NoExit {
        /// Direction the player tried.
        direction: Direction,
    },

    /// No item in the pool matches the phrase.
    #[error("nothing matching \"{phrase}\" in {pool}")]
    ItemNotFound {
        /// The words the player used.
        phrase: Phrase,
        /// Where the engine looked.
        pool: Pool,
    },

    /// The item cannot be picked up.
    #[error("{0} cannot be taken")]
    NotTakeable(ItemId),

    /// The item cannot be eaten.
    #[error("{0} cannot be eaten")]
    NotEdible(ItemId),

    /// Shop command outside a shop.
    #[error("not a shop")]
    NotAShop,

    /// An item verb with nothing after it.
    #[error("{0} what?")]
    MissingObject(Verb),

    /// A world invariant was violated.
    #[error(transparent)]
    Internal(#[from] Error),
}

impl ActionError {
    /// Returns true for ordinary refusals, false for invariant violations.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ActionError::Internal(_))
    }

    pub(crate) fn not_found(phrase: &Phrase, pool: Pool) -> Self {
        ActionError::ItemNotFound {
            phrase: phrase.clone(),
            pool,
        }
    }
}
