//! Parsed commands.

use std::fmt;

use crossroads_foundation::Direction;

use crate::vocabulary::Verb;

/// The words a player used to refer to an item, fillers removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Phrase(Vec<String>);

impl Phrase {
    /// Creates a phrase from tokens.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The phrase's tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Returns true if the phrase has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// What a `look` command is aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookTarget {
    /// The current room.
    Room,
    /// The room through an exit.
    Direction(Direction),
    /// An item nearby.
    Item(Phrase),
}

/// A fully parsed player command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Go(Direction),
    /// Look at something.
    Look(LookTarget),
    /// Pick up an item from the ground.
    Take(Phrase),
    /// Put an inventory item on the ground.
    Drop(Phrase),
    /// Eat an inventory item.
    Eat(Phrase),
    /// Buy an item from the current shop.
    Buy(Phrase),
    /// Sell an inventory item.
    Sell(Phrase),
    /// List the current shop's items.
    List,
    /// Show the inventory.
    Inventory,
    /// Switch between full and compact exit listings.
    ToggleExits,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// The canonical verb behind this command.
    #[must_use]
    pub fn verb(&self) -> Verb {
        match self {
            Command::Go(_) => Verb::Go,
            Command::Look(_) => Verb::Look,
            Command::Take(_) => Verb::Take,
            Command::Drop(_) => Verb::Drop,
            Command::Eat(_) => Verb::Eat,
            Command::Buy(_) => Verb::Buy,
            Command::Sell(_) => Verb::Sell,
            Command::List => Verb::List,
            Command::Inventory => Verb::Inventory,
            Command::ToggleExits => Verb::Exits,
            Command::Help => Verb::Help,
            Command::Quit => Verb::Quit,
        }
    }

    /// The item phrase, for commands that carry one.
    #[must_use]
    pub fn phrase(&self) -> Option<&Phrase> {
        match self {
            Command::Take(p)
            | Command::Drop(p)
            | Command::Eat(p)
            | Command::Buy(p)
            | Command::Sell(p)
            | Command::Look(LookTarget::Item(p)) => Some(p),
            _ => None,
        }
    }
}
