//! Vocabulary registry for verbs, directions, and filler words.
//!
//! Stores every word the parser understands apart from item recognition
//! words, which belong to the item catalog.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use crossroads_foundation::Direction;

/// Canonical verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Look at the room, an item, or a direction.
    Look,
    /// Pick up an item from the ground.
    Take,
    /// Put an item from the inventory on the ground.
    Drop,
    /// Eat an item from the inventory.
    Eat,
    /// Buy an item from a shop.
    Buy,
    /// Sell an item from the inventory.
    Sell,
    /// List what a shop sells.
    List,
    /// Show the inventory.
    Inventory,
    /// Toggle between full and compact exit listings.
    Exits,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Verb {
    /// All verbs in help-listing order.
    pub const ALL: [Verb; 12] = [
        Verb::Go,
        Verb::Look,
        Verb::Take,
        Verb::Drop,
        Verb::Eat,
        Verb::Buy,
        Verb::Sell,
        Verb::List,
        Verb::Inventory,
        Verb::Exits,
        Verb::Help,
        Verb::Quit,
    ];

    /// Canonical word for this verb.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Eat => "eat",
            Verb::Buy => "buy",
            Verb::Sell => "sell",
            Verb::List => "list",
            Verb::Inventory => "inventory",
            Verb::Exits => "exits",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Synonyms per canonical verb, canonical word excluded
    verbs: HashMap<Verb, BTreeSet<String>>,
    /// Word (canonical or synonym) -> verb
    verb_words: HashMap<String, Verb>,
    /// Word (name or synonym) -> direction
    direction_words: HashMap<String, Direction>,
    /// Words dropped from item phrases
    fillers: HashSet<String>,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard adventure vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();

        vocab.register_verb(Verb::Go, ["walk", "move"]);
        vocab.register_verb(Verb::Look, ["l", "examine", "x", "inspect"]);
        vocab.register_verb(Verb::Take, ["get", "grab", "pick"]);
        vocab.register_verb(Verb::Drop, ["discard"]);
        vocab.register_verb(Verb::Eat, ["consume"]);
        vocab.register_verb(Verb::Buy, ["purchase"]);
        vocab.register_verb(Verb::Sell, [] as [&str; 0]);
        vocab.register_verb(Verb::List, ["shop"]);
        vocab.register_verb(Verb::Inventory, ["i", "inv"]);
        vocab.register_verb(Verb::Exits, [] as [&str; 0]);
        vocab.register_verb(Verb::Help, ["?"]);
        vocab.register_verb(Verb::Quit, ["q", "exit"]);

        for direction in Direction::ALL {
            vocab.register_direction(direction, [direction.abbreviation()]);
        }

        for filler in ["the", "a", "an", "at"] {
            vocab.register_filler(filler);
        }

        vocab
    }

    /// Registers a verb with its synonyms.
    ///
    /// The canonical word is always registered.
    pub fn register_verb<I, S>(&mut self, verb: Verb, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.verbs.entry(verb).or_default();
        self.verb_words.insert(verb.name().to_string(), verb);
        for syn in synonyms {
            let syn = syn.into();
            self.verb_words.insert(syn.clone(), verb);
            entry.insert(syn);
        }
    }

    /// Looks up a verb by word (canonical or synonym).
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<Verb> {
        self.verb_words.get(word).copied()
    }

    /// Synonyms registered for a verb, in sorted order.
    pub fn synonyms(&self, verb: Verb) -> impl Iterator<Item = &str> {
        self.verbs
            .get(&verb)
            .into_iter()
            .flat_map(|syns| syns.iter().map(String::as_str))
    }

    /// Registers a direction with its synonyms.
    ///
    /// The lowercase direction name is always registered.
    pub fn register_direction<I, S>(&mut self, direction: Direction, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.direction_words
            .insert(direction.name().to_string(), direction);
        for syn in synonyms {
            self.direction_words.insert(syn.into(), direction);
        }
    }

    /// Looks up a direction by word (name or synonym).
    #[must_use]
    pub fn lookup_direction(&self, word: &str) -> Option<Direction> {
        self.direction_words.get(word).copied()
    }

    /// Registers a word to drop from item phrases.
    pub fn register_filler(&mut self, word: impl Into<String>) {
        self.fillers.insert(word.into());
    }

    /// Returns true if the word is dropped from item phrases.
    #[must_use]
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.contains(word)
    }

    /// Every verb and direction word, sorted, for completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.verb_words
            .keys()
            .chain(self.direction_words.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
