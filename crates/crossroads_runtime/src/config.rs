//! Game configuration.
//!
//! [`Arguments`] is the command line; [`GameConfig`] is the resolved
//! configuration the REPL and game are built from. Each field of
//! `GameConfig` has a `with_*` builder method, mirroring the command-line
//! flags.

use std::path::PathBuf;

use clap::Parser;
use crossroads_engine::{Game, GameState};
use crossroads_foundation::{ErrorContext, ItemId};

use crate::error::Result;
use crate::loader::load_world;

/// Default wrap width for descriptions.
pub const DEFAULT_WIDTH: usize = 80;

/// Default input prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "crossroads", version, about, long_about = None)]
pub struct Arguments {
    /// Path to a JSON world definition
    #[arg(short = 'w', long = "world")]
    pub world: Option<PathBuf>,

    /// Name of the starting room
    #[arg(short = 's', long = "start")]
    pub start: Option<String>,

    /// Comma-separated names of the starting items
    #[arg(short = 'i', long = "inventory", value_delimiter = ',')]
    pub inventory: Option<Vec<String>>,

    /// List exits as directions only
    #[arg(long = "compact-exits")]
    pub compact_exits: bool,

    /// Column at which descriptions wrap
    #[arg(
        long = "width",
        env = "CROSSROADS_WIDTH",
        default_value_t = 80,
        value_parser = clap::value_parser!(u16).range(20..)
    )]
    pub width: u16,

    /// Read commands from a file instead of the terminal
    #[arg(long = "script")]
    pub script: Option<PathBuf>,

    /// Skip the title banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Log filter such as `debug` or `crossroads_engine=trace`; overrides `RUST_LOG`
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

/// Where the world comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WorldSource {
    /// The built-in town.
    #[default]
    Builtin,
    /// A JSON world definition file.
    File(PathBuf),
}

/// Resolved game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// World to play in.
    pub world: WorldSource,
    /// Starting room name; the world's default if `None`.
    pub start_room: Option<String>,
    /// Starting item names; the world's default if `None`.
    pub inventory: Option<Vec<String>>,
    /// Whether exits start in full mode.
    pub full_exits: bool,
    /// Wrap width.
    pub width: usize,
    /// Whether to print the banner.
    pub banner: bool,
    /// Input prompt.
    pub prompt: String,
    /// Command file to replay instead of reading the terminal.
    pub script: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldSource::Builtin,
            start_room: None,
            inventory: None,
            full_exits: true,
            width: DEFAULT_WIDTH,
            banner: true,
            prompt: DEFAULT_PROMPT.to_string(),
            script: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves command-line arguments.
    #[must_use]
    pub fn from_arguments(args: &Arguments) -> Self {
        let mut config = Self::new()
            .with_width(usize::from(args.width))
            .with_full_exits(!args.compact_exits)
            .with_banner(!args.no_banner);
        if let Some(path) = &args.world {
            config = config.with_world_file(path.clone());
        }
        if let Some(start) = &args.start {
            config = config.with_start_room(start.clone());
        }
        if let Some(items) = &args.inventory {
            config = config.with_inventory(items.iter().cloned());
        }
        if let Some(script) = &args.script {
            config = config.with_script(script.clone());
        }
        config
    }

    /// Plays in the world defined by a JSON file.
    #[must_use]
    pub fn with_world_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.world = WorldSource::File(path.into());
        self
    }

    /// Sets the starting room.
    #[must_use]
    pub fn with_start_room(mut self, name: impl Into<String>) -> Self {
        self.start_room = Some(name.into());
        self
    }

    /// Sets the starting inventory.
    #[must_use]
    pub fn with_inventory<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inventory = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether exits start in full mode.
    #[must_use]
    pub fn with_full_exits(mut self, full: bool) -> Self {
        self.full_exits = full;
        self
    }

    /// Sets the wrap width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the banner is printed.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Replays commands from a file.
    #[must_use]
    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = Some(path.into());
        self
    }

    /// Loads the world and builds the starting game.
    ///
    /// # Errors
    ///
    /// Returns an error if the world fails to load, or if the starting room
    /// or an inventory item does not exist.
    pub fn build_game(&self) -> Result<Game> {
        let loaded = load_world(&self.world)?;

        let start_name = self.start_room.as_deref().unwrap_or(&loaded.default_start);
        let start = loaded
            .world
            .room_by_name(start_name)
            .map_err(|err| err.with_context(ErrorContext::new().with_frame("starting room")))?;

        let names = self.inventory.as_ref().unwrap_or(&loaded.default_inventory);
        let inventory = names
            .iter()
            .map(|name| loaded.catalog.by_name(name))
            .collect::<crossroads_foundation::Result<Vec<ItemId>>>()
            .map_err(|err| err.with_context(ErrorContext::new().with_frame("starting inventory")))?;

        let mut state = GameState::new(loaded.world, start, inventory)?;
        if !self.full_exits {
            state = state.with_player(state.player().with_exits_toggled());
        }

        Ok(Game::new(loaded.catalog, state))
    }
}
