//! World loading.
//!
//! Worlds come either from the built-in town or from a JSON file holding a
//! [`WorldDefinition`]:
//!
//! ```json
//! {
//!   "items": [
//!     { "name": "Bell", "words": ["bell"], "short_description": "a bell" }
//!   ],
//!   "rooms": [
//!     { "name": "Yard", "description": "A yard.", "exits": { "east": "Shed" }, "ground": ["Bell"] },
//!     { "name": "Shed", "description": "A shed.", "exits": { "west": "Yard" } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use crossroads_foundation::ErrorContext;
use crossroads_world::{ItemCatalog, WorldDefinition, WorldGraph, town};
use tracing::info;

use crate::config::WorldSource;
use crate::error::{Result, RuntimeError};

/// A loaded world together with its default starting point.
#[derive(Clone, Debug)]
pub struct LoadedWorld {
    /// The world graph.
    pub world: WorldGraph,
    /// The item catalog.
    pub catalog: ItemCatalog,
    /// Room to start in when none is configured.
    pub default_start: String,
    /// Inventory to start with when none is configured.
    pub default_inventory: Vec<String>,
}

/// Parses a world definition from JSON text.
///
/// # Errors
///
/// Returns the decoder error if the text is not a world definition.
pub fn parse_definition(json: &str) -> serde_json::Result<WorldDefinition> {
    serde_json::from_str(json)
}

/// Reads a world definition from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn read_definition(path: &Path) -> Result<WorldDefinition> {
    let text = fs::read_to_string(path).map_err(|source| RuntimeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_definition(&text).map_err(|source| RuntimeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates a world.
///
/// A file world starts in its first room with an empty inventory unless
/// configured otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if the
/// definition fails validation.
pub fn load_world(source: &WorldSource) -> Result<LoadedWorld> {
    match source {
        WorldSource::Builtin => {
            let (world, catalog) = town()?;
            info!(rooms = world.room_count(), items = catalog.len(), "loaded built-in town");
            Ok(LoadedWorld {
                world,
                catalog,
                default_start: crossroads_world::town::STARTING_ROOM.to_string(),
                default_inventory: crossroads_world::town::STARTING_INVENTORY
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
        }
        WorldSource::File(path) => {
            let definition = read_definition(path)?;
            let default_start = definition
                .rooms
                .first()
                .map(|room| room.name.clone())
                .unwrap_or_default();
            let (world, catalog) = definition.build().map_err(|err| {
                err.with_context(ErrorContext::new().with_source(path.display().to_string()))
            })?;
            info!(
                path = %path.display(),
                rooms = world.room_count(),
                items = catalog.len(),
                "loaded world file"
            );
            Ok(LoadedWorld {
                world,
                catalog,
                default_start,
                default_inventory: Vec::new(),
            })
        }
    }
}
