//! Command execution.

use crossroads_foundation::Result;
use crossroads_parser::Command;
use crossroads_world::ItemCatalog;
use tracing::{debug, warn};

use crate::action;
use crate::error::ActionError;
use crate::event::{Event, Outcome};
use crate::render::{RoomView, render_room};
use crate::state::GameState;

/// Executes one command against a state.
///
/// The input state is never modified; on success the new state is returned
/// inside the [`Outcome`].
///
/// # Errors
///
/// Returns the [`ActionError`] of the refused action.
pub fn execute(
    catalog: &ItemCatalog,
    state: &GameState,
    command: &Command,
) -> std::result::Result<Outcome, ActionError> {
    let result = match command {
        Command::Go(direction) => action::go(catalog, state, *direction),
        Command::Look(target) => action::look(catalog, state, target),
        Command::Take(phrase) => action::take(catalog, state, phrase),
        Command::Drop(phrase) => action::drop(catalog, state, phrase),
        Command::Eat(phrase) => action::eat(catalog, state, phrase),
        Command::Buy(phrase) => action::buy(catalog, state, phrase),
        Command::Sell(phrase) => action::sell(catalog, state, phrase),
        Command::List => action::list(state),
        Command::Inventory => Ok(action::inventory(state)),
        Command::ToggleExits => Ok(action::toggle_exits(state)),
        Command::Help => Ok(Outcome::new(state.clone(), Event::Help)),
        Command::Quit => Ok(Outcome::new(state.clone(), Event::Quit)),
    };

    debug!(
        verb = %command.verb(),
        room = %state.room(),
        ok = result.is_ok(),
        "executed command"
    );
    result
}

/// A running game: the item catalog and the current state.
#[derive(Clone, Debug)]
pub struct Game {
    catalog: ItemCatalog,
    state: GameState,
}

impl Game {
    /// Creates a game from a catalog and a starting state.
    #[must_use]
    pub fn new(catalog: ItemCatalog, state: GameState) -> Self {
        Self { catalog, state }
    }

    /// The item catalog.
    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Executes a command and commits the new state on success.
    ///
    /// # Errors
    ///
    /// Returns the [`ActionError`] of the refused action; the state is then
    /// unchanged.
    pub fn apply(&mut self, command: &Command) -> std::result::Result<Event, ActionError> {
        match execute(&self.catalog, &self.state, command) {
            Ok(outcome) => {
                self.state = outcome.state;
                Ok(outcome.event)
            }
            Err(err) => {
                if !err.is_recoverable() {
                    warn!(error = %err, "world invariant violated");
                }
                Err(err)
            }
        }
    }

    /// The view of the current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the current room is not in the world.
    pub fn view(&self) -> Result<RoomView> {
        render_room(
            self.state.world(),
            &self.catalog,
            self.state.room(),
            self.state.player().full_exits(),
        )
    }
}
