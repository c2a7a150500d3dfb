//! Text presentation.
//!
//! Turns engine events, action errors, and parse errors into the lines the
//! player reads. Nothing here touches game state.

use std::fmt::Write as _;

use crossroads_engine::{ActionError, Event, ExitListing, Pool, RoomView};
use crossroads_foundation::ItemId;
use crossroads_parser::{ParseError, Verb};
use crossroads_world::ItemCatalog;

use crate::help::HELP;

/// Greedy word wrap at `width` columns.
///
/// Words longer than the width get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Renders a room view.
///
/// ```text
/// Town Square
/// ===========
/// The town square is a large open space ...
///
/// A welcome sign stands here.
///
/// North: North Y Street
/// ```
#[must_use]
pub fn format_room(view: &RoomView, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));
    for line in wrap(&view.description, width) {
        let _ = writeln!(out, "{line}");
    }

    if !view.ground.is_empty() {
        out.push('\n');
        for item in &view.ground {
            let _ = writeln!(out, "{item}");
        }
    }

    out.push('\n');
    match &view.exits {
        ExitListing::Full(exits) => {
            for (direction, room) in exits {
                let _ = writeln!(out, "{}: {room}", direction.title());
            }
        }
        ExitListing::Compact(directions) => {
            let names: Vec<&str> = directions.iter().map(|d| d.title()).collect();
            let _ = writeln!(out, "Exits: {}", names.join(" "));
        }
    }
    out
}

/// Describes a successful command.
#[must_use]
pub fn describe_event(catalog: &ItemCatalog, event: &Event, width: usize) -> String {
    let short = |item: ItemId| {
        catalog
            .lookup(item)
            .map_or_else(|_| item.to_string(), |t| t.short_description.clone())
    };
    let name = |item: ItemId| {
        catalog
            .name(item)
            .map_or_else(|_| item.to_string(), ToString::to_string)
    };

    match event {
        Event::Moved { direction, view } => {
            format!("You move to the {direction}.\n{}", format_room(view, width))
        }
        Event::Looked(view) => format_room(view, width),
        Event::Examined { description, .. } => join_lines(&wrap(description, width)),
        Event::Peeked { direction, room } => {
            format!("To the {direction} is {room}.\n")
        }
        Event::Took(item) => format!("You take {}.\n", short(*item)),
        Event::Dropped(item) => format!("You drop {}.\n", short(*item)),
        Event::Ate(item) => format!("You eat {}.\n", short(*item)),
        Event::Bought(item) => format!("You have purchased {}.\n", short(*item)),
        Event::Sold(item) => format!("You have sold {}.\n", short(*item)),
        Event::ShopListing(items) => {
            let mut out = String::from("For sale:\n");
            for item in items {
                let _ = writeln!(out, "  - {}", name(*item));
            }
            out
        }
        Event::Inventory(groups) => {
            let mut out = String::from("Inventory:\n");
            if groups.is_empty() {
                out.push_str("  (nothing)\n");
            }
            for &(item, count) in groups {
                if count > 1 {
                    let _ = writeln!(out, "  {} ({count})", name(item));
                } else {
                    let _ = writeln!(out, "  {}", name(item));
                }
            }
            out
        }
        Event::ExitsToggled { full: true } => "Showing full exit descriptions.\n".to_string(),
        Event::ExitsToggled { full: false } => "Showing brief exit descriptions.\n".to_string(),
        Event::Help => HELP.to_string(),
        Event::Quit => "Thanks for playing!\n".to_string(),
    }
}

/// Describes a refused command.
#[must_use]
pub fn describe_action_error(catalog: &ItemCatalog, error: &ActionError) -> String {
    let short = |item: ItemId| {
        catalog
            .lookup(item)
            .map_or_else(|_| item.to_string(), |t| t.short_description.clone())
    };

    match error {
        ActionError::NoExit { .. } => "You cannot move in that direction\n".to_string(),
        ActionError::ItemNotFound { phrase, pool } => match pool {
            Pool::Ground => "That is not on the ground.\n".to_string(),
            Pool::Inventory => format!("You do not have \"{phrase}\" in your inventory.\n"),
            Pool::Shop => format!(
                "\"{phrase}\" is not sold here. Type \"list\" to see a list of items for sale.\n"
            ),
            Pool::Nearby => "You do not see that nearby.\n".to_string(),
        },
        ActionError::NotTakeable(item) => format!("You cannot take {}.\n", short(*item)),
        ActionError::NotEdible(item) => format!("You cannot eat {}.\n", short(*item)),
        ActionError::NotAShop => "This is not a shop.\n".to_string(),
        ActionError::MissingObject(verb) => missing_object(*verb),
        ActionError::Internal(err) => format!("Something went wrong: {err}\n"),
    }
}

/// Describes a line that could not be parsed.
#[must_use]
pub fn describe_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::EmptyInput => String::new(),
        ParseError::UnknownVerb(word) => {
            format!("I do not understand \"{word}\". Type \"help\" for a list of commands.\n")
        }
        ParseError::MissingDirection => {
            "Go where? Try \"go north\" or just \"n\".\n".to_string()
        }
        ParseError::UnknownDirection(word) => format!("\"{word}\" is not a direction.\n"),
    }
}

fn missing_object(verb: Verb) -> String {
    let mut verb_title = verb.name().to_string();
    if let Some(first) = verb_title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    match verb {
        Verb::Take => format!(
            "{verb_title} what? Type \"look\" to see the items on the ground here.\n"
        ),
        Verb::Drop | Verb::Eat | Verb::Sell => format!(
            "{verb_title} what? Type \"inventory\" or \"i\" to see what you are carrying.\n"
        ),
        Verb::Buy => format!(
            "{verb_title} what? Type \"list\" to see what is for sale here.\n"
        ),
        _ => format!("{verb_title} what?\n"),
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
