//! Integration tests for the built-in town

use std::collections::HashSet;

use crossroads_foundation::Direction;
use crossroads_world::town::{STARTING_INVENTORY, STARTING_ROOM, town_definition};
use crossroads_world::{WorldDefinition, town};

#[test]
fn every_exit_leads_to_a_room() {
    let (world, _) = town().unwrap();
    let rooms: HashSet<_> = world.room_ids().collect();
    assert_eq!(rooms.len(), 12);

    for id in world.room_ids() {
        let room = world.room(id).unwrap();
        for direction in room.exit_directions() {
            let target = world.exit(id, direction).unwrap();
            assert!(
                rooms.contains(&target),
                "{} exit {direction} is dangling",
                room.name
            );
        }
    }
}

#[test]
fn every_listed_item_is_in_the_catalog() {
    let (world, catalog) = town().unwrap();
    for id in world.room_ids() {
        for &item in world.ground_items(id).unwrap() {
            assert!(catalog.lookup(item).is_ok());
        }
        for &item in world.shop_items(id).unwrap().unwrap_or_default() {
            assert!(catalog.lookup(item).is_ok());
        }
    }
}

#[test]
fn streets_connect_both_ways() {
    let (world, _) = town().unwrap();
    let pairs = [
        ("Town Square", Direction::North, "North Y Street"),
        ("Town Square", Direction::East, "East X Street"),
        ("Town Square", Direction::South, "South Y Street"),
        ("Wizard Tower", Direction::Up, "Observation Deck"),
    ];
    for (from, direction, to) in pairs {
        let a = world.room_by_name(from).unwrap();
        let b = world.room_by_name(to).unwrap();
        assert_eq!(world.exit(a, direction).unwrap(), b);
        assert_eq!(world.exit(b, direction.opposite()).unwrap(), a);
    }
}

#[test]
fn west_x_street_leads_into_square_but_not_back() {
    let (world, _) = town().unwrap();
    let square = world.room_by_name("Town Square").unwrap();
    let west = world.room_by_name("West X Street").unwrap();
    assert_eq!(world.exit(west, Direction::East).unwrap(), square);
    assert!(world.exit(square, Direction::West).unwrap_err().is_no_exit());
}

#[test]
fn escalator_loops_to_itself() {
    let (world, _) = town().unwrap();
    let escalator = world.room_by_name("Magical Escalator to Nowhere").unwrap();
    assert_eq!(world.exit(escalator, Direction::Up).unwrap(), escalator);
}

#[test]
fn starting_point_exists() {
    let (world, catalog) = town().unwrap();
    assert!(world.room_by_name(STARTING_ROOM).is_ok());
    for name in STARTING_INVENTORY {
        assert!(catalog.by_name(name).is_ok());
    }
}

#[test]
fn definition_survives_json() {
    let definition = town_definition();
    let json = serde_json::to_string_pretty(&definition).unwrap();
    let parsed: WorldDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, definition);
    assert_eq!(parsed.build().unwrap().0, town().unwrap().0);
}
