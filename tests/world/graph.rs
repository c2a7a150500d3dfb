//! Integration tests for WorldGraph
//!
//! Tests lookups and persistent ground-item updates.

use crossroads_foundation::{Direction, ErrorKind, RoomId};
use crossroads_world::town;

#[test]
fn room_lookup_by_name_and_id() {
    let (world, _) = town().unwrap();
    let square = world.room_by_name("Town Square").unwrap();
    let room = world.room(square).unwrap();
    assert_eq!(room.name, "Town Square");
    assert!(!room.is_shop());

    let err = world.room(RoomId::new(999)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(_)));
    let err = world.room_by_name("town square").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNameNotFound(_)));
}

#[test]
fn exits_follow_canonical_order() {
    let (world, _) = town().unwrap();
    let street = world.room_by_name("West X Street").unwrap();
    let directions: Vec<_> = world.room(street).unwrap().exit_directions().collect();
    assert_eq!(
        directions,
        vec![
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West
        ]
    );
}

#[test]
fn ground_updates_return_new_graph() {
    let (world, catalog) = town().unwrap();
    let square = world.room_by_name("Town Square").unwrap();
    let sword = catalog.by_name("Sword").unwrap();

    let with_sword = world.add_ground_item(square, sword).unwrap();
    assert_eq!(with_sword.ground_count(square, sword).unwrap(), 1);
    assert_eq!(world.ground_count(square, sword).unwrap(), 0);
    assert_eq!(with_sword.ground_items(square).unwrap().last(), Some(&sword));

    let without = with_sword.remove_ground_item(square, sword).unwrap();
    assert_eq!(without, world);
}

#[test]
fn removing_absent_item_fails() {
    let (world, catalog) = town().unwrap();
    let square = world.room_by_name("Town Square").unwrap();
    let sword = catalog.by_name("Sword").unwrap();
    let err = world.remove_ground_item(square, sword).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotOnGround { .. }));
}

#[test]
fn removing_one_of_many_keeps_the_rest() {
    let (world, catalog) = town().unwrap();
    let store = world.room_by_name("Used Anvils Store").unwrap();
    let anvil = catalog.by_name("Anvil").unwrap();
    let fewer = world.remove_ground_item(store, anvil).unwrap();
    assert_eq!(fewer.ground_count(store, anvil).unwrap(), 3);
    assert_eq!(world.ground_count(store, anvil).unwrap(), 4);
}

#[test]
fn shop_items_only_in_shops() {
    let (world, catalog) = town().unwrap();
    let bakery = world.room_by_name("Bakery").unwrap();
    let names: Vec<_> = world
        .shop_items(bakery)
        .unwrap()
        .unwrap()
        .iter()
        .map(|&id| catalog.name(id).unwrap())
        .collect();
    assert_eq!(names, vec!["Meat Pie", "Donut", "Bagel"]);

    let square = world.room_by_name("Town Square").unwrap();
    assert!(world.shop_items(square).unwrap().is_none());
}
