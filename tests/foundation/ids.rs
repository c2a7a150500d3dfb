//! Integration tests for RoomId and ItemId

use crossroads_foundation::{ItemId, RoomId};
use std::collections::HashSet;

#[test]
fn ids_round_trip_index() {
    assert_eq!(RoomId::new(7).index(), 7);
    assert_eq!(RoomId::new(7).slot(), 7);
    assert_eq!(ItemId::new(3).index(), 3);
}

#[test]
fn ids_display() {
    assert_eq!(RoomId::new(2).to_string(), "room#2");
    assert_eq!(ItemId::new(11).to_string(), "item#11");
}

#[test]
fn ids_hash_and_order() {
    let set: HashSet<ItemId> = [ItemId::new(1), ItemId::new(1), ItemId::new(2)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(RoomId::new(1) < RoomId::new(2));
}
