//! Integration tests for world definitions and validation

use crossroads_foundation::{DefinitionError, Direction, ErrorKind};
use crossroads_world::{ItemDefinition, RoomDefinition, WorldBuilder, WorldDefinition};

fn definition_error(def: &WorldDefinition) -> DefinitionError {
    match def.build() {
        Err(err) => match err.kind {
            ErrorKind::Definition(inner) => inner,
            other => panic!("expected a definition error, got {other:?}"),
        },
        Ok(_) => panic!("definition unexpectedly built"),
    }
}

fn two_rooms() -> WorldBuilder {
    WorldBuilder::new()
        .item(ItemDefinition::new("Bell", ["bell"]))
        .room(RoomDefinition::new("Yard", "A yard.").with_exit(Direction::East, "Shed"))
        .room(RoomDefinition::new("Shed", "A shed.").with_exit(Direction::West, "Yard"))
}

// =============================================================================
// Valid Worlds
// =============================================================================

#[test]
fn valid_world_builds() {
    let (world, catalog) = two_rooms().build().unwrap();
    assert_eq!(world.room_count(), 2);
    assert_eq!(catalog.len(), 1);

    let yard = world.room_by_name("Yard").unwrap();
    let shed = world.exit(yard, Direction::East).unwrap();
    assert_eq!(world.room(shed).unwrap().name, "Shed");
}

#[test]
fn one_way_exits_are_allowed() {
    let def = WorldBuilder::new()
        .item(ItemDefinition::new("Bell", ["bell"]))
        .room(RoomDefinition::new("Top", "Top.").with_exit(Direction::Down, "Bottom"))
        .room(RoomDefinition::new("Bottom", "Bottom."))
        .into_definition();
    let (world, _) = def.build().unwrap();
    let bottom = world.room_by_name("Bottom").unwrap();
    assert!(world.exit(bottom, Direction::Up).unwrap_err().is_no_exit());
}

#[test]
fn self_loop_exit_is_allowed() {
    let def = WorldBuilder::new()
        .item(ItemDefinition::new("Bell", ["bell"]))
        .room(RoomDefinition::new("Stairs", "Endless.").with_exit(Direction::Up, "Stairs"))
        .into_definition();
    let (world, _) = def.build().unwrap();
    let stairs = world.room_by_name("Stairs").unwrap();
    assert_eq!(world.exit(stairs, Direction::Up).unwrap(), stairs);
}

// =============================================================================
// Validation Failures
// =============================================================================

#[test]
fn exit_to_unknown_room_is_rejected() {
    let def = two_rooms()
        .room(RoomDefinition::new("Attic", "Dusty.").with_exit(Direction::Down, "Cellar"))
        .into_definition();
    assert_eq!(
        definition_error(&def),
        DefinitionError::UnknownRoom {
            room: "Attic".to_string(),
            direction: Direction::Down,
            target: "Cellar".to_string(),
        }
    );
}

#[test]
fn unknown_ground_item_is_rejected() {
    let def = two_rooms()
        .room(RoomDefinition::new("Attic", "Dusty.").with_ground("Ghost"))
        .into_definition();
    assert!(matches!(
        definition_error(&def),
        DefinitionError::UnknownItem { item, .. } if item == "Ghost"
    ));
}

#[test]
fn unknown_shop_item_is_rejected() {
    let def = two_rooms()
        .room(RoomDefinition::new("Market", "Busy.").with_shop_item("Spice"))
        .into_definition();
    assert!(matches!(
        definition_error(&def),
        DefinitionError::UnknownItem { room, .. } if room == "Market"
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let rooms = two_rooms()
        .room(RoomDefinition::new("Yard", "Again."))
        .into_definition();
    assert_eq!(
        definition_error(&rooms),
        DefinitionError::DuplicateRoom("Yard".to_string())
    );

    let items = two_rooms()
        .item(ItemDefinition::new("Bell", ["gong"]))
        .into_definition();
    assert_eq!(
        definition_error(&items),
        DefinitionError::DuplicateItem("Bell".to_string())
    );
}

#[test]
fn recognition_words_are_checked() {
    let empty = two_rooms()
        .item(ItemDefinition::new("Mystery", Vec::<String>::new()))
        .into_definition();
    assert_eq!(
        definition_error(&empty),
        DefinitionError::EmptyRecognitionWords("Mystery".to_string())
    );

    for bad in ["", "two words", "Caps"] {
        let def = two_rooms()
            .item(ItemDefinition::new("Odd", [bad]))
            .into_definition();
        assert!(
            matches!(
                definition_error(&def),
                DefinitionError::InvalidRecognitionWord { ref word, .. } if word == bad
            ),
            "word {bad:?} should be rejected"
        );
    }
}

#[test]
fn empty_world_is_rejected() {
    assert_eq!(
        definition_error(&WorldDefinition::default()),
        DefinitionError::NoRooms
    );
}
