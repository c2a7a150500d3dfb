//! Player action tests
//!
//! Drives the engine through parsed commands and checks both the event and
//! the resulting state.

use crossroads_engine::{ActionError, Event, Pool, execute};
use crossroads_foundation::Direction;
use crossroads_parser::{Verb, parse};

use crate::support::{item, start, town_game};

// =============================================================================
// Movement
// =============================================================================

#[test]
fn north_from_square_reaches_north_y_street() {
    let mut game = town_game();
    let event = game.apply(&parse("go north").unwrap()).unwrap();
    let Event::Moved { direction, view } = event else {
        panic!("expected a move, got {event:?}");
    };
    assert_eq!(direction, Direction::North);
    assert_eq!(view.title, "North Y Street");
    assert_eq!(game.view().unwrap().title, "North Y Street");
}

#[test]
fn west_from_square_is_refused() {
    let mut game = town_game();
    let before = game.state().clone();
    assert!(matches!(
        game.apply(&parse("w").unwrap()),
        Err(ActionError::NoExit {
            direction: Direction::West
        })
    ));
    assert_eq!(game.state(), &before);
}

#[test]
fn walk_a_loop_back_to_the_square() {
    let mut game = town_game();
    for step in ["n", "e", "s", "w"] {
        game.apply(&parse(step).unwrap()).unwrap();
    }
    assert_eq!(game.view().unwrap().title, "Town Square");
}

#[test]
fn escalator_goes_nowhere() {
    let (catalog, state) = start("Magical Escalator to Nowhere", &[]);
    let outcome = execute(&catalog, &state, &parse("up").unwrap()).unwrap();
    assert_eq!(outcome.state.room(), state.room());
}

// =============================================================================
// Items on the Ground
// =============================================================================

#[test]
fn take_anvil_is_refused_and_leaves_four() {
    let (catalog, state) = start("Used Anvils Store", &[]);
    let anvil = item(&catalog, "Anvil");

    let err = execute(&catalog, &state, &parse("take anvil").unwrap()).unwrap_err();
    assert!(matches!(err, ActionError::NotTakeable(id) if id == anvil));
    assert_eq!(state.world().ground_count(state.room(), anvil).unwrap(), 4);
}

#[test]
fn take_first_matching_sign() {
    let (catalog, state) = start("North Y Street", &[]);
    let outcome = execute(&catalog, &state, &parse("take sign").unwrap()).unwrap();
    let sign = item(&catalog, "Do Not Take Sign Sign");
    assert_eq!(outcome.event, Event::Took(sign));
    assert_eq!(outcome.state.player().count(sign), 1);
    assert!(outcome.state.world().ground_items(state.room()).unwrap().is_empty());
}

#[test]
fn take_only_searches_the_ground() {
    let (catalog, state) = start("Town Square", &["Sword"]);
    let err = execute(&catalog, &state, &parse("take sword").unwrap()).unwrap_err();
    assert!(matches!(
        err,
        ActionError::ItemNotFound {
            pool: Pool::Ground,
            ..
        }
    ));
}

#[test]
fn drop_then_take_back() {
    let mut game = town_game();
    let sword = item(game.catalog(), "Sword");

    assert_eq!(game.apply(&parse("drop sword").unwrap()).unwrap(), Event::Dropped(sword));
    assert_eq!(game.state().player().count(sword), 0);
    let view = game.view().unwrap();
    assert_eq!(view.ground.last().map(String::as_str), Some("A sword lies on the ground."));

    assert_eq!(game.apply(&parse("take sword").unwrap()).unwrap(), Event::Took(sword));
    assert_eq!(game.state().player().count(sword), 1);
}

// =============================================================================
// Eating
// =============================================================================

#[test]
fn eat_donut_removes_it() {
    let mut game = town_game();
    let donut = item(game.catalog(), "Donut");
    let room = game.state().room();
    let ground = game.state().world().ground_items(room).unwrap().clone();
    let world = game.state().world().clone();

    assert_eq!(game.apply(&parse("eat donut").unwrap()).unwrap(), Event::Ate(donut));
    assert_eq!(game.state().player().count(donut), 0);
    assert_eq!(game.state().player().inventory().len(), 2);

    // Eaten items go nowhere.
    assert_eq!(game.state().world().ground_items(room).unwrap(), &ground);
    assert_eq!(game.state().world(), &world);
}

#[test]
fn eat_sword_is_refused() {
    let mut game = town_game();
    let sword = item(game.catalog(), "Sword");
    assert!(matches!(
        game.apply(&parse("eat sword").unwrap()),
        Err(ActionError::NotEdible(id)) if id == sword
    ));
    assert_eq!(game.state().player().inventory().len(), 3);
}

#[test]
fn eat_readme_note() {
    let mut game = town_game();
    let note = item(game.catalog(), "README Note");
    assert_eq!(game.apply(&parse("eat note").unwrap()).unwrap(), Event::Ate(note));
}

// =============================================================================
// Shops
// =============================================================================

#[test]
fn buy_meat_pie_at_bakery() {
    let (catalog, state) = start("Bakery", &[]);
    let pie = item(&catalog, "Meat Pie");
    let outcome = execute(&catalog, &state, &parse("buy meat pie").unwrap()).unwrap();
    assert_eq!(outcome.event, Event::Bought(pie));
    assert_eq!(outcome.state.player().count(pie), 1);

    let again = execute(&catalog, &outcome.state, &parse("buy pie").unwrap()).unwrap();
    assert_eq!(again.state.player().count(pie), 2);
}

#[test]
fn buy_outside_a_shop() {
    let (catalog, state) = start("Town Square", &[]);
    assert!(matches!(
        execute(&catalog, &state, &parse("buy pie").unwrap()),
        Err(ActionError::NotAShop)
    ));
    assert!(matches!(
        execute(&catalog, &state, &parse("buy").unwrap()),
        Err(ActionError::NotAShop)
    ));
}

#[test]
fn buy_anvil_is_refused() {
    let (catalog, state) = start("Used Anvils Store", &[]);
    let anvil = item(&catalog, "Anvil");
    assert!(matches!(
        execute(&catalog, &state, &parse("buy anvil").unwrap()),
        Err(ActionError::NotTakeable(id)) if id == anvil
    ));
}

#[test]
fn buy_unsold_item() {
    let (catalog, state) = start("Bakery", &[]);
    let err = execute(&catalog, &state, &parse("buy sword").unwrap()).unwrap_err();
    assert!(matches!(err, ActionError::ItemNotFound { pool: Pool::Shop, .. }));
}

#[test]
fn sell_anywhere() {
    let (catalog, state) = start("Wizard Tower", &["Bagel", "Bagel"]);
    let bagel = item(&catalog, "Bagel");
    let outcome = execute(&catalog, &state, &parse("sell bagel").unwrap()).unwrap();
    assert_eq!(outcome.event, Event::Sold(bagel));
    assert_eq!(outcome.state.player().count(bagel), 1);
}

#[test]
fn list_wares_in_order() {
    let (catalog, state) = start("Blacksmith", &[]);
    let outcome = execute(&catalog, &state, &parse("list").unwrap()).unwrap();
    let Event::ShopListing(items) = outcome.event else {
        panic!("expected a listing");
    };
    let names: Vec<_> = items.iter().map(|&id| catalog.name(id).unwrap()).collect();
    assert_eq!(names, vec!["Sword", "War Axe", "Chainmail T-Shirt"]);
}

// =============================================================================
// Looking and Bookkeeping
// =============================================================================

#[test]
fn look_item_prefers_ground() {
    let (catalog, state) = start("Bakery", &["README Note"]);
    let outcome = execute(&catalog, &state, &parse("look note").unwrap()).unwrap();
    let howto = item(&catalog, "Shop Howto");
    assert!(matches!(outcome.event, Event::Examined { item, .. } if item == howto));
}

#[test]
fn look_item_falls_back_to_inventory() {
    let (catalog, state) = start("Town Square", &["Sword"]);
    let outcome = execute(&catalog, &state, &parse("x sword").unwrap()).unwrap();
    let Event::Examined { description, .. } = outcome.event else {
        panic!("expected an examination");
    };
    assert!(description.contains("magical tomb"));
}

#[test]
fn look_through_an_exit() {
    let (catalog, state) = start("Town Square", &[]);
    let outcome = execute(&catalog, &state, &parse("look south").unwrap()).unwrap();
    assert_eq!(
        outcome.event,
        Event::Peeked {
            direction: Direction::South,
            room: "South Y Street".to_string()
        }
    );
    assert_eq!(outcome.state, state);
}

#[test]
fn missing_objects() {
    let (catalog, state) = start("Bakery", &[]);
    for (line, verb) in [
        ("take", Verb::Take),
        ("drop", Verb::Drop),
        ("eat", Verb::Eat),
        ("sell", Verb::Sell),
        ("buy", Verb::Buy),
    ] {
        assert!(
            matches!(
                execute(&catalog, &state, &parse(line).unwrap()),
                Err(ActionError::MissingObject(v)) if v == verb
            ),
            "{line} should ask for an object"
        );
    }
}

#[test]
fn inventory_groups_duplicates() {
    let (catalog, state) = start("Town Square", &["Donut", "Sword", "Donut"]);
    let outcome = execute(&catalog, &state, &parse("inventory").unwrap()).unwrap();
    assert_eq!(
        outcome.event,
        Event::Inventory(vec![
            (item(&catalog, "Donut"), 2),
            (item(&catalog, "Sword"), 1)
        ])
    );
}

#[test]
fn exits_toggle_back_and_forth() {
    let mut game = town_game();
    assert_eq!(
        game.apply(&parse("exits").unwrap()).unwrap(),
        Event::ExitsToggled { full: false }
    );
    assert!(!game.state().player().full_exits());
    assert_eq!(
        game.apply(&parse("exits").unwrap()).unwrap(),
        Event::ExitsToggled { full: true }
    );
}
