//! Item phrase resolution tests.
//!
//! Tests for first-match-wins resolution against candidate pools.

use crossroads_foundation::ItemId;
use crossroads_parser::{Command, CommandResolver, Phrase, Resolution, parse};
use crossroads_world::{ItemCatalog, town};
use proptest::prelude::*;

fn catalog() -> ItemCatalog {
    town().unwrap().1
}

fn id(catalog: &ItemCatalog, name: &str) -> ItemId {
    catalog.by_name(name).unwrap()
}

#[test]
fn pool_order_breaks_ties() {
    let catalog = catalog();
    let resolver = CommandResolver::new(&catalog);
    let welcome = id(&catalog, "Welcome Sign");
    let do_not_take = id(&catalog, "Do Not Take Sign Sign");
    let sign = Phrase::new(["sign"]);

    assert_eq!(
        resolver.resolve(&sign, [welcome, do_not_take]).unwrap(),
        Resolution::Found(welcome)
    );
    assert_eq!(
        resolver.resolve(&sign, [do_not_take, welcome]).unwrap(),
        Resolution::Found(do_not_take)
    );
}

#[test]
fn any_token_may_match() {
    let catalog = catalog();
    let resolver = CommandResolver::new(&catalog);
    let glasses = id(&catalog, "Silly Glasses");

    for words in [&["fake", "mustache"][..], &["purple", "glasses"], &["silly"]] {
        let phrase = Phrase::new(words.iter().copied());
        assert_eq!(
            resolver.resolve(&phrase, [glasses]).unwrap(),
            Resolution::Found(glasses),
            "{phrase} should match"
        );
    }
}

#[test]
fn unknown_words_and_empty_pools() {
    let catalog = catalog();
    let resolver = CommandResolver::new(&catalog);
    let sword = id(&catalog, "Sword");

    assert_eq!(
        resolver.resolve(&Phrase::new(["gong"]), [sword]).unwrap(),
        Resolution::NotFound
    );
    assert_eq!(
        resolver.resolve(&Phrase::new(["sword"]), []).unwrap(),
        Resolution::NotFound
    );
    assert_eq!(
        resolver.resolve(&Phrase::default(), [sword]).unwrap(),
        Resolution::NotFound
    );
}

#[test]
fn duplicates_collapse_in_matches() {
    let catalog = catalog();
    let resolver = CommandResolver::new(&catalog);
    let book = id(&catalog, "Floating Book");
    let ball = id(&catalog, "Crystal Ball");

    let matches = resolver
        .matches(&Phrase::new(["book", "ball"]), [book, ball, book])
        .unwrap();
    assert_eq!(matches, vec![book, ball]);
}

#[test]
fn unknown_id_in_pool_is_an_error() {
    let catalog = catalog();
    let resolver = CommandResolver::new(&catalog);
    assert!(resolver
        .resolve(&Phrase::new(["sword"]), [ItemId::new(400)])
        .is_err());
}

fn mixed_case(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn typed_casing_never_changes_resolution(mask in prop::collection::vec(any::<bool>(), 1..24)) {
        let catalog = catalog();
        let resolver = CommandResolver::new(&catalog);
        let pool = [id(&catalog, "Lock Picks"), id(&catalog, "Silly Glasses")];

        let line = mixed_case("take the silly glasses", &mask);
        let Ok(Command::Take(phrase)) = parse(&line) else {
            return Err(TestCaseError::fail(format!("{line} did not parse as take")));
        };
        prop_assert_eq!(
            resolver.resolve(&phrase, pool).unwrap(),
            Resolution::Found(pool[1])
        );
    }
}
