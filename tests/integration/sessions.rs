//! Full play sessions
//!
//! Replays command scripts through the REPL and checks the transcript.

use crossroads_runtime::{GameConfig, Repl, ScriptEditor};

fn transcript(lines: &[&str]) -> String {
    transcript_with(&GameConfig::new().with_banner(false), lines)
}

fn transcript_with(config: &GameConfig, lines: &[&str]) -> String {
    let game = config.build_game().unwrap();
    let mut repl = Repl::with_editor(ScriptEditor::from_lines(lines.iter().copied()), game)
        .with_output(Vec::new())
        .configure(config);
    repl.run().unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}

// =============================================================================
// Startup
// =============================================================================

#[test]
fn opening_screen() {
    let text = transcript_with(&GameConfig::new(), &[]);
    let expected_start = "Text Adventure Demo!\n(Type \"help\" for commands.)\n\n\
                          Town Square\n===========\n";
    assert!(text.starts_with(expected_start), "got:\n{text}");
    assert!(text.contains(
        "\nA welcome sign stands here.\nA bubbling fountain of green water.\n\n\
         North: North Y Street\nSouth: South Y Street\nEast: East X Street\n"
    ));
}

// =============================================================================
// Exploration
// =============================================================================

#[test]
fn walk_to_the_observation_deck() {
    let text = transcript(&["e", "s", "u", "look telescope"]);
    assert!(text.contains("You move to the east.\nEast X Street\n"));
    assert!(text.contains("You move to the south.\nWizard Tower\n"));
    assert!(text.contains("You move to the up.\nObservation Deck\n"));
    assert!(text.contains("Using the telescope, you can see your house from here!"));
}

#[test]
fn compact_exits_mode() {
    let text = transcript(&["exits", "look"]);
    assert!(text.contains("Showing brief exit descriptions.\n"));
    assert!(text.contains("Exits: North South East\n"));
}

#[test]
fn refusals_are_explained() {
    let text = transcript(&[
        "west",
        "take fountain",
        "take gong",
        "eat sword",
        "buy pie",
        "list",
        "take",
        "sing",
    ]);
    for expected in [
        "You cannot move in that direction\n",
        "You cannot take a fountain.\n",
        "That is not on the ground.\n",
        "You cannot eat a sword.\n",
        "This is not a shop.\n",
        "Take what?",
        "I do not understand \"sing\".",
    ] {
        assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
    }
}

// =============================================================================
// Shopping
// =============================================================================

#[test]
fn bakery_shopping_trip() {
    let text = transcript(&["n", "e", "list", "buy meat pie", "eat pie", "sell sword", "i"]);
    assert!(text.contains("For sale:\n  - Meat Pie\n  - Donut\n  - Bagel\n"));
    assert!(text.contains("You have purchased a meat pie.\n"));
    assert!(text.contains("You eat a meat pie.\n"));
    assert!(text.contains("You have sold a sword.\n"));
    assert!(text.contains("Inventory:\n  README Note\n  Donut\n"));
}

#[test]
fn anvils_stay_in_the_store() {
    let config = GameConfig::new()
        .with_banner(false)
        .with_start_room("Used Anvils Store")
        .with_inventory(Vec::<String>::new());
    let text = transcript_with(&config, &["take anvil", "buy anvil", "i", "look"]);
    assert_eq!(text.matches("You cannot take an anvil.\n").count(), 2);
    assert!(text.contains("Inventory:\n  (nothing)\n"));
    let on_ground = "The blacksmith's anvil, far too heavy to pick up, rests in the corner.\n";
    assert_eq!(text.matches(on_ground).count(), 8);
}

// =============================================================================
// Ending
// =============================================================================

#[test]
fn quit_ends_the_session() {
    let text = transcript(&["quit", "n"]);
    assert!(text.ends_with("Thanks for playing!\n"));
    assert!(!text.contains("You move"));
}

#[test]
fn help_lists_commands() {
    let text = transcript(&["help"]);
    for verb in ["go", "look", "take", "drop", "eat", "buy", "sell", "list", "inventory", "quit"] {
        assert!(text.contains(verb), "help should mention {verb}");
    }
}
