//! The built-in town.
//!
//! ```text
//!         +---------+    +---------+
//!         | Thief   O    | Bakery  |
//!         | Guild   |    |         |
//! +------++------O--+    +----O----+
//! | Used |
//! |Anvils|        Town Square     +--------+
//! |      O                        |Obs Deck|
//! +------++----O----+    +----O----/  /
//!         | Black-  O    | Wizard /  /
//!         | smith   |    | Tower    /
//!         +---------+    +---------+
//! ```
//!
//! The square has no western street exit; West X Street is reached through
//! the Thief Guild or the Blacksmith and leads east back into the square.

use crossroads_foundation::{Direction, Result};

use crate::builder::WorldBuilder;
use crate::definition::{ItemDefinition, RoomDefinition, WorldDefinition};
use crate::graph::WorldGraph;
use crate::item::ItemCatalog;

/// Name of the room where a new game starts.
pub const STARTING_ROOM: &str = "Town Square";

/// Names of the items a new game starts with.
pub const STARTING_INVENTORY: [&str; 3] = ["README Note", "Sword", "Donut"];

/// Builds the built-in town.
///
/// # Errors
///
/// Returns an error only if the built-in data violates referential
/// integrity, which the test suite rules out.
pub fn town() -> Result<(WorldGraph, ItemCatalog)> {
    town_definition().build()
}

/// The built-in town in its name-keyed source form.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn town_definition() -> WorldDefinition {
    use Direction::{Down, East, North, South, Up, West};

    WorldBuilder::new()
        // Items
        .item(
            ItemDefinition::new("Welcome Sign", ["welcome", "sign"])
                .with_ground_description("A welcome sign stands here.")
                .with_short_description("a welcome sign")
                .with_long_description(
                    "The welcome sign reads, \"Welcome to this text adventure demo. You can type \
                     \"help\" for a list of commands to use. Be sure to check out Al's cool \
                     programming books at http://inventwithpython.com\"",
                )
                .fixed(),
        )
        .item(
            ItemDefinition::new("Do Not Take Sign Sign", ["sign"])
                .with_ground_description("A sign stands here, not bolted to the ground.")
                .with_short_description("a sign")
                .with_long_description("The sign reads, \"Do Not Take This Sign\""),
        )
        .item(
            ItemDefinition::new("Fountain", ["fountain"])
                .with_ground_description("A bubbling fountain of green water.")
                .with_short_description("a fountain")
                .with_long_description(
                    "The water in the fountain is a bright green color. Is that... gatorade?",
                )
                .fixed(),
        )
        .item(
            ItemDefinition::new("Sword", ["sword", "exkaleber", "longsword"])
                .with_ground_description("A sword lies on the ground.")
                .with_short_description("a sword")
                .with_long_description("A longsword, engraved with the word, \"Exkaleber\""),
        )
        .item(
            ItemDefinition::new("War Axe", ["axe", "war", "mighty"])
                .with_ground_description("A mighty war axe lies on the ground.")
                .with_short_description("a war axe")
                .with_long_description(
                    "The mighty war axe is made with antimony impurities from a fallen star, \
                     rendering it surpassingly brittle.",
                ),
        )
        .item(
            ItemDefinition::new(
                "Chainmail T-Shirt",
                ["chainmail", "chain", "mail", "t-shirt", "tshirt", "stupid"],
            )
            .with_ground_description("A chainmail t-shirt lies wadded up on the ground.")
            .with_short_description("a chainmail t-shirt")
            .with_long_description(
                "The chainmail t-shirt has a slogan and arrow engraved on the front: \"I'm with \
                 Stupid\"",
            ),
        )
        .item(
            ItemDefinition::new("Anvil", ["anvil"])
                .with_ground_description(
                    "The blacksmith's anvil, far too heavy to pick up, rests in the corner.",
                )
                .with_short_description("an anvil")
                .with_long_description("The black anvil has the word \"ACME\" engraved on the side.")
                .fixed(),
        )
        .item(
            ItemDefinition::new("Lock Picks", ["lockpicks", "picks", "set"])
                .with_ground_description("A set of lock picks lies on the ground.")
                .with_short_description("a set of lock picks")
                .with_long_description("A set of fine picks for picking locks."),
        )
        .item(
            ItemDefinition::new("Silly Glasses", ["glasses", "silly", "fake", "mustache"])
                .with_ground_description(
                    "A pair of those silly gag glasses with the nose and fake mustache rest on \
                     the ground.",
                )
                .with_short_description("a pair of silly fake mustache glasses")
                .with_long_description(
                    "These glasses have a fake nose and mustache attached to them. The perfect \
                     disguise!",
                ),
        )
        .item(
            ItemDefinition::new("Meat Pie", ["pie", "meat"])
                .with_ground_description("A suspicious meat pie rests on the ground.")
                .with_short_description("a meat pie")
                .with_long_description("A meat pie. It tastes like chicken.")
                .edible(),
        )
        .item(
            ItemDefinition::new("Bagel", ["bagel"])
                .with_ground_description("A bagel rests on the ground. (Gross.)")
                .with_short_description("a bagel")
                .with_long_description("It is a donut-shaped bagel.")
                .edible(),
        )
        .item(
            ItemDefinition::new("Donut", ["donut"])
                .with_ground_description("A donut rests on the ground. (Gross.)")
                .with_short_description("a donut")
                .with_long_description("It is a bagel-shaped donut.")
                .edible(),
        )
        .item(
            ItemDefinition::new("Crystal Ball", ["crystal", "ball"])
                .with_ground_description("A glowing crystal ball rests on a small pillow.")
                .with_short_description("a crystal ball")
                .with_long_description(
                    "The crystal ball swirls with mystical energy, forming the words \"Answer \
                     Unclear. Check Again Later.\"",
                ),
        )
        .item(
            ItemDefinition::new("Floating Book", ["book", "floating"])
                .with_ground_description("A magical book floats here.")
                .with_short_description("a floating book")
                .with_long_description(
                    "This magical tomb doesn't have a lot of pictures in it. Boring!",
                ),
        )
        .item(
            ItemDefinition::new("Telescope", ["telescope"])
                .with_ground_description("A telescope is bolted to the ground.")
                .with_short_description("a telescope")
                .with_long_description("Using the telescope, you can see your house from here!")
                .fixed(),
        )
        .item(
            ItemDefinition::new("README Note", ["readme", "note"])
                .with_ground_description("A note titled \"README\" rests on the ground.")
                .with_short_description("a README note")
                .with_long_description(
                    "The README note reads, \"Welcome to the text adventure demo. Be sure to \
                     check out the source code to see how this game is put together.\"",
                )
                .edible(),
        )
        .item(
            ItemDefinition::new("Shop Howto", ["howto", "note", "shop"])
                .with_ground_description("A \"Shopping HOWTO\" note rests on the ground.")
                .with_short_description("a shopping howto")
                .with_long_description(
                    "The note reads, \"When you are at a shop, you can type \"list\" to show \
                     what is for sale. \"buy <item>\" will add it to your inventory, or you can \
                     sell an item in your inventory with \"sell <item>\". (Currently, money is \
                     not implemented in this program.)",
                )
                .edible(),
        )
        // Rooms
        .room(
            RoomDefinition::new(
                "Town Square",
                "The town square is a large open space with a fountain in the center. Streets \
                 lead in all directions.",
            )
            .with_exit(North, "North Y Street")
            .with_exit(East, "East X Street")
            .with_exit(South, "South Y Street")
            .with_ground("Welcome Sign")
            .with_ground("Fountain"),
        )
        .room(
            RoomDefinition::new(
                "North Y Street",
                "The northern end of Y Street has really gone down hill. Pot holes are \
                 everywhere, as are stray cats, rats, and wombats.",
            )
            .with_exit(West, "Thief Guild")
            .with_exit(East, "Bakery")
            .with_exit(South, "Town Square")
            .with_ground("Do Not Take Sign Sign"),
        )
        .room(
            RoomDefinition::new(
                "Thief Guild",
                "The Thief Guild is a dark den of unprincipled types. You clutch your purse \
                 (though several other people here would like to clutch your purse as well).",
            )
            .with_exit(South, "West X Street")
            .with_exit(East, "North Y Street")
            .with_ground("Lock Picks")
            .with_ground("Silly Glasses"),
        )
        .room(
            RoomDefinition::new(
                "Bakery",
                "The delightful smell of meat pies fills the air, making you hungry. The baker \
                 flashes a grin, as he slides a box marked \"Not Human Organs\" under a table \
                 with his foot.",
            )
            .with_exit(West, "North Y Street")
            .with_exit(South, "East X Street")
            .with_shop_item("Meat Pie")
            .with_shop_item("Donut")
            .with_shop_item("Bagel")
            .with_ground("Shop Howto"),
        )
        .room(
            RoomDefinition::new(
                "West X Street",
                "West X Street is the rich section of town. So rich, they paved the streets \
                 with gold. This probably was not a good idea. The thief guild opened up the \
                 next day.",
            )
            .with_exit(North, "Thief Guild")
            .with_exit(East, "Town Square")
            .with_exit(South, "Blacksmith")
            .with_exit(West, "Used Anvils Store"),
        )
        .room(
            RoomDefinition::new(
                "Used Anvils Store",
                "The anvil store has anvils of all types and sizes, each previously-owned but \
                 still in servicable condition. The shopkeeper will happily take your order, \
                 but anvils are far too heavy to carry out of the store.",
            )
            .with_exit(East, "West X Street")
            .with_shop_item("Anvil")
            .with_ground("Anvil")
            .with_ground("Anvil")
            .with_ground("Anvil")
            .with_ground("Anvil"),
        )
        .room(
            RoomDefinition::new("East X Street", "East X Street. It's like X Street, except East.")
                .with_exit(North, "Bakery")
                .with_exit(West, "Town Square")
                .with_exit(South, "Wizard Tower"),
        )
        .room(
            RoomDefinition::new(
                "Blacksmith",
                "The blacksmith loudly hammers a new sword over her anvil. Swords, axes, butter \
                 knives all line the walls of her workshop, available for a price.",
            )
            .with_exit(North, "West X Street")
            .with_exit(East, "South Y Street")
            .with_shop_item("Sword")
            .with_shop_item("War Axe")
            .with_shop_item("Chainmail T-Shirt")
            .with_ground("Anvil")
            .with_ground("Shop Howto"),
        )
        .room(
            RoomDefinition::new(
                "South Y Street",
                "The Christmas Carolers of South Y Street are famous for all legally changing \
                 their name to Carol. They are also famous for singing year-round, in heavy fur \
                 coats and wool mittens, even in the summer. That's dedication to their craft!",
            )
            .with_exit(North, "Town Square")
            .with_exit(West, "Blacksmith"),
        )
        .room(
            RoomDefinition::new(
                "Wizard Tower",
                "Zanny magical antics are afoot in the world-famous Wizard Tower. Cauldrons \
                 bubble, rats talk, and books float midair in this center of magical discovery.",
            )
            .with_exit(North, "East X Street")
            .with_exit(Up, "Observation Deck")
            .with_ground("Crystal Ball")
            .with_ground("Floating Book")
            .with_ground("Floating Book"),
        )
        .room(
            RoomDefinition::new(
                "Observation Deck",
                "You can see the entire town from the top of the Wizard Tower. Everybody looks \
                 like ants, especially the people transformed into ants by the wizards of the \
                 tower!",
            )
            .with_exit(Down, "Wizard Tower")
            .with_exit(Up, "Magical Escalator to Nowhere")
            .with_ground("Telescope"),
        )
        .room(
            RoomDefinition::new(
                "Magical Escalator to Nowhere",
                "No matter how much you climb the escalator, it doesn't seem to be getting you \
                 anywhere.",
            )
            .with_exit(Up, "Magical Escalator to Nowhere")
            .with_exit(Down, "Observation Deck"),
        )
        .into_definition()
}
