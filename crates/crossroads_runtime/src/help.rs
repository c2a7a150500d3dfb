//! Help text.

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  go <direction>       Move north, south, east, west, up, or down (or just n, s, e, w, u, d)
  look                 Describe the room you are in
  look <item>          Examine an item on the ground or in your inventory
  look <direction>     See which room lies that way
  take <item>          Pick up an item from the ground
  drop <item>          Put an item from your inventory on the ground
  eat <item>           Eat an item from your inventory
  list                 Show what a shop sells
  buy <item>           Buy an item from a shop
  sell <item>          Sell an item from your inventory
  inventory, i         Show what you are carrying
  exits                Switch between full and brief exit listings
  help, ?              Show this list
  quit                 Leave the game
";

/// Banner printed when the game starts.
pub const BANNER: &str = "\
Text Adventure Demo!
(Type \"help\" for commands.)
";
