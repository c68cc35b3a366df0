use crate::engine::output::Output;
use crate::world;

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "look - look around the room",
    "move <direction> - move in the given direction (e.g. forward, back, left, right)",
    "pick up <itemName> - pick up an item",
    "inventory - show your inventory",
    "help - list commands",
    "quit / exit - leave the game",
];

pub const NO_DESCRIPTION: &str = "You see nothing special.";

/// What the player reads for a room, on `look` and on arrival.
pub fn room_text(room: &world::Room) -> &str {
    match room.description().trim() {
        "" => NO_DESCRIPTION,
        text => text,
    }
}

/// Describe a room: description, items, exits. Reads only.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.say(room_text(room));
    out.say(format!("Items: {}", join_or(&room.list_items(), "(none)")));

    let mut dirs: Vec<&str> = room.exits().iter().map(|e| e.direction.as_str()).collect();
    dirs.sort_unstable();
    dirs.dedup();
    out.set_exits(format!("Exits: {}", join_or(&dirs, "(none)")));
}

pub fn render_help(out: &mut Output) {
    for line in HELP_LINES {
        out.say(*line);
    }
}

pub(crate) fn join_or(names: &[&str], empty: &str) -> String {
    if names.is_empty() {
        empty.to_string()
    } else {
        names.join(", ")
    }
}
