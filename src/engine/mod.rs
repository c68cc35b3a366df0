mod command;
mod controller;
mod items;
mod movement;
mod output;
mod render;

pub use command::{Command, split_command};
pub use controller::{Controller, GOODBYE, PROMPT, WELCOME};
pub use items::{handle_inventory, handle_pick_up};
pub use movement::handle_move;
pub use output::{Output, OutputBlock, flush_output};
pub use render::{HELP_LINES, NO_DESCRIPTION, render_help, render_room, room_text};
