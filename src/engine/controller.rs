//! The read-eval-print loop and command dispatch.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::engine::command::Command;
use crate::engine::items::{handle_inventory, handle_pick_up};
use crate::engine::movement::handle_move;
use crate::engine::output::{Output, flush_output};
use crate::engine::render::{render_help, render_room};
use crate::error::Result;
use crate::world::{Player, World};

pub const WELCOME: &str = "Welcome to the MUD! Type 'help' for a list of commands.";
pub const PROMPT: &str = "> ";
pub const GOODBYE: &str = "Exiting the game...";

/// Owns the player and the world, and runs commands against them.
pub struct Controller {
    world: World,
    player: Player,
    running: bool,
}

impl Controller {
    pub fn new(world: World, player: Player) -> Self {
        Controller {
            world,
            player,
            running: true,
        }
    }

    /// Start the player in the world's start room carrying its starting
    /// inventory.
    pub fn from_world(mut world: World) -> Self {
        let mut player = Player::new(world.start_room.clone());
        for item in std::mem::take(&mut world.starting_inventory) {
            player.add_item(item);
        }
        Controller::new(world, player)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn welcome(&self) -> Output {
        let mut out = Output::new();
        out.say(WELCOME);
        out
    }

    /// Run one line of player input. Never fails: every outcome, bad input
    /// included, is a message in the returned output.
    pub fn handle_input(&mut self, line: &str) -> Output {
        let mut out = Output::new();
        let command = Command::parse(line);
        debug!(?command, "dispatching");

        match command {
            Command::Look => self.look_around(&mut out),
            Command::Move(direction) => {
                let moved = handle_move(&mut out, &self.world, &mut self.player, &direction);
                debug!(direction = %direction, moved, "move handled");
            }
            Command::PickUp(name) => {
                let taken = handle_pick_up(&mut out, &mut self.world, &mut self.player, &name);
                debug!(item = %name, taken, "pick up handled");
            }
            Command::PickUsage => out.say("Usage: pick up <itemName>"),
            Command::Inventory => handle_inventory(&mut out, &self.player),
            Command::Help => render_help(&mut out),
            Command::Quit => {
                self.running = false;
                out.say(GOODBYE);
            }
            Command::Unknown => out.say("Unknown command"),
        }

        out
    }

    fn look_around(&mut self, out: &mut Output) {
        match self.world.room(self.player.current_room()) {
            Some(room) => render_room(out, room),
            None => {
                // Only reachable with a hand-built world that skipped validation.
                warn!(room = self.player.current_room(), "player is in an unknown room");
                out.say(format!(
                    "Error: you are in an unknown room '{}'",
                    self.player.current_room()
                ));
                self.running = false;
            }
        }
    }

    /// Print the banner, then prompt, read and handle lines until the player
    /// quits or `input` runs dry. End of input counts as quitting.
    pub fn run_game_loop<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!(world = %self.world.id, room = self.player.current_room(), "game loop started");
        flush_output(self.welcome(), &mut output)?;

        while self.running {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            // Bytes that aren't UTF-8 become an unknown command, not an I/O error.
            let mut bytes = Vec::new();
            if input.read_until(b'\n', &mut bytes)? == 0 {
                writeln!(output)?;
                writeln!(output, "{}", GOODBYE)?;
                self.running = false;
                break;
            }

            let line = String::from_utf8_lossy(&bytes);
            let out = self.handle_input(&line);
            flush_output(out, &mut output)?;
        }

        output.flush()?;
        info!("game loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use super::*;
    use crate::world::{Item, Room};

    fn hall_and_vault() -> Controller {
        let mut rooms = HashMap::new();
        rooms.insert(
            "a".to_string(),
            Room::new("a", "Hall")
                .with_exit("forward", "b")
                .with_item(Item::new("key")),
        );
        rooms.insert("b".to_string(), Room::new("b", "Vault"));
        let world = World {
            id: "w".into(),
            name: String::new(),
            start_room: "a".into(),
            rooms,
            starting_inventory: vec![Item::new("lamp")],
        };
        Controller::from_world(world)
    }

    #[test]
    fn test_from_world_starts_in_start_room_with_inventory() {
        let controller = hall_and_vault();
        assert_eq!(controller.player().current_room(), "a");
        assert_eq!(controller.player().list_inventory(), vec!["lamp"]);
        assert!(controller.world().starting_inventory.is_empty());
        assert!(controller.is_running());
    }

    #[test]
    fn test_look_does_not_mutate() {
        let mut controller = hall_and_vault();
        let first = controller.handle_input("look");
        let second = controller.handle_input("  LOOK ");
        assert_eq!(first.blocks, second.blocks);
        assert_eq!(controller.player().current_room(), "a");
        assert_eq!(controller.world().room("a").unwrap().list_items(), vec!["key"]);
    }

    #[test]
    fn test_pick_usage_and_unknown() {
        let mut controller = hall_and_vault();
        assert_eq!(
            controller.handle_input("pick key").lines(),
            vec!["Usage: pick up <itemName>"]
        );
        assert_eq!(controller.handle_input("dance").lines(), vec!["Unknown command"]);
        assert_eq!(controller.handle_input("").lines(), vec!["Unknown command"]);
    }

    #[test]
    fn test_quit_and_exit_stop_running() {
        for word in ["quit", "Exit"] {
            let mut controller = hall_and_vault();
            let out = controller.handle_input(word);
            assert_eq!(out.lines(), vec![GOODBYE]);
            assert!(!controller.is_running());
        }
    }

    #[test]
    fn test_unknown_current_room_stops_game() {
        let world = World {
            id: "w".into(),
            name: String::new(),
            start_room: "nowhere".into(),
            rooms: HashMap::new(),
            starting_inventory: Vec::new(),
        };
        let mut controller = Controller::from_world(world);
        let out = controller.handle_input("look");
        assert_eq!(out.lines(), vec!["Error: you are in an unknown room 'nowhere'"]);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_loop_treats_eof_as_quit() {
        let mut controller = hall_and_vault();
        let mut buf: Vec<u8> = Vec::new();
        controller
            .run_game_loop(Cursor::new("look\n"), &mut buf)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(WELCOME));
        assert!(text.ends_with(&format!("> \n{}\n", GOODBYE)));
        assert!(!controller.is_running());
    }
}
