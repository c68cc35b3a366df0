use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::model::{Item, Room, World};
use crate::error::{GameError, Result};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    #[serde(default)]
    name: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    /// Where the item starts: "room:hall" or "inventory".
    start_location: String,
}

enum StartLocation {
    Room(String),
    Inventory,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World> {
    let contents = fs::read_to_string(path)?;
    info!(path = %path.display(), "loading world file");
    load_world_from_str(&contents)
}

/// Build a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.id.trim().is_empty() {
        return Err(GameError::InvalidWorld("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(GameError::InvalidWorld(
            "world.start_room may not be empty".into(),
        ));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(GameError::InvalidWorld("room.id may not be empty".into()));
        }
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(GameError::InvalidWorld(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        // Player input is lowercased before matching, so directions are too.
        let room = room_cfg.exit.into_iter().fold(
            Room::new(room_cfg.id.clone(), normalize_multiline_desc(&room_cfg.desc)),
            |room, e| room.with_exit(e.direction.trim().to_lowercase(), e.target),
        );

        rooms_map.insert(room_cfg.id, room);
    }

    // Ensure start_room exists
    if !rooms_map.contains_key(&world_file.world.start_room) {
        return Err(GameError::InvalidWorld(format!(
            "start_room '{}' not found among rooms",
            world_file.world.start_room
        )));
    }

    // Place items in file order so room listings stay stable
    let mut starting_inventory: Vec<Item> = Vec::new();

    for ic in world_file.item {
        let name = ic.name.trim().to_lowercase();
        if name.is_empty() {
            return Err(GameError::InvalidWorld(
                "item.name may not be empty".into(),
            ));
        }

        match parse_start_location(&ic.start_location).map_err(GameError::InvalidWorld)? {
            StartLocation::Inventory => starting_inventory.push(Item::new(name)),
            StartLocation::Room(room_id) => match rooms_map.get_mut(&room_id) {
                Some(room) => room.add_item(Item::new(name)),
                None => {
                    return Err(GameError::InvalidWorld(format!(
                        "item '{}' start_location room '{}' not found",
                        name, room_id
                    )));
                }
            },
        }
    }

    debug!(
        rooms = rooms_map.len(),
        carried = starting_inventory.len(),
        "world built"
    );

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        start_room: world_file.world.start_room,
        rooms: rooms_map,
        starting_inventory,
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation inside the TOML string is not part of the text.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                // Wrapped line: single newline in TOML → space in output
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);

        pending_blank_lines = 0;
    }

    result
}

fn parse_start_location(s: &str) -> std::result::Result<StartLocation, String> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("inventory") {
        return Ok(StartLocation::Inventory);
    }

    if let Some(rest) = s.strip_prefix("room:") {
        let room_id = rest.trim();
        if room_id.is_empty() {
            return Err(format!("Invalid start_location '{}': empty room id", s));
        }
        return Ok(StartLocation::Room(room_id.to_string()));
    }

    Err(format!(
        "Invalid start_location '{}': expected 'room:<id>' or 'inventory'",
        s
    ))
}
