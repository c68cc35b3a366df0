use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    /// Items the player carries when the game starts.
    pub starting_inventory: Vec<Item>,
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Follow `direction` out of `room_id`. `None` when either the room or
    /// the exit doesn't exist.
    pub fn connected_room(&self, room_id: &str, direction: &str) -> Option<&Room> {
        let target = self.room(room_id)?.connected_room(direction)?;
        self.room(target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    desc: String,
    items: Vec<Item>,
    exits: Vec<Exit>,
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

impl Room {
    pub fn new(id: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            desc: desc.into(),
            items: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Builder-style helper for world setup and tests.
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.push(Exit {
            direction: direction.into(),
            target: target.into(),
        });
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    pub fn description(&self) -> &str {
        &self.desc
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Item names in the order they were placed in the room.
    pub fn list_items(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    /// Target room id for `direction`. Directions are compared exactly.
    pub fn connected_room(&self, direction: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Take an item out of the room by name.
    /// With duplicate names, the one placed first is removed.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(idx))
    }
}

#[derive(Debug)]
pub struct Player {
    current_room: String,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(current_room: impl Into<String>) -> Self {
        Player {
            current_room: current_room.into(),
            inventory: Vec::new(),
        }
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    /// No validation: callers only pass ids of rooms reached through an exit.
    pub fn set_current_room(&mut self, room_id: impl Into<String>) {
        self.current_room = room_id.into();
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Names in pickup order. Duplicates are kept.
    pub fn list_inventory(&self) -> Vec<&str> {
        self.inventory.iter().map(Item::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_item_takes_first_inserted_duplicate() {
        let mut room = Room::new("hall", "Hall")
            .with_item(Item::new("coin"))
            .with_item(Item::new("key"))
            .with_item(Item::new("coin"));

        assert_eq!(room.remove_item("coin"), Some(Item::new("coin")));
        assert_eq!(room.list_items(), vec!["key", "coin"]);
    }

    #[test]
    fn test_remove_missing_item_is_none() {
        let mut room = Room::new("hall", "Hall").with_item(Item::new("key"));
        assert!(room.remove_item("lamp").is_none());
        assert_eq!(room.list_items(), vec!["key"]);
    }

    #[test]
    fn test_connected_room_matches_exactly() {
        let room = Room::new("hall", "Hall").with_exit("forward", "vault");
        assert_eq!(room.connected_room("forward"), Some("vault"));
        assert_eq!(room.connected_room("Forward"), None);
        assert_eq!(room.connected_room("back"), None);
    }

    #[test]
    fn test_world_connected_room_resolves_target() {
        let mut rooms = HashMap::new();
        rooms.insert(
            "hall".to_string(),
            Room::new("hall", "Hall").with_exit("forward", "vault"),
        );
        rooms.insert("vault".to_string(), Room::new("vault", "Vault"));
        let world = World {
            id: "test".into(),
            name: "Test".into(),
            start_room: "hall".into(),
            rooms,
            starting_inventory: Vec::new(),
        };

        let next = world.connected_room("hall", "forward").map(Room::description);
        assert_eq!(next, Some("Vault"));
        assert!(world.connected_room("vault", "back").is_none());
        assert!(world.connected_room("attic", "forward").is_none());
    }

    #[test]
    fn test_inventory_keeps_pickup_order_and_duplicates() {
        let mut player = Player::new("hall");
        player.add_item(Item::new("lamp"));
        player.add_item(Item::new("key"));
        player.add_item(Item::new("lamp"));
        assert_eq!(player.list_inventory(), vec!["lamp", "key", "lamp"]);
    }
}
