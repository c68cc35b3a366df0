use tracing::debug;

use crate::engine::output::Output;
use crate::engine::render::join_or;
use crate::world;

/// Move a named item from the player's current room into the inventory.
/// Returns true when something was picked up.
pub fn handle_pick_up(
    out: &mut Output,
    world: &mut world::World,
    player: &mut world::Player,
    item_name: &str,
) -> bool {
    let taken = world
        .room_mut(player.current_room())
        .and_then(|room| room.remove_item(item_name));

    match taken {
        Some(item) => {
            debug!(item = item.name(), room = player.current_room(), "item picked up");
            player.add_item(item);
            out.say(format!("You picked up: {}", item_name));
            true
        }
        None => {
            out.say(format!("There is no item named {} here!", item_name));
            false
        }
    }
}

pub fn handle_inventory(out: &mut Output, player: &world::Player) {
    out.say(format!(
        "Your inventory: {}",
        join_or(&player.list_inventory(), "(empty)")
    ));
}
