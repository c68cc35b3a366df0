use tracing::debug;

use crate::engine::output::Output;
use crate::engine::render::room_text;
use crate::world;

/// Move the player through `direction` if the current room has that exit.
/// Returns true when the player changed rooms.
pub fn handle_move(
    out: &mut Output,
    world: &world::World,
    player: &mut world::Player,
    direction: &str,
) -> bool {
    match world.connected_room(player.current_room(), direction) {
        Some(next) => {
            debug!(from = player.current_room(), to = %next.id, direction, "player moved");
            player.set_current_room(next.id.clone());
            out.say(format!("You move to: {}", room_text(next)));
            true
        }
        None => {
            out.say("You can't go there!");
            false
        }
    }
}
