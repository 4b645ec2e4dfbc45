//! Applies incoming control events to controller components.

use undercroft_storage::ComponentStore;

use crate::components::{Controller, Player};
use crate::input::DungeonInput;
use crate::state::DungeonEffect;

/// Clears every controller, then sets the flags named by this tick's events
/// on the controllers of matching players only.
pub fn controller_system(
    store: &mut ComponentStore,
    input: &DungeonInput,
) -> Vec<DungeonEffect> {
    for (id, mut con) in store.join::<Controller>() {
        con.clear();
        store.set(id, con);
    }

    for (id, player, mut con) in store.join2::<Player, Controller>() {
        for event in &input.events {
            if event.player_id == player.player_id {
                con.apply(event.action);
            }
        }
        store.set(id, con);
    }

    Vec::new()
}
