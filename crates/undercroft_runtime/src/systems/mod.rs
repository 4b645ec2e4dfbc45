//! The dungeon's per-tick systems, in pipeline order.

mod controller;
mod player;

pub use controller::controller_system;
pub use player::player_system;

use undercroft_engine::Pipeline;

use crate::input::DungeonInput;
use crate::state::DungeonEffect;

/// Builds the dungeon pipeline: controller first, then player.
#[must_use]
pub fn dungeon_pipeline() -> Pipeline<DungeonInput, DungeonEffect> {
    Pipeline::new()
        .with_system(controller_system)
        .with_system(player_system)
}
