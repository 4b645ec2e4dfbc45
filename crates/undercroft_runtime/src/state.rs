//! Application state and the side-effect fold.

use undercroft_storage::ComponentStore;

use crate::worldgen;

/// An externally visible result of a system's execution.
///
/// Systems only describe the change; the orchestrator applies it to
/// [`DungeonState`] after the pipeline completes, in emission order,
/// exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DungeonEffect {
    /// Append a line to the message log.
    Message(String),
    /// Switch the current scene to another room.
    RoomChange(String),
}

/// State of the dungeon game.
pub struct DungeonState {
    /// The entity store; all simulation state lives here.
    pub store: ComponentStore,
    /// The player this terminal controls.
    pub my_player_id: String,
    /// Message log, oldest first.
    pub messages: Vec<String>,
    /// The room the ui currently shows.
    pub current_room_id: String,
}

impl DungeonState {
    /// A fresh game: two rooms, one player, a handful of inhabitants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: worldgen::new_dungeon_store(),
            my_player_id: "player1".to_string(),
            messages: vec![
                "Move with arrow keys.  t=take, T=drop, space=act".to_string(),
                "Welcome to the Undercroft!".to_string(),
            ],
            current_room_id: "room1".to_string(),
        }
    }

    /// Folds one tick's side effects into application state, in order.
    pub fn apply(&mut self, effects: Vec<DungeonEffect>) {
        for effect in effects {
            match effect {
                DungeonEffect::Message(text) => {
                    log::debug!("message: {text}");
                    self.messages.push(text);
                }
                DungeonEffect::RoomChange(room_id) => {
                    log::debug!("room change: {room_id}");
                    self.current_room_id = room_id;
                }
            }
        }
    }
}

impl Default for DungeonState {
    fn default() -> Self {
        Self::new()
    }
}
