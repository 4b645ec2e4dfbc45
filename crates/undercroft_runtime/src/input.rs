//! The input adapter: raw keys to logical actions.
//!
//! The simulation core never sees keycodes. The driver converts each
//! keypress into one of a small closed set of named actions, tags it with
//! the acting player, and hands the result to the pipeline as the tick's
//! input value.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A logical action a player can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move up one cell.
    Up,
    /// Move down one cell.
    Down,
    /// Move left one cell.
    Left,
    /// Move right one cell.
    Right,
    /// Pick up whatever is underfoot.
    Take,
    /// Drop a carried item.
    Drop,
    /// Interact with a co-located place (open a door).
    Act,
}

/// One player's action for this tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlEvent {
    /// The acting player.
    pub player_id: String,
    /// What they did.
    pub action: Action,
}

/// Input to one tick of the system pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DungeonInput {
    /// Control events, in arrival order.
    pub events: Vec<ControlEvent>,
}

impl DungeonInput {
    /// Input carrying a single event for `player_id`.
    #[must_use]
    pub fn single(player_id: &str, action: Action) -> Self {
        Self {
            events: vec![ControlEvent {
                player_id: player_id.to_string(),
                action,
            }],
        }
    }
}

/// Maps a terminal key event to a logical action.
///
/// Returns `None` for key releases and for keys outside the action set;
/// quitting is handled by the driver before input reaches the pipeline.
#[must_use]
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Char('t') => Some(Action::Take),
        KeyCode::Char('T') => Some(Action::Drop),
        KeyCode::Char(' ') => Some(Action::Act),
        _ => None,
    }
}
