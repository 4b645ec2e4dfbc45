//! Component types for the dungeon.

use serde::{Deserialize, Serialize};

use undercroft_foundation::{Kind, Pos};
use undercroft_storage::Component;

use crate::input::Action;

/// Width of a room in cells.
pub const ROOM_WIDTH: i32 = 80;
/// Height of a room in cells.
pub const ROOM_HEIGHT: i32 = 15;

/// 2D location within a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loc {
    /// Column, 0-based from the room's left edge.
    pub x: i32,
    /// Row, 0-based from the room's top edge.
    pub y: i32,
}

impl Loc {
    /// The drawing position for this location.
    #[must_use]
    pub fn to_pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

impl Component for Loc {
    const KIND: Kind = Kind::new("Loc");
}

/// Drawable string, usually a single glyph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// What gets printed at the entity's location.
    pub text: String,
}

impl Component for Text {
    const KIND: Kind = Kind::new("Text");
}

/// For entities that can be drawn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    /// Draw order; higher layers paint over lower ones.
    pub layer: i32,
}

impl Component for Drawable {
    const KIND: Kind = Kind::new("Drawable");
}

/// A thing you can get.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item category, e.g. `gold`.
    pub cat: String,
    /// Display name.
    pub name: String,
    /// Worth in gold pieces.
    pub value: i64,
}

impl Component for Item {
    const KIND: Kind = Kind::new("Item");
}

/// Marks an entity as a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Which player controls this entity.
    pub player_id: String,
}

impl Component for Player {
    const KIND: Kind = Kind::new("Player");
}

/// A non-player creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    /// Display name.
    pub name: String,
    /// Mob category, e.g. `enemy`.
    pub cat: String,
}

impl Component for Mob {
    const KIND: Kind = Kind::new("Mob");
}

/// A fixed place on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name.
    pub name: String,
    /// Whether the place blocks movement.
    pub blocked: bool,
}

impl Component for Place {
    const KIND: Kind = Kind::new("Place");
}

/// Creature or player health.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Maximum hit points.
    pub max: i32,
    /// Current hit points.
    pub current: i32,
}

impl Component for Health {
    const KIND: Kind = Kind::new("Health");
}

/// Relates an entity to a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// The room this entity is in.
    pub room_id: String,
}

impl Component for Room {
    const KIND: Kind = Kind::new("Room");
}

/// Doors link to doors by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// This door's id.
    pub door_id: String,
    /// The id of the door this one opens onto.
    pub to_door_id: String,
}

impl Component for Door {
    const KIND: Kind = Kind::new("Door");
}

/// Per-tick controller state for a controllable entity.
///
/// The controller system clears every flag at the start of a tick, then sets
/// the flags named by that tick's input events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controller {
    /// Move up this tick.
    pub up: bool,
    /// Move down this tick.
    pub down: bool,
    /// Move left this tick.
    pub left: bool,
    /// Move right this tick.
    pub right: bool,
    /// Pick up this tick.
    pub take: bool,
    /// Drop this tick.
    pub drop: bool,
    /// Interact this tick.
    pub action: bool,
}

impl Controller {
    /// Sets every flag to false.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sets the flag named by `action`.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Up => self.up = true,
            Action::Down => self.down = true,
            Action::Left => self.left = true,
            Action::Right => self.right = true,
            Action::Take => self.take = true,
            Action::Drop => self.drop = true,
            Action::Act => self.action = true,
        }
    }
}

impl Component for Controller {
    const KIND: Kind = Kind::new("Controller");
}
