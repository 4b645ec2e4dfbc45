//! Grid coordinates for the terminal surface.

use serde::{Deserialize, Serialize};

/// An `x, y` coordinate pair on the character grid.
///
/// Used by the render path for cursor addressing and offsets. Game entities
/// keep their own location component; `Pos` is the plain value that crosses
/// the boundary into drawing code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Column, increasing rightward.
    pub x: i32,
    /// Row, increasing downward.
    pub y: i32,
}

impl Pos {
    /// Creates a position from coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by another position.
    #[must_use]
    pub const fn offset(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
