//! Component types shared by the storage tests.

use serde::{Deserialize, Serialize};
use undercroft::foundation::Kind;
use undercroft::storage::Component;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Component for Position {
    const KIND: Kind = Kind::new("Position");
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub max: i32,
    pub current: i32,
}

impl Component for Health {
    const KIND: Kind = Kind::new("Health");
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nameplate {
    pub name: String,
}

impl Component for Nameplate {
    const KIND: Kind = Kind::new("Nameplate");
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor;

impl Component for Anchor {
    const KIND: Kind = Kind::new("Anchor");
}
