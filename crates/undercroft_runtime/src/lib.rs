//! Terminal driver and dungeon game for Undercroft.
//!
//! This crate provides:
//! - [`components`] - The dungeon's component types
//! - [`systems`] - The per-tick system pipeline (controller, player)
//! - [`DungeonState`] / [`DungeonEffect`] - Application state and its fold
//! - [`Driver`] - The raw-mode terminal loop
//! - [`save`] - Save-file round-tripping via component records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod components;
mod driver;
pub mod input;
mod render;
pub mod save;
mod screen;
mod state;
pub mod systems;
mod worldgen;

pub use driver::Driver;
pub use render::draw;
pub use screen::Screen;
pub use state::{DungeonEffect, DungeonState};
pub use worldgen::new_dungeon_store;
