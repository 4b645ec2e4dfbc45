//! System contract and tick pipeline for Undercroft.
//!
//! This crate provides:
//! - [`System`] - The per-tick unit of game logic
//! - [`Pipeline`] - Ordered system execution with side-effect collection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod system;
mod tick;

pub use system::System;
pub use tick::Pipeline;
