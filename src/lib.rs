//! Undercroft - Terminal dungeon crawler on a minimal typed entity store
//!
//! This crate re-exports all layers of the Undercroft system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: undercroft_runtime    — terminal driver, dungeon game, saves
//! Layer 2: undercroft_engine     — system contract, tick pipeline
//! Layer 1: undercroft_storage    — component store, typed joins, records
//! Layer 0: undercroft_foundation — core types (EntityId, Kind, Error)
//! ```

pub use undercroft_engine as engine;
pub use undercroft_foundation as foundation;
pub use undercroft_runtime as runtime;
pub use undercroft_storage as storage;
