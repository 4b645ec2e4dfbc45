//! Save-file round-tripping using `MessagePack`.
//!
//! A save is the store flattened into component records plus the app-level
//! state the fold maintains. Loading decodes the records through the game's
//! component registry, so a restored store observes structurally equal
//! components under the same entity ids and keeps allocating fresh ids past
//! them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use undercroft_foundation::{Error, Result};
use undercroft_storage::{ComponentRecord, ComponentRegistry, ComponentStore};

use crate::components::{
    Controller, Door, Drawable, Health, Item, Loc, Mob, Place, Player, Room, Text,
};
use crate::state::DungeonState;

/// Everything a save file holds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveGame {
    /// The whole store, as flat records.
    pub records: Vec<ComponentRecord>,
    /// The player this terminal controls.
    pub my_player_id: String,
    /// Message log.
    pub messages: Vec<String>,
    /// The room the ui currently shows.
    pub current_room_id: String,
}

/// The registry covering every dungeon component kind.
#[must_use]
pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register::<Loc>();
    registry.register::<Text>();
    registry.register::<Drawable>();
    registry.register::<Item>();
    registry.register::<Player>();
    registry.register::<Mob>();
    registry.register::<Place>();
    registry.register::<Health>();
    registry.register::<Room>();
    registry.register::<Door>();
    registry.register::<Controller>();
    registry
}

/// Captures the current game as a save value.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if a component fails to encode.
pub fn snapshot(state: &DungeonState) -> Result<SaveGame> {
    Ok(SaveGame {
        records: state.store.export_all()?,
        my_player_id: state.my_player_id.clone(),
        messages: state.messages.clone(),
        current_room_id: state.current_room_id.clone(),
    })
}

/// Rebuilds a game state from a save value.
///
/// # Errors
///
/// Returns [`Error::UnknownKind`] or [`Error::MalformedRecord`] if a record
/// does not decode.
pub fn restore(save: &SaveGame) -> Result<DungeonState> {
    let mut store = ComponentStore::new();
    registry().decode_all(&mut store, &save.records)?;
    Ok(DungeonState {
        store,
        my_player_id: save.my_player_id.clone(),
        messages: save.messages.clone(),
        current_room_id: save.current_room_id.clone(),
    })
}

/// Serializes a save to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(save: &SaveGame) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(save).map_err(|e| Error::Serialization(e.to_string()))
}

/// Deserializes a save from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SaveGame> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
}

/// Saves a game to a file, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &DungeonState, path: P) -> Result<()> {
    let save = snapshot(state)?;
    let bytes = to_bytes(&save)?;

    let file = File::create(path.as_ref()).map_err(|e| {
        Error::Io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::Io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    writer.flush().map_err(|e| {
        Error::Io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(())
}

/// Loads a game from a save file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DungeonState> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::Io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::Io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    restore(&from_bytes(&bytes)?)
}
