//! Opaque entity identifiers.
//!
//! An entity is identity only: it owns no storage of its own. Identifiers
//! are allocated from a store-local counter and are never reused within a
//! run, so a held `EntityId` can go stale (the entity was destroyed) but can
//! never silently refer to a different entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one logical game object.
///
/// Allocated by `ComponentStore::spawn`; the counter starts at zero and the
/// first allocated id is `e1`. Destroyed ids are not recycled.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an entity id from its raw counter value.
    ///
    /// Exposed for serialization and tests; live ids come from the store.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value behind this id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
