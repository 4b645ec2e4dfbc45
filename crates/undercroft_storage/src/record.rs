//! Flat-record serialization for components.
//!
//! A [`ComponentRecord`] is the wire-neutral form of one attached component:
//! its kind name, its owning entity id, and a flat field map. Records are
//! what save files and tests round-trip; the store itself never touches
//! files or formats.
//!
//! Decoding is gated on registration, mirroring how kinds are otherwise
//! closed at compile time: a [`ComponentRegistry`] maps kind names back to
//! typed decode thunks, and a record naming an unregistered kind is an
//! [`Error::UnknownKind`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use undercroft_foundation::{EntityId, Error, Result};

use crate::component::Component;
use crate::store::ComponentStore;

/// The flat key-value form of one attached component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// The component's kind name.
    pub kind: String,
    /// The entity the component was attached to.
    pub entity: EntityId,
    /// The component's fields.
    pub fields: Map<String, Value>,
}

/// Serializes a component into a flat record owned by `entity`.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the component does not serialize, or
/// serializes to something other than a field map (components are structs;
/// field-less markers encode as an empty map).
pub fn encode<C: Component>(entity: EntityId, component: &C) -> Result<ComponentRecord> {
    let value =
        serde_json::to_value(component).map_err(|e| Error::Serialization(e.to_string()))?;
    let fields = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(Error::Serialization(format!(
                "component {} serialized to non-record value: {other}",
                C::KIND
            )));
        }
    };
    Ok(ComponentRecord {
        kind: C::KIND.name().to_string(),
        entity,
        fields,
    })
}

type DecodeFn = fn(&mut ComponentStore, &ComponentRecord) -> Result<()>;

/// Maps kind names to typed decode thunks.
///
/// Register every component type an application persists, once, at startup;
/// decoding then dispatches on the record's kind name.
#[derive(Default)]
pub struct ComponentRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers kind `C` for decoding. Registering twice is harmless.
    pub fn register<C: Component>(&mut self) {
        self.decoders.insert(C::KIND.name(), |store, record| {
            let value = Value::Object(record.fields.clone());
            let component: C =
                serde_json::from_value(value).map_err(|e| Error::MalformedRecord {
                    kind: record.kind.clone(),
                    reason: e.to_string(),
                })?;
            store.reserve_through(record.entity);
            store.set(record.entity, component);
            Ok(())
        });
    }

    /// Decodes one record back into the store, under the record's own
    /// (kind, entity) address.
    ///
    /// The store's id counter is advanced past the record's entity id, so a
    /// restored store never spawns an id it already contains.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownKind`] if the kind was never registered,
    /// [`Error::MalformedRecord`] if the fields do not decode.
    pub fn decode(&self, store: &mut ComponentStore, record: &ComponentRecord) -> Result<EntityId> {
        let decode = self
            .decoders
            .get(record.kind.as_str())
            .ok_or_else(|| Error::UnknownKind(record.kind.clone()))?;
        decode(store, record)?;
        Ok(record.entity)
    }

    /// Decodes a batch of records in order.
    ///
    /// # Errors
    ///
    /// Fails on the first undecodable record; earlier records stay applied.
    pub fn decode_all(&self, store: &mut ComponentStore, records: &[ComponentRecord]) -> Result<()> {
        for record in records {
            self.decode(store, record)?;
        }
        Ok(())
    }
}
