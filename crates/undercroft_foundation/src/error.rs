//! Error types for the Undercroft system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Absence of a component is not an error: the query-family store operations
//! (`get`, `get_mut`, `has`) return `Option`/`bool` and callers branch on it
//! routinely. The `Error` type covers the assert family (`require*`), where
//! absence indicates a logic bug at the call site, plus the serialization
//! surface.

use thiserror::Error;

use crate::entity::EntityId;
use crate::kind::Kind;

/// A specialized `Result` type for Undercroft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Undercroft operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An assert-family lookup found no component of the requested kind.
    ///
    /// A missing entity reports the same way: the store has no separate
    /// entity registry, so absence is absence at every granularity.
    #[error("entity {entity} has no {kind} component")]
    ComponentNotFound {
        /// The entity that was queried.
        entity: EntityId,
        /// The component kind that was not found.
        kind: Kind,
    },

    /// A record named a component kind that is not registered for decoding.
    #[error("unknown component kind: {0}")]
    UnknownKind(String),

    /// A record's fields did not decode into its component type.
    #[error("malformed {kind} record: {reason}")]
    MalformedRecord {
        /// The kind named by the record.
        kind: String,
        /// Decoder diagnostics.
        reason: String,
    },

    /// Component or save-file serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Save-file I/O failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a component-not-found error.
    #[must_use]
    pub fn component_not_found(entity: EntityId, kind: Kind) -> Self {
        Self::ComponentNotFound { entity, kind }
    }
}
