//! Read-through entity views.

use undercroft_foundation::{EntityId, Result};

use crate::component::Component;
use crate::store::ComponentStore;

/// A transient handle for reading one entity's components by kind.
///
/// The view never owns or caches anything: every lookup goes back to the
/// store, so it always observes the latest state. A view of an entity that
/// has since been destroyed simply reports absence (query family) or
/// `ComponentNotFound` (assert family). Holding one across mutations is
/// safe, just possibly stale in the sense that the entity may be gone.
#[derive(Copy, Clone)]
pub struct EntityRef<'a> {
    store: &'a ComponentStore,
    id: EntityId,
}

impl<'a> EntityRef<'a> {
    pub(crate) fn new(store: &'a ComponentStore, id: EntityId) -> Self {
        Self { store, id }
    }

    /// The entity this view reads.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the entity's component of kind `C`, or `None`.
    #[must_use]
    pub fn get<C: Component>(&self) -> Option<&'a C> {
        self.store.get::<C>(self.id)
    }

    /// Like [`get`](EntityRef::get), but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`undercroft_foundation::Error::ComponentNotFound`] naming
    /// this entity and the requested kind.
    pub fn require<C: Component>(&self) -> Result<&'a C> {
        self.store.require::<C>(self.id)
    }

    /// Returns true if the entity has a component of kind `C`.
    #[must_use]
    pub fn has<C: Component>(&self) -> bool {
        self.store.has::<C>(self.id)
    }

    /// Returns true if the entity still has at least one component.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.store.entities().binary_search(&self.id).is_ok()
    }
}
