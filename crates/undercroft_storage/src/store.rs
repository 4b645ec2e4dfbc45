//! The component store: a two-level (kind, entity) map with typed joins.
//!
//! Components are stored per kind in id-ordered buckets. The bucket map is
//! keyed by `TypeId`, so kind-to-storage resolution happens at compile time
//! in the generic accessors; a small per-bucket function table covers the
//! operations that must work without knowing the component type, such as
//! destroying an entity across every bucket.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use undercroft_foundation::{EntityId, Error, Kind, Result};

use crate::component::{Component, ComponentSet};
use crate::record::{self, ComponentRecord};
use crate::view::EntityRef;

type AnyMap = dyn Any + Send + Sync;

/// One kind's storage: an id-ordered `BTreeMap<EntityId, C>` behind type
/// erasure, plus function pointers for the untyped operations. The pointers
/// are instantiated when the bucket is first created for a concrete `C`, so
/// each one downcasts to the exact map type it was built with.
struct Bucket {
    kind: Kind,
    map: Box<AnyMap>,
    remove: fn(&mut AnyMap, EntityId) -> bool,
    contains: fn(&AnyMap, EntityId) -> bool,
    ids: fn(&AnyMap) -> Vec<EntityId>,
    export: fn(&AnyMap, EntityId) -> Result<Option<ComponentRecord>>,
}

impl Bucket {
    fn new<C: Component>() -> Self {
        Self {
            kind: C::KIND,
            map: Box::new(BTreeMap::<EntityId, C>::new()),
            remove: |map, id| downcast_mut::<C>(map).remove(&id).is_some(),
            contains: |map, id| downcast::<C>(map).contains_key(&id),
            ids: |map| downcast::<C>(map).keys().copied().collect(),
            export: |map, id| {
                downcast::<C>(map)
                    .get(&id)
                    .map(|c| record::encode(id, c))
                    .transpose()
            },
        }
    }
}

fn downcast<C: Component>(map: &AnyMap) -> &BTreeMap<EntityId, C> {
    map.downcast_ref().expect("bucket holds its own component type")
}

fn downcast_mut<C: Component>(map: &mut AnyMap) -> &mut BTreeMap<EntityId, C> {
    map.downcast_mut().expect("bucket holds its own component type")
}

/// The single source of truth for what components exist on what entities.
///
/// An entity is *live* while it has at least one component and *gone*
/// otherwise; there is no separate entity registry. Ids are allocated from a
/// monotonic counter and never reused within a run.
///
/// The API comes in two tiers. The query family ([`get`], [`get_mut`],
/// [`has`]) reports absence as a value and never fails; the assert family
/// ([`require`], [`require_mut`]) returns an error naming the entity and
/// kind, and is meant for call sites that have already proven presence via a
/// query or join.
///
/// [`get`]: ComponentStore::get
/// [`get_mut`]: ComponentStore::get_mut
/// [`has`]: ComponentStore::has
/// [`require`]: ComponentStore::require
/// [`require_mut`]: ComponentStore::require_mut
#[derive(Default)]
pub struct ComponentStore {
    buckets: HashMap<TypeId, Bucket>,
    next_id: u64,
}

impl ComponentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh entity id and attaches the given component set.
    ///
    /// All components are attached before this returns, so no caller can
    /// observe the entity with a subset of its initial components. Spawning
    /// with `()` allocates an id that is *gone* until something is `set` on
    /// it.
    pub fn spawn<S: ComponentSet>(&mut self, components: S) -> EntityId {
        self.next_id += 1;
        let id = EntityId::new(self.next_id);
        components.attach(self, id);
        id
    }

    /// Removes every component attached to `entity`, across every kind.
    ///
    /// Idempotent: destroying an id that is already gone finds nothing to
    /// remove and is not an error. Outstanding [`EntityRef`] views of the id
    /// observe absence afterward.
    pub fn destroy(&mut self, entity: EntityId) {
        for bucket in self.buckets.values_mut() {
            (bucket.remove)(bucket.map.as_mut(), entity);
        }
    }

    /// Stores `component` under `(kind-of(component), entity)`.
    ///
    /// Last write wins: at most one component of a given kind is resident
    /// per entity, and setting again replaces the prior value.
    pub fn set<C: Component>(&mut self, entity: EntityId, component: C) {
        let bucket = self
            .buckets
            .entry(TypeId::of::<C>())
            .or_insert_with(Bucket::new::<C>);
        downcast_mut::<C>(bucket.map.as_mut()).insert(entity, component);
    }

    /// Returns the entity's component of kind `C`, or `None` if absent.
    #[must_use]
    pub fn get<C: Component>(&self, entity: EntityId) -> Option<&C> {
        self.bucket::<C>()?.get(&entity)
    }

    /// Returns a mutable borrow of the entity's component of kind `C`.
    ///
    /// In-place mutation through this borrow is the supported way for a
    /// system to update component state mid-tick.
    #[must_use]
    pub fn get_mut<C: Component>(&mut self, entity: EntityId) -> Option<&mut C> {
        self.bucket_mut::<C>()?.get_mut(&entity)
    }

    /// Like [`get`](ComponentStore::get), but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentNotFound`] naming the entity and kind. Use
    /// only where presence was already established; a miss here is a logic
    /// bug at the call site, not a condition to retry.
    pub fn require<C: Component>(&self, entity: EntityId) -> Result<&C> {
        self.get::<C>(entity)
            .ok_or_else(|| Error::component_not_found(entity, C::KIND))
    }

    /// Like [`get_mut`](ComponentStore::get_mut), but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentNotFound`] naming the entity and kind.
    pub fn require_mut<C: Component>(&mut self, entity: EntityId) -> Result<&mut C> {
        self.get_mut::<C>(entity)
            .ok_or_else(|| Error::component_not_found(entity, C::KIND))
    }

    /// Removes the `(C, entity)` entry if present; no-op otherwise.
    pub fn remove<C: Component>(&mut self, entity: EntityId) {
        if let Some(map) = self.bucket_mut::<C>() {
            map.remove(&entity);
        }
    }

    /// Returns true if the entity has a component of kind `C`.
    #[must_use]
    pub fn has<C: Component>(&self, entity: EntityId) -> bool {
        self.bucket::<C>().is_some_and(|m| m.contains_key(&entity))
    }

    /// Returns every `(id, component)` pair of kind `A`, in ascending id
    /// order.
    ///
    /// Like the multi-kind joins, the result is an owned snapshot: callers
    /// may mutate or destroy any participant while walking the rows.
    #[must_use]
    pub fn join<A: Component>(&self) -> Vec<(EntityId, A)> {
        let Some(first) = self.bucket::<A>() else {
            return Vec::new();
        };
        first.iter().map(|(&id, a)| (id, a.clone())).collect()
    }

    /// Returns one row per entity that has both an `A` and a `B` component.
    ///
    /// Rows follow the ascending id order of the `A` bucket and the order is
    /// stable between two calls with no intervening mutation. Each candidate
    /// id from the `A` bucket is probed against the `B` bucket, so the cost
    /// is proportional to the `A` population, not the whole store.
    #[must_use]
    pub fn join2<A: Component, B: Component>(&self) -> Vec<(EntityId, A, B)> {
        let mut rows = Vec::new();
        let Some(first) = self.bucket::<A>() else {
            return rows;
        };
        let bs = self.bucket::<B>();
        for (&id, a) in first {
            let Some(b) = bs.and_then(|m| m.get(&id)) else {
                continue;
            };
            rows.push((id, a.clone(), b.clone()));
        }
        rows
    }

    /// Three-kind variant of [`join2`](ComponentStore::join2).
    ///
    /// Probes stop at the first missing kind, in listed order.
    #[must_use]
    pub fn join3<A: Component, B: Component, C: Component>(
        &self,
    ) -> Vec<(EntityId, A, B, C)> {
        let mut rows = Vec::new();
        let Some(first) = self.bucket::<A>() else {
            return rows;
        };
        let bs = self.bucket::<B>();
        let cs = self.bucket::<C>();
        for (&id, a) in first {
            let Some(b) = bs.and_then(|m| m.get(&id)) else {
                continue;
            };
            let Some(c) = cs.and_then(|m| m.get(&id)) else {
                continue;
            };
            rows.push((id, a.clone(), b.clone(), c.clone()));
        }
        rows
    }

    /// Four-kind variant of [`join2`](ComponentStore::join2).
    #[must_use]
    pub fn join4<A: Component, B: Component, C: Component, D: Component>(
        &self,
    ) -> Vec<(EntityId, A, B, C, D)> {
        let mut rows = Vec::new();
        let Some(first) = self.bucket::<A>() else {
            return rows;
        };
        let bs = self.bucket::<B>();
        let cs = self.bucket::<C>();
        let ds = self.bucket::<D>();
        for (&id, a) in first {
            let Some(b) = bs.and_then(|m| m.get(&id)) else {
                continue;
            };
            let Some(c) = cs.and_then(|m| m.get(&id)) else {
                continue;
            };
            let Some(d) = ds.and_then(|m| m.get(&id)) else {
                continue;
            };
            rows.push((id, a.clone(), b.clone(), c.clone(), d.clone()));
        }
        rows
    }

    /// Returns every live entity id (at least one component), ascending,
    /// without duplicates.
    #[must_use]
    pub fn entities(&self) -> Vec<EntityId> {
        let mut ids = BTreeSet::new();
        for bucket in self.buckets.values() {
            ids.extend((bucket.ids)(bucket.map.as_ref()));
        }
        ids.into_iter().collect()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities().len()
    }

    /// Returns true if no entity is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets
            .values()
            .all(|b| (b.ids)(b.map.as_ref()).is_empty())
    }

    /// Returns a read-through view of one entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> EntityRef<'_> {
        EntityRef::new(self, id)
    }

    /// Serializes every component attached to `entity` into flat records,
    /// ordered by kind name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if a component fails to encode.
    pub fn export(&self, entity: EntityId) -> Result<Vec<ComponentRecord>> {
        let mut buckets: Vec<&Bucket> = self.buckets.values().collect();
        buckets.sort_by_key(|b| b.kind.name());
        let mut records = Vec::new();
        for bucket in buckets {
            if let Some(rec) = (bucket.export)(bucket.map.as_ref(), entity)? {
                records.push(rec);
            }
        }
        Ok(records)
    }

    /// Serializes the whole store, entity by entity in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if a component fails to encode.
    pub fn export_all(&self) -> Result<Vec<ComponentRecord>> {
        let mut records = Vec::new();
        for id in self.entities() {
            records.extend(self.export(id)?);
        }
        Ok(records)
    }

    /// Ensures future spawns allocate ids past `id`. Used when restoring
    /// records so a loaded store never hands out an id it already contains.
    pub(crate) fn reserve_through(&mut self, id: EntityId) {
        self.next_id = self.next_id.max(id.raw());
    }

    fn bucket<C: Component>(&self) -> Option<&BTreeMap<EntityId, C>> {
        self.buckets
            .get(&TypeId::of::<C>())
            .map(|b| downcast::<C>(b.map.as_ref()))
    }

    fn bucket_mut<C: Component>(&mut self) -> Option<&mut BTreeMap<EntityId, C>> {
        self.buckets
            .get_mut(&TypeId::of::<C>())
            .map(|b| downcast_mut::<C>(b.map.as_mut()))
    }
}
