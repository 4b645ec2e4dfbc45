//! The component trait and spawn bundles.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use undercroft_foundation::{EntityId, Kind};

use crate::store::ComponentStore;

/// A typed, structured data value attachable to exactly one entity at a time.
///
/// Comparisons are structural (`PartialEq`), never by object identity: once a
/// value is stored it is addressed only via its `(kind, entity)` pair. The
/// store takes components by value, so attaching "the same" value to a second
/// entity always goes through an explicit `clone()` and the two copies are
/// independently mutable.
///
/// The serde bounds back the flat-record serialization surface; every
/// component type derives `Serialize`/`Deserialize` alongside the usual
/// data-type derives.
pub trait Component:
    Clone + fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Stable logical name for this component kind.
    ///
    /// Used in error reports and serialized records; storage itself resolves
    /// kinds to buckets by `TypeId`.
    const KIND: Kind;
}

/// An initial set of components handed to [`ComponentStore::spawn`].
///
/// Implemented for single components and for tuples up to arity 8, so an
/// entity can be created with all of its components in one call; no reader
/// can ever observe it half-built.
pub trait ComponentSet {
    /// Attaches every component in the set to `entity`.
    fn attach(self, store: &mut ComponentStore, entity: EntityId);
}

impl ComponentSet for () {
    fn attach(self, _store: &mut ComponentStore, _entity: EntityId) {}
}

impl<C: Component> ComponentSet for C {
    fn attach(self, store: &mut ComponentStore, entity: EntityId) {
        store.set(entity, self);
    }
}

macro_rules! component_set_tuple {
    ($($comp:ident),+) => {
        impl<$($comp: Component),+> ComponentSet for ($($comp,)+) {
            #[allow(non_snake_case)]
            fn attach(self, store: &mut ComponentStore, entity: EntityId) {
                let ($($comp,)+) = self;
                $(store.set(entity, $comp);)+
            }
        }
    };
}

component_set_tuple!(A);
component_set_tuple!(A, B);
component_set_tuple!(A, B, C);
component_set_tuple!(A, B, C, D);
component_set_tuple!(A, B, C, D, E);
component_set_tuple!(A, B, C, D, E, F);
component_set_tuple!(A, B, C, D, E, F, G);
component_set_tuple!(A, B, C, D, E, F, G, H);
