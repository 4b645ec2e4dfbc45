//! Integration tests for entity lifecycle
//!
//! Spawn, destroy, liveness, and the two-tier lookup API.

use undercroft::foundation::{EntityId, Error};
use undercroft::storage::ComponentStore;

use crate::common::{Health, Nameplate, Position};

// =============================================================================
// Spawn
// =============================================================================

#[test]
fn spawn_returns_fresh_ids() {
    let mut store = ComponentStore::new();
    let e1 = store.spawn(Position { x: 0, y: 0 });
    let e2 = store.spawn(Position { x: 1, y: 1 });
    assert_ne!(e1, e2);
}

#[test]
fn spawn_with_bundle_attaches_everything_at_once() {
    let mut store = ComponentStore::new();
    let e = store.spawn((
        Position { x: 70, y: 10 },
        Health { max: 10, current: 10 },
        Nameplate {
            name: "player".to_string(),
        },
    ));

    assert!(store.has::<Position>(e));
    assert!(store.has::<Health>(e));
    assert!(store.has::<Nameplate>(e));
}

#[test]
fn ids_are_not_reused_after_destroy() {
    let mut store = ComponentStore::new();
    let gone = store.spawn(Position { x: 0, y: 0 });
    store.destroy(gone);

    let fresh = store.spawn(Position { x: 0, y: 0 });
    assert_ne!(gone, fresh);
    assert!(fresh > gone);
}

// =============================================================================
// Liveness
// =============================================================================

#[test]
fn an_entity_is_live_while_it_has_a_component() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Position { x: 0, y: 0 });
    assert_eq!(store.entities(), vec![e]);

    store.remove::<Position>(e);
    assert!(store.entities().is_empty());
    assert!(store.is_empty());
}

#[test]
fn destroy_removes_every_kind_ever_attached() {
    let mut store = ComponentStore::new();
    let e = store.spawn((
        Position { x: 1, y: 2 },
        Health { max: 5, current: 5 },
        Nameplate {
            name: "slime".to_string(),
        },
    ));

    store.destroy(e);

    assert_eq!(store.get::<Position>(e), None);
    assert_eq!(store.get::<Health>(e), None);
    assert_eq!(store.get::<Nameplate>(e), None);
}

#[test]
fn destroy_is_idempotent() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Position { x: 1, y: 2 });

    store.destroy(e);
    store.destroy(e);

    assert!(store.is_empty());
}

#[test]
fn destroying_an_unknown_id_is_not_an_error() {
    let mut store = ComponentStore::new();
    store.destroy(EntityId::new(999));
    assert!(store.is_empty());
}

// =============================================================================
// Query vs assert lookups
// =============================================================================

#[test]
fn get_reports_absence_as_a_value() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Position { x: 0, y: 0 });
    assert!(store.get::<Health>(e).is_none());
}

#[test]
fn require_reports_absence_as_an_error() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Position { x: 0, y: 0 });

    let err = store.require::<Health>(e).unwrap_err();
    assert!(matches!(
        err,
        Error::ComponentNotFound { entity, .. } if entity == e
    ));
}

#[test]
fn missing_entity_reports_like_missing_component() {
    let store = ComponentStore::new();
    let ghost = EntityId::new(42);

    assert!(store.get::<Health>(ghost).is_none());
    assert!(store.require::<Health>(ghost).is_err());
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn views_read_through_to_the_latest_state() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Health { max: 10, current: 10 });

    store.require_mut::<Health>(e).unwrap().current = 3;

    let view = store.entity(e);
    assert_eq!(view.get::<Health>().unwrap().current, 3);
    assert!(view.is_live());
}

#[test]
fn views_of_destroyed_entities_fail_softly() {
    let mut store = ComponentStore::new();
    let e = store.spawn(Health { max: 10, current: 10 });
    store.destroy(e);

    let view = store.entity(e);
    assert!(!view.is_live());
    assert!(view.get::<Health>().is_none());
    assert!(view.require::<Health>().is_err());
}
