//! Integration tests for the tick pipeline
//!
//! Ordering, store sharing, determinism, and effect collection.

use serde::{Deserialize, Serialize};
use undercroft::engine::{Pipeline, System};
use undercroft::foundation::Kind;
use undercroft::storage::{Component, ComponentStore};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Charge {
    level: i32,
}

impl Component for Charge {
    const KIND: Kind = Kind::new("Charge");
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn systems_run_in_fixed_registration_order() {
    struct Tagger(&'static str);

    impl System<(), String> for Tagger {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&mut self, _store: &mut ComponentStore, _input: &()) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    let mut pipeline = Pipeline::new()
        .with_system(Tagger("input"))
        .with_system(Tagger("movement"))
        .with_system(Tagger("combat"));

    let mut store = ComponentStore::new();
    let effects = pipeline.run_tick(&mut store, &());
    assert_eq!(effects, vec!["input", "movement", "combat"]);
}

#[test]
fn effects_concatenate_in_emission_order() {
    let twice = |_: &mut ComponentStore, _: &()| vec![1, 2];
    let once = |_: &mut ComponentStore, _: &()| vec![3];

    let mut pipeline = Pipeline::new().with_system(twice).with_system(once);
    let mut store = ComponentStore::new();

    assert_eq!(pipeline.run_tick(&mut store, &()), vec![1, 2, 3]);
}

// =============================================================================
// Store sharing
// =============================================================================

#[test]
fn a_system_observes_every_earlier_mutation_this_tick() {
    let charger = |store: &mut ComponentStore, _: &()| {
        for (id, charge) in store.join::<Charge>() {
            store.set(id, Charge { level: charge.level + 1 });
        }
        Vec::<i32>::new()
    };
    let reporter = |store: &mut ComponentStore, _: &()| {
        store
            .join::<Charge>()
            .into_iter()
            .map(|(_, c)| c.level)
            .collect::<Vec<i32>>()
    };

    let mut pipeline = Pipeline::new().with_system(charger).with_system(reporter);
    let mut store = ComponentStore::new();
    store.spawn(Charge { level: 0 });

    assert_eq!(pipeline.run_tick(&mut store, &()), vec![1]);
    assert_eq!(pipeline.run_tick(&mut store, &()), vec![2]);
}

#[test]
fn a_system_can_destroy_entities_found_by_its_own_join() {
    let reaper = |store: &mut ComponentStore, _: &()| {
        let mut reaped = Vec::new();
        for (id, charge) in store.join::<Charge>() {
            if charge.level == 0 {
                store.destroy(id);
                reaped.push(id);
            }
        }
        reaped
    };

    let mut pipeline = Pipeline::new().with_system(reaper);
    let mut store = ComponentStore::new();
    let dead = store.spawn(Charge { level: 0 });
    let alive = store.spawn(Charge { level: 5 });

    let effects = pipeline.run_tick(&mut store, &());
    assert_eq!(effects, vec![dead]);
    assert_eq!(store.entities(), vec![alive]);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn identical_state_and_input_give_identical_ticks() {
    let drain = |store: &mut ComponentStore, input: &i32| {
        let mut out = Vec::new();
        for (id, charge) in store.join::<Charge>() {
            let next = charge.level - *input;
            store.set(id, Charge { level: next });
            out.push(next);
        }
        out
    };

    let run = |seed: &[i32]| {
        let mut store = ComponentStore::new();
        for level in seed {
            store.spawn(Charge { level: *level });
        }
        let mut pipeline = Pipeline::new().with_system(drain);
        let effects = pipeline.run_tick(&mut store, &2);
        let levels: Vec<i32> = store.join::<Charge>().into_iter().map(|(_, c)| c.level).collect();
        (effects, levels)
    };

    assert_eq!(run(&[9, 4, 7]), run(&[9, 4, 7]));
}
