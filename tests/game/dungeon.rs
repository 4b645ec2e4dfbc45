//! End-to-end dungeon scenarios
//!
//! Each test drives the real system pipeline against the shipped dungeon or
//! a purpose-built store, then checks both store state and folded effects.

use undercroft::foundation::EntityId;
use undercroft::runtime::components::{
    Controller, Door, Health, Loc, Mob, Place, Player, Room,
};
use undercroft::runtime::input::{Action, ControlEvent, DungeonInput};
use undercroft::runtime::systems::dungeon_pipeline;
use undercroft::runtime::{new_dungeon_store, DungeonEffect, DungeonState};
use undercroft::storage::ComponentStore;

fn player(store: &ComponentStore, player_id: &str) -> EntityId {
    store
        .join::<Player>()
        .into_iter()
        .find(|(_, p)| p.player_id == player_id)
        .map(|(id, _)| id)
        .expect("player exists")
}

// =============================================================================
// Controller routing
// =============================================================================

#[test]
fn input_reaches_only_the_acting_player() {
    let mut store = ComponentStore::new();
    let a = store.spawn((
        Player {
            player_id: "player1".to_string(),
        },
        Controller::default(),
        Room {
            room_id: "room1".to_string(),
        },
        Loc { x: 5, y: 5 },
    ));
    let b = store.spawn((
        Player {
            player_id: "player2".to_string(),
        },
        Controller::default(),
        Room {
            room_id: "room1".to_string(),
        },
        Loc { x: 40, y: 5 },
    ));

    let mut pipeline = dungeon_pipeline();
    pipeline.run_tick(&mut store, &DungeonInput::single("player1", Action::Right));

    assert!(store.get::<Controller>(a).unwrap().right);
    assert!(!store.get::<Controller>(b).unwrap().right);
    assert_eq!(store.get::<Loc>(a), Some(&Loc { x: 6, y: 5 }));
    assert_eq!(store.get::<Loc>(b), Some(&Loc { x: 40, y: 5 }));
}

// =============================================================================
// Combat
// =============================================================================

#[test]
fn a_mob_at_one_health_dies_and_leaves_every_join() {
    let mut store = new_dungeon_store();
    let p = player(&store, "player1");

    // Stand the player next to a fresh one-hp mob.
    store.set(p, Loc { x: 50, y: 5 });
    let mob = store.spawn((
        Mob {
            cat: "enemy".to_string(),
            name: "Wisp".to_string(),
        },
        Health { max: 1, current: 1 },
        Loc { x: 51, y: 5 },
        Room {
            room_id: "room1".to_string(),
        },
    ));

    let mut pipeline = dungeon_pipeline();
    let effects = pipeline.run_tick(&mut store, &DungeonInput::single("player1", Action::Right));

    assert_eq!(
        effects,
        vec![DungeonEffect::Message("Wisp defeated!".to_string())]
    );
    assert_eq!(store.get::<Health>(mob), None);
    assert!(
        !store
            .join2::<Health, Mob>()
            .iter()
            .any(|(id, _, _)| *id == mob)
    );
}

#[test]
fn combat_whittles_health_by_one_per_tick() {
    let mut store = new_dungeon_store();
    let p = player(&store, "player1");

    store.set(p, Loc { x: 50, y: 5 });
    let mob = store.spawn((
        Mob {
            cat: "enemy".to_string(),
            name: "Slime".to_string(),
        },
        Health { max: 3, current: 3 },
        Loc { x: 51, y: 5 },
        Room {
            room_id: "room1".to_string(),
        },
    ));

    let mut pipeline = dungeon_pipeline();
    let input = DungeonInput::single("player1", Action::Right);

    pipeline.run_tick(&mut store, &input);
    assert_eq!(store.get::<Health>(mob).unwrap().current, 2);

    pipeline.run_tick(&mut store, &input);
    assert_eq!(store.get::<Health>(mob).unwrap().current, 1);

    // The blocked move never lands while the mob stands.
    assert_eq!(store.get::<Loc>(p), Some(&Loc { x: 50, y: 5 }));

    pipeline.run_tick(&mut store, &input);
    assert_eq!(store.get::<Health>(mob), None);
}

// =============================================================================
// Doors
// =============================================================================

#[test]
fn acting_at_a_door_relocates_and_emits_in_order() {
    let mut store = new_dungeon_store();
    let p = player(&store, "player1");

    // Stand the player on door1 and act.
    let (_, door1, door1_loc) = store
        .join2::<Door, Loc>()
        .into_iter()
        .find(|(_, d, _)| d.door_id == "door1")
        .expect("door1 exists");
    store.set(p, door1_loc);

    let (_, _, door2_room, door2_loc) = store
        .join3::<Door, Room, Loc>()
        .into_iter()
        .find(|(_, d, _, _)| d.door_id == door1.to_door_id)
        .expect("door2 exists");

    let mut pipeline = dungeon_pipeline();
    let effects = pipeline.run_tick(&mut store, &DungeonInput::single("player1", Action::Act));

    // Message first, then the room change, in one tick.
    assert_eq!(
        effects,
        vec![
            DungeonEffect::Message("Opened door door1".to_string()),
            DungeonEffect::RoomChange("room2".to_string()),
        ]
    );
    assert_eq!(store.get::<Loc>(p), Some(&door2_loc));
    assert_eq!(store.get::<Room>(p).unwrap().room_id, door2_room.room_id);
}

#[test]
fn the_fold_applies_door_effects_to_app_state() {
    let mut state = DungeonState::new();
    let p = player(&state.store, "player1");

    let (_, _, door1_loc) = state
        .store
        .join2::<Door, Loc>()
        .into_iter()
        .find(|(_, d, _)| d.door_id == "door1")
        .expect("door1 exists");
    state.store.set(p, door1_loc);

    let mut pipeline = dungeon_pipeline();
    let effects = pipeline.run_tick(
        &mut state.store,
        &DungeonInput::single("player1", Action::Act),
    );
    state.apply(effects);

    assert_eq!(state.current_room_id, "room2");
    assert_eq!(
        state.messages.last().map(String::as_str),
        Some("Opened door door1")
    );
}

// =============================================================================
// Obstacles
// =============================================================================

#[test]
fn blocked_places_bounce_and_report_once() {
    let mut store = new_dungeon_store();
    let p = player(&store, "player1");

    // The fountain blocks at (10, 0); approach from the right.
    let (_, fountain_loc) = store
        .join2::<Place, Loc>()
        .into_iter()
        .find(|(_, place, _)| place.blocked)
        .map(|(id, _, loc)| (id, loc))
        .expect("a blocked place exists");
    store.set(
        p,
        Loc {
            x: fountain_loc.x + 1,
            y: fountain_loc.y,
        },
    );

    let mut pipeline = dungeon_pipeline();
    let effects = pipeline.run_tick(&mut store, &DungeonInput::single("player1", Action::Left));

    assert_eq!(
        effects,
        vec![DungeonEffect::Message(
            "Bonk! Fountain blocks the way.".to_string()
        )]
    );
    assert_eq!(
        store.get::<Loc>(p),
        Some(&Loc {
            x: fountain_loc.x + 1,
            y: fountain_loc.y
        })
    );
}

// =============================================================================
// Multi-event input
// =============================================================================

#[test]
fn one_tick_can_carry_several_events() {
    let mut store = ComponentStore::new();
    let p = store.spawn((
        Player {
            player_id: "player1".to_string(),
        },
        Controller::default(),
        Room {
            room_id: "room1".to_string(),
        },
        Loc { x: 5, y: 5 },
    ));

    let input = DungeonInput {
        events: vec![
            ControlEvent {
                player_id: "player1".to_string(),
                action: Action::Right,
            },
            ControlEvent {
                player_id: "player1".to_string(),
                action: Action::Down,
            },
        ],
    };

    let mut pipeline = dungeon_pipeline();
    pipeline.run_tick(&mut store, &input);

    assert_eq!(store.get::<Loc>(p), Some(&Loc { x: 6, y: 6 }));
}
