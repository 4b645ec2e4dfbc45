//! Save-file round trips over the real game.

use undercroft::runtime::components::{Health, Loc, Player};
use undercroft::runtime::input::{Action, DungeonInput};
use undercroft::runtime::save;
use undercroft::runtime::systems::dungeon_pipeline;
use undercroft::runtime::DungeonState;

#[test]
fn a_fresh_game_round_trips() {
    let state = DungeonState::new();

    let restored = save::restore(&save::snapshot(&state).unwrap()).unwrap();

    assert_eq!(restored.store.entities(), state.store.entities());
    assert_eq!(restored.store.join::<Player>(), state.store.join::<Player>());
    assert_eq!(restored.store.join::<Health>(), state.store.join::<Health>());
    assert_eq!(restored.messages, state.messages);
}

#[test]
fn a_played_game_round_trips_mid_session() {
    let mut state = DungeonState::new();
    let mut pipeline = dungeon_pipeline();

    // Walk a few steps so the save captures a mutated store.
    for action in [Action::Left, Action::Left, Action::Up] {
        let effects = pipeline.run_tick(
            &mut state.store,
            &DungeonInput::single("player1", action),
        );
        state.apply(effects);
    }

    let restored = save::restore(&save::snapshot(&state).unwrap()).unwrap();

    assert_eq!(
        restored.store.join2::<Player, Loc>(),
        state.store.join2::<Player, Loc>()
    );
    assert_eq!(restored.current_room_id, state.current_room_id);

    // The restored game keeps playing: spawns use fresh ids.
    let mut continued = restored;
    let spawned = continued.store.spawn(());
    assert!(!state.store.entities().contains(&spawned));
}

#[test]
fn bytes_and_files_agree() {
    let state = DungeonState::new();
    let snapshot = save::snapshot(&state).unwrap();

    let bytes = save::to_bytes(&snapshot).unwrap();
    let reloaded = save::from_bytes(&bytes).unwrap();

    assert_eq!(reloaded.records, snapshot.records);
    assert_eq!(reloaded.current_room_id, snapshot.current_room_id);
}
