//! Player movement, collisions, doors, and combat.

use undercroft_foundation::EntityId;
use undercroft_storage::ComponentStore;

use crate::components::{
    Controller, Door, Health, Item, Loc, Mob, Place, Player, Room, ROOM_HEIGHT, ROOM_WIDTH,
};
use crate::input::DungeonInput;
use crate::state::DungeonEffect;

const ATTACK_DAMAGE: i32 = 1;

/// Moves each player by its controller flags, then resolves whatever the
/// player ran into: blocked places bounce, doors traverse on `act`, mobs
/// take a hit.
pub fn player_system(store: &mut ComponentStore, _input: &DungeonInput) -> Vec<DungeonEffect> {
    let mut effects = Vec::new();

    for (player_id, _player, con, room, loc) in store.join4::<Player, Controller, Room, Loc>() {
        let backup = loc.clone();
        let mut moved = loc;
        step(&mut moved, &con);
        store.set(player_id, moved.clone());

        for other in entities_at(store, player_id, &room, &moved) {
            if let Some(place) = store.get::<Place>(other).cloned() {
                if place.blocked {
                    // Undo the move; the place stands.
                    store.set(player_id, backup.clone());
                    effects.push(DungeonEffect::Message(format!(
                        "Bonk! {} blocks the way.",
                        place.name
                    )));
                } else if con.action {
                    if let Some(door) = store.get::<Door>(other).cloned() {
                        effects.extend(traverse_door(store, player_id, &door));
                    }
                }
            }

            if store.get::<Item>(other).is_some() {
                // TODO: pick the item up once carrying exists
            }

            if let Some(mob) = store.get::<Mob>(other).cloned() {
                // A mob occupies its cell; the move does not land.
                store.set(player_id, backup.clone());
                effects.extend(attack_mob(store, other, &mob));
            }
        }
    }

    effects
}

/// Applies the controller's direction flags, clamped to the room bounds.
fn step(loc: &mut Loc, con: &Controller) {
    if con.right {
        loc.x = (loc.x + 1).min(ROOM_WIDTH - 1);
    }
    if con.left {
        loc.x = (loc.x - 1).max(0);
    }
    if con.up {
        loc.y = (loc.y - 1).max(0);
    }
    if con.down {
        loc.y = (loc.y + 1).min(ROOM_HEIGHT - 1);
    }
}

/// Every other entity standing on `loc` in the same room.
fn entities_at(
    store: &ComponentStore,
    this_entity: EntityId,
    room: &Room,
    loc: &Loc,
) -> Vec<EntityId> {
    store
        .join2::<Room, Loc>()
        .into_iter()
        .filter(|(id, other_room, other_loc)| {
            *id != this_entity
                && other_room.room_id == room.room_id
                && other_loc.x == loc.x
                && other_loc.y == loc.y
        })
        .map(|(id, _, _)| id)
        .collect()
}

/// Relocates the player to the destination door's position and room.
///
/// Emits the door message first, then the room change, so the fold shows the
/// message before the scene switches.
fn traverse_door(
    store: &mut ComponentStore,
    player_id: EntityId,
    door: &Door,
) -> Vec<DungeonEffect> {
    let dest = store
        .join3::<Room, Door, Loc>()
        .into_iter()
        .find(|(_, _, d, _)| d.door_id == door.to_door_id);

    let Some((_, dest_room, _, dest_loc)) = dest else {
        log::warn!("door {} leads nowhere ({})", door.door_id, door.to_door_id);
        return Vec::new();
    };

    store.set(
        player_id,
        Loc {
            x: dest_loc.x,
            y: dest_loc.y,
        },
    );
    store.set(player_id, dest_room.clone());

    vec![
        DungeonEffect::Message(format!("Opened door {}", door.door_id)),
        DungeonEffect::RoomChange(dest_room.room_id),
    ]
}

/// One attack against a mob: fixed damage, destroy at zero health.
fn attack_mob(store: &mut ComponentStore, mob_id: EntityId, mob: &Mob) -> Vec<DungeonEffect> {
    match store.require_mut::<Health>(mob_id) {
        Ok(health) => {
            health.current = (health.current - ATTACK_DAMAGE).max(0);
            if health.current == 0 {
                store.destroy(mob_id);
                vec![DungeonEffect::Message(format!("{} defeated!", mob.name))]
            } else {
                vec![DungeonEffect::Message(format!(
                    "{} hit for {ATTACK_DAMAGE}",
                    mob.name
                ))]
            }
        }
        Err(err) => {
            // A mob without health is a content bug; skip this encounter
            // rather than killing the tick.
            log::warn!("attack skipped: {err}");
            Vec::new()
        }
    }
}
