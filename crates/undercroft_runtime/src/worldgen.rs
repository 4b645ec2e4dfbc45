//! Initial dungeon contents.

use undercroft_storage::ComponentStore;

use crate::components::{
    Controller, Door, Drawable, Health, Item, Loc, Mob, Place, Player, Room, Text, ROOM_HEIGHT,
    ROOM_WIDTH,
};

fn room(room_id: &str) -> Room {
    Room {
        room_id: room_id.to_string(),
    }
}

fn glyph(text: &str) -> Text {
    Text {
        text: text.to_string(),
    }
}

/// Builds the starting store: two rooms joined by a pair of doors.
#[must_use]
pub fn new_dungeon_store() -> ComponentStore {
    let mut store = ComponentStore::new();

    store.spawn((
        Player {
            player_id: "player1".to_string(),
        },
        Health { max: 10, current: 10 },
        Controller::default(),
        glyph("O"),
        Loc { x: 70, y: 10 },
        Drawable { layer: 10 },
        room("room1"),
    ));

    add_room1(&mut store);
    add_room2(&mut store);
    store
}

fn add_room1(store: &mut ComponentStore) {
    store.spawn((
        Item {
            cat: "gold".to_string(),
            name: "Gold Piece".to_string(),
            value: 10,
        },
        Loc { x: 12, y: 4 },
        glyph("$"),
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Item {
            cat: "gold".to_string(),
            name: "Dubloon".to_string(),
            value: 10,
        },
        Loc { x: 30, y: 8 },
        glyph("$"),
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Item {
            cat: "sword".to_string(),
            name: "Sword".to_string(),
            value: 30,
        },
        Loc { x: 32, y: 3 },
        glyph("/"),
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Place {
            name: "Fountain".to_string(),
            blocked: true,
        },
        Loc { x: 10, y: 0 },
        glyph("*"),
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Door {
            door_id: "door1".to_string(),
            to_door_id: "door2".to_string(),
        },
        Place {
            name: "Door".to_string(),
            blocked: false,
        },
        Loc {
            x: ROOM_WIDTH - 5,
            y: ROOM_HEIGHT - 1,
        },
        glyph("#"),
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Mob {
            cat: "enemy".to_string(),
            name: "Slime".to_string(),
        },
        Health { max: 3, current: 3 },
        glyph("@"),
        Loc {
            x: ROOM_WIDTH - 6,
            y: ROOM_HEIGHT - 3,
        },
        room("room1"),
        Drawable::default(),
    ));

    store.spawn((
        Mob {
            cat: "enemy".to_string(),
            name: "Slime".to_string(),
        },
        Health { max: 3, current: 3 },
        glyph("@"),
        Loc { x: 10, y: 4 },
        room("room1"),
        Drawable::default(),
    ));
}

fn add_room2(store: &mut ComponentStore) {
    store.spawn((
        Item {
            cat: "gold".to_string(),
            name: "Gold Piece".to_string(),
            value: 10,
        },
        Loc { x: 20, y: 10 },
        glyph("$"),
        room("room2"),
        Drawable::default(),
    ));

    store.spawn((
        Door {
            door_id: "door2".to_string(),
            to_door_id: "door1".to_string(),
        },
        Place {
            name: "Door".to_string(),
            blocked: false,
        },
        Loc { x: 4, y: 0 },
        glyph("#"),
        room("room2"),
        Drawable::default(),
    ));
}
