//! Read-only rendering of the current room.

use std::io::Write;

use undercroft_foundation::{Pos, Result};

use crate::components::{Drawable, Loc, Player, Room, Text, ROOM_HEIGHT, ROOM_WIDTH};
use crate::screen::Screen;
use crate::state::DungeonState;

/// Paints the frame, the current room's entities, and the message log.
///
/// Rendering only joins and reads; it never mutates the store.
///
/// # Errors
///
/// Returns [`undercroft_foundation::Error::Io`] if the screen rejects a
/// drawing command.
pub fn draw<W: Write>(state: &DungeonState, screen: &mut Screen<W>) -> Result<()> {
    draw_frame(screen)?;
    draw_messages(state, screen)?;

    // The room we show is wherever my player currently is.
    let current_room = state
        .store
        .join2::<Player, Room>()
        .into_iter()
        .find(|(_, player, _)| player.player_id == state.my_player_id)
        .map(|(_, _, room)| room.room_id);
    let Some(current_room) = current_room else {
        return Ok(());
    };

    // Offset to be within the frame borders.
    screen.push_offset(Pos::new(1, 1));
    let mut rows = state.store.join4::<Drawable, Text, Room, Loc>();
    rows.sort_by_key(|(_, drawable, _, _, _)| drawable.layer);
    for (_, _, text, room, loc) in rows {
        if room.room_id == current_room {
            screen.print_at(loc.to_pos(), &text.text)?;
        }
    }
    screen.pop_offset();

    Ok(())
}

fn draw_frame<W: Write>(screen: &mut Screen<W>) -> Result<()> {
    let width = usize::try_from(ROOM_WIDTH).unwrap_or(0) + 2;
    let hbar = format!("+{}+", "-".repeat(width - 2));
    let side = format!("|{}|", " ".repeat(width - 2));

    screen.print_at(Pos::new(0, 0), &hbar)?;
    for y in 1..=ROOM_HEIGHT {
        screen.print_at(Pos::new(0, y), &side)?;
    }
    screen.print_at(Pos::new(0, ROOM_HEIGHT + 1), &hbar)?;
    Ok(())
}

fn draw_messages<W: Write>(state: &DungeonState, screen: &mut Screen<W>) -> Result<()> {
    // Newest first, at most five.
    for (i, message) in state.messages.iter().rev().take(5).enumerate() {
        let y = ROOM_HEIGHT + 3 + i32::try_from(i).unwrap_or(0);
        screen.print_at(Pos::new(0, y), message)?;
    }
    Ok(())
}
