//! The terminal game loop.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, read};
use crossterm::{cursor, execute, terminal};

use undercroft_engine::Pipeline;
use undercroft_foundation::{Error, Result};

use crate::input::{ControlEvent, DungeonInput, action_for_key};
use crate::render;
use crate::screen::Screen;
use crate::state::{DungeonEffect, DungeonState};
use crate::systems;

/// Owns the terminal session and drives the draw/input/update loop.
///
/// Each iteration paints the screen, blocks for one key, converts it to a
/// control event, and runs one tick of the pipeline; the tick's side effects
/// are folded into state before the next paint. Esc or `q` quits.
pub struct Driver {
    state: DungeonState,
    pipeline: Pipeline<DungeonInput, DungeonEffect>,
}

impl Driver {
    /// Creates a driver over an initial game state.
    #[must_use]
    pub fn new(state: DungeonState) -> Self {
        Self {
            state,
            pipeline: systems::dungeon_pipeline(),
        }
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &DungeonState {
        &self.state
    }

    /// Enters the terminal session and runs until the player quits.
    ///
    /// The terminal is restored before returning, also on the error path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the terminal cannot be set up or drawn to.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(io_err)?;
        let setup = execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )
        .map_err(io_err);

        let result = match setup {
            Ok(()) => self.event_loop(),
            Err(err) => Err(err),
        };

        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut screen = Screen::new(io::stdout());
        loop {
            screen.clear()?;
            render::draw(&self.state, &mut screen)?;
            screen.clear_offsets();
            screen.flush()?;

            match read().map_err(io_err)? {
                Event::Key(key) if is_quit(&key) => break,
                Event::Key(key) => self.tick(&key),
                _ => {}
            }
        }
        Ok(())
    }

    fn tick(&mut self, key: &KeyEvent) {
        let events: Vec<ControlEvent> = action_for_key(key)
            .map(|action| ControlEvent {
                player_id: self.state.my_player_id.clone(),
                action,
            })
            .into_iter()
            .collect();
        let input = DungeonInput { events };

        let effects = self.pipeline.run_tick(&mut self.state.store, &input);
        self.state.apply(effects);
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
}

fn io_err(e: io::Error) -> Error {
    Error::Io(e.to_string())
}
