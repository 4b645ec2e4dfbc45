//! The Undercroft binary: run the dungeon in the current terminal.
//!
//! Usage: `undercroft [save-file]`
//!
//! With a path argument the game resumes from that save; logs go to stderr
//! via `env_logger` (`RUST_LOG=debug` for tick traces).

use std::process::ExitCode;

use undercroft_runtime::{save, Driver, DungeonState};

fn main() -> ExitCode {
    env_logger::init();

    let state = match std::env::args().nth(1) {
        Some(path) => match save::load_from_file(&path) {
            Ok(state) => {
                log::info!("resumed from {path}");
                state
            }
            Err(err) => {
                eprintln!("undercroft: failed to load '{path}': {err}");
                return ExitCode::FAILURE;
            }
        },
        None => DungeonState::new(),
    };

    let mut driver = Driver::new(state);
    if let Err(err) = driver.run() {
        eprintln!("undercroft: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
