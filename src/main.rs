//=========================================================================
// stateloop: Skeleton Game
//
// Opens the window in the template idle state and runs until the window
// is closed. Config and log files are `stateloop.toml` / `stateloop.log`
// in the working directory.
//
//=========================================================================

use std::process;

use log::error;
use stateloop::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GameState {
    Idle,
}

impl StateKey for GameState {}

fn main() {
    let result = BootstrapBuilder::new("stateloop", GameState::Idle)
        .register(GameState::Idle, IdleState::<GameState>::new)
        .build()
        .run();

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("stateloop: {}", e);
            process::exit(1);
        }
    }
}
