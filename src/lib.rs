//=========================================================================
// stateloop: Library Root
//
// A minimal game state machine: a capped frame loop that hosts one
// pluggable state at a time and swaps states when the current one is done.
//
// Responsibilities:
// - Expose the state contract and the loop that drives it (`core`)
// - Expose the `Bootstrap` entry point that wires config, logging,
//   window and loop together
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use stateloop::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Screen { Idle }
// impl StateKey for Screen {}
//
// fn main() {
//     let result = BootstrapBuilder::new("game", Screen::Idle)
//         .register(Screen::Idle, IdleState::<Screen>::new)
//         .build()
//         .run();
//     std::process::exit(if result.is_ok() { 0 } else { 1 });
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` is platform independent: states, registry, dispatcher, clock and
// the loop controller. It can be driven headless (see `HeadlessSurface`
// and `ChannelEventSource`).
//
// `bootstrap` builds the real runtime from a config file.
//
pub mod bootstrap;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window, input conversion and the `pixels`
// framebuffer. It is not part of the public API surface.
//
mod platform;

//--- Public Exports ------------------------------------------------------

pub use bootstrap::{Bootstrap, BootstrapBuilder, BootstrapError};
