//=========================================================================
// Core
//
// Platform-independent half of the crate: the state contract, the frame
// loop that drives it, and the interfaces the platform layer plugs into.
//
// Components (leaves first):
// - `input`: portable input events
// - `platform_bridge`: `EventSource` / `Surface` contract + headless parts
// - `state`: `State` trait, registry, tracing decorator, template state
// - `clock`: frame-rate cap and timing
// - `dispatcher`: routes events to the current state
// - `controller`: the per-frame state machine
//
// Notes:
// Everything here runs on a single thread. The only blocking call is the
// clock's frame-cap sleep.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod input;
pub mod platform_bridge;
pub mod state;

//=== Public API ==========================================================

pub use clock::{Clock, FrameClock, FrameTiming};
pub use controller::LoopController;
pub use dispatcher::{EventDispatcher, FrameControl, StateHandle};
pub use error::LoopError;
pub use state::{Handoff, IdleState, State, StateKey, StateRegistry, TracedState};
