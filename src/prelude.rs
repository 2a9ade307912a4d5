//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stateloop::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Bootstrap
pub use crate::bootstrap::{Bootstrap, BootstrapBuilder, BootstrapError};

// States
pub use crate::core::state::{Handoff, IdleState, State, StateKey, StateRegistry, TracedState};

// Loop
pub use crate::core::clock::{Clock, FrameClock, FrameTiming};
pub use crate::core::controller::LoopController;
pub use crate::core::dispatcher::{EventDispatcher, FrameControl};
pub use crate::core::error::LoopError;

// Platform bridge
pub use crate::core::platform_bridge::{ChannelEventSource, EventSource, HeadlessSurface, Surface};

// Input
pub use crate::core::input::{
    InputEvent, JoystickEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent,
};
