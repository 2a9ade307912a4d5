//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Routes each pending input event to the matching handler of the
// current state.
//
// Architecture:
//   EventSource → poll_events() → dispatch() → State::handle_*_event
//
// The dispatcher owns nothing but its event source borrow and a weak
// reference to the live state. The controller owns the state; after a
// swap it repoints the dispatcher with `set_current_state()`. A retired
// state is dropped at the swap, so a stale reference can never be
// upgraded and events cannot reach it.
//
// With a trace level set, every `dispatch` call is logged at that level
// together with its event count and outcome.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Weak;

//=== External Dependencies ===============================================

use log::{info, log, trace, Level};

//=== Internal Dependencies ===============================================

use crate::core::error::LoopError;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::EventSource;
use crate::core::state::{State, StateKey};

//=== FrameControl ========================================================

/// Loop control signal produced by dispatch and by each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,

    /// A quit event was seen; the process should terminate now.
    Quit,
}

/// Non-owning handle to the live state.
pub type StateHandle<K> = Weak<RefCell<Box<dyn State<K>>>>;

//=== EventDispatcher =====================================================

pub struct EventDispatcher<'a, K: StateKey> {
    source: &'a mut dyn EventSource,
    target: StateHandle<K>,
    trace_level: Option<Level>,
}

impl<'a, K: StateKey> EventDispatcher<'a, K> {
    pub fn new(source: &'a mut dyn EventSource, target: StateHandle<K>) -> Self {
        Self {
            source,
            target,
            trace_level: None,
        }
    }

    /// Repoints dispatch at a new state.
    pub fn set_current_state(&mut self, target: StateHandle<K>) {
        self.target = target;
    }

    /// Logs each `dispatch` call at `level`, or stops doing so on `None`.
    pub fn set_tracing(&mut self, level: Option<Level>) {
        self.trace_level = level;
    }

    pub fn tracing(&self) -> Option<Level> {
        self.trace_level
    }

    /// Delivers all pending events to the current state, in order.
    ///
    /// A quit event stops delivery at once and returns
    /// [`FrameControl::Quit`]; events queued behind it are dropped.
    /// Unrecognized events are ignored.
    ///
    /// # Errors
    ///
    /// [`LoopError::DetachedDispatcher`] if events are pending while the
    /// target state no longer exists.
    pub fn dispatch(&mut self) -> Result<FrameControl, LoopError> {
        let events = self.source.poll_events();
        let pending = events.len();
        let result = self.deliver(events);

        if let Some(level) = self.trace_level {
            log!(level, "dispatch({} events) -> {:?}", pending, result);
        }
        result
    }

    fn deliver(&mut self, events: Vec<InputEvent>) -> Result<FrameControl, LoopError> {
        if events.is_empty() {
            return Ok(FrameControl::Continue);
        }

        let target = self.target.upgrade().ok_or(LoopError::DetachedDispatcher)?;
        let mut state = target.borrow_mut();

        for event in events {
            match event {
                InputEvent::Quit => {
                    info!("Quit event received");
                    return Ok(FrameControl::Quit);
                }
                InputEvent::Key(key) => {
                    trace!("Dispatching {:?}", key);
                    state.handle_key_event(&key);
                }
                InputEvent::Mouse(mouse) => {
                    trace!("Dispatching {:?}", mouse);
                    state.handle_mouse_event(&mouse);
                }
                InputEvent::Joystick(joystick) => {
                    trace!("Dispatching {:?}", joystick);
                    state.handle_joystick_event(&joystick);
                }
                InputEvent::Unidentified => trace!("Unidentified event dropped"),
            }
        }

        Ok(FrameControl::Continue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
