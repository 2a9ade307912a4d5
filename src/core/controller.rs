//=========================================================================
// Loop Controller
//
// The frame loop and state machine.
//
// Architecture:
// ```text
//   LoopController
//     ├─ current: Rc<RefCell<Box<dyn State>>>   (sole strong owner)
//     ├─ dispatcher ──weak──> current
//     ├─ registry   (borrowed)
//     ├─ clock      (borrowed)
//     └─ surface    (borrowed)
// ```
//
// Per-frame order (fixed):
//   1. transition check   (swap state if the current one is done)
//   2. clock tick         (dt, actual fps; sleeps to hold the cap)
//   3. event dispatch     (may end the frame on quit)
//   4. update
//   5. render
//   6. present
//
// The transition check runs before dispatch so a state swapped in at the
// top of a frame receives that frame's input.
//
// With a trace level set, `frame`, the transition check and `dispatch` log
// each call and its outcome at that level.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== External Dependencies ===============================================

use log::{debug, info, log, Level};

//=== Internal Dependencies ===============================================

use crate::core::clock::FrameClock;
use crate::core::dispatcher::{EventDispatcher, FrameControl};
use crate::core::error::LoopError;
use crate::core::platform_bridge::{EventSource, Surface};
use crate::core::state::{State, StateKey, StateRegistry};

type SharedState<K> = Rc<RefCell<Box<dyn State<K>>>>;

//=== LoopController ======================================================

/// Drives the frame loop and swaps states on request.
///
/// Owns exactly one live state at a time. The surface, clock, event
/// source, and registry are borrowed from whoever built the controller.
///
/// # Examples
///
/// ```rust
/// # use stateloop::prelude::*;
/// # use std::num::NonZeroU32;
/// let mut registry = StateRegistry::new();
/// registry.register("idle", IdleState::<&'static str>::new);
///
/// let mut surface = HeadlessSurface::new(64, 48);
/// let mut clock = Clock::new(NonZeroU32::new(1000).unwrap());
/// let (tx, mut events) = ChannelEventSource::channel();
///
/// let mut controller =
///     LoopController::new(&mut surface, &mut clock, &registry, &mut events, "idle").unwrap();
/// assert_eq!(controller.frame().unwrap(), FrameControl::Continue);
///
/// tx.send(InputEvent::Quit).unwrap();
/// assert_eq!(controller.frame().unwrap(), FrameControl::Quit);
/// ```
pub struct LoopController<'a, K: StateKey> {
    surface: &'a mut dyn Surface,
    clock: &'a mut dyn FrameClock,
    registry: &'a StateRegistry<K>,
    dispatcher: EventDispatcher<'a, K>,
    current: SharedState<K>,
    current_key: K,
    frames: u64,
    trace_level: Option<Level>,
}

impl<'a, K: StateKey> LoopController<'a, K> {
    //--- Construction -----------------------------------------------------

    /// Builds the controller and the starting state.
    ///
    /// # Errors
    ///
    /// [`LoopError::UnknownState`] if `starting` is not registered.
    pub fn new(
        surface: &'a mut dyn Surface,
        clock: &'a mut dyn FrameClock,
        registry: &'a StateRegistry<K>,
        events: &'a mut dyn EventSource,
        starting: K,
    ) -> Result<Self, LoopError> {
        let current: SharedState<K> = Rc::new(RefCell::new(registry.create(&starting)?));
        let dispatcher = EventDispatcher::new(events, Rc::downgrade(&current));

        info!("Loop controller starting in state {:?}", starting);

        Ok(Self {
            surface,
            clock,
            registry,
            dispatcher,
            current,
            current_key: starting,
            frames: 0,
            trace_level: None,
        })
    }

    /// Logs every frame, transition check and dispatch at `level`.
    pub fn with_tracing(mut self, level: Level) -> Self {
        self.set_tracing(Some(level));
        self
    }

    /// Turns boundary tracing on at `level`, or off with `None`.
    pub fn set_tracing(&mut self, level: Option<Level>) {
        self.trace_level = level;
        self.dispatcher.set_tracing(level);
    }

    //--- Accessors --------------------------------------------------------

    /// Identifier of the live state.
    pub fn current_key(&self) -> &K {
        &self.current_key
    }

    /// Number of frames completed (presented) so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tracing(&self) -> Option<Level> {
        self.trace_level
    }

    //--- Execution --------------------------------------------------------

    /// Runs frames until a quit event arrives.
    ///
    /// Returns `Ok(())` on quit. The caller is expected to terminate the
    /// process right away; no state cleanup is performed.
    ///
    /// # Errors
    ///
    /// Any [`LoopError`] raised by a frame. All of them are fatal.
    pub fn run(mut self) -> Result<(), LoopError> {
        info!("Entering frame loop");
        loop {
            if self.frame()? == FrameControl::Quit {
                info!("Frame loop stopped after {} frames", self.frames);
                return Ok(());
            }
        }
    }

    /// Runs exactly one frame.
    pub fn frame(&mut self) -> Result<FrameControl, LoopError> {
        let result = self.step();
        if let Some(level) = self.trace_level {
            log!(level, "frame {} in {:?} -> {:?}", self.frames, self.current_key, result);
        }
        result
    }

    //--- Internal Helpers -------------------------------------------------

    fn step(&mut self) -> Result<FrameControl, LoopError> {
        //--- 1. Transition check ------------------------------------------
        let swapped = self.check_transition();
        if let Some(level) = self.trace_level {
            log!(level, "check_transition() -> {:?}", swapped);
        }
        swapped?;

        //--- 2. Clock tick -------------------------------------------------
        let timing = self.clock.tick();

        //--- 3. Event dispatch ---------------------------------------------
        if self.dispatcher.dispatch()? == FrameControl::Quit {
            return Ok(FrameControl::Quit);
        }

        //--- 4. Update -----------------------------------------------------
        self.current.borrow_mut().update(timing.dt);

        //--- 5. Render -----------------------------------------------------
        self.current.borrow().render(&mut *self.surface, timing.actual_fps);

        //--- 6. Present ----------------------------------------------------
        self.surface.present()?;

        self.frames += 1;
        Ok(FrameControl::Continue)
    }

    /// Swaps in the next state if the current one is done.
    ///
    /// The successor is built before anything is touched, so a failed
    /// lookup leaves the surface and the current state as they were.
    fn check_transition(&mut self) -> Result<bool, LoopError> {
        let next = {
            let state = self.current.borrow();
            if !state.check_done() {
                return Ok(false);
            }
            state.next_state()
        };
        let next =
            next.ok_or_else(|| LoopError::MissingNextState(format!("{:?}", self.current_key)))?;

        let fresh = self.registry.create(&next)?;

        self.surface.clear();
        self.current = Rc::new(RefCell::new(fresh));
        self.dispatcher.set_current_state(Rc::downgrade(&self.current));

        debug!("Transitioned {:?} -> {:?}", self.current_key, next);
        self.current_key = next;
        Ok(true)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
