//=========================================================================
// State System
//=========================================================================
//
// The contract every game state implements, plus the registry of state
// factories the loop transitions through.
//
// Architecture:
//   StateRegistry
//     └─ factories: HashMap<K, Box<dyn Fn() -> Box<dyn State<K>>>>
//
// Flow:
//   check_done() → next_state() → StateRegistry::create() → fresh State
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};
use crate::core::platform_bridge::Surface;

//=== Module Declarations =================================================

mod idle;
mod registry;
mod traced;

//=== Public API ==========================================================

pub use idle::IdleState;
pub use registry::{StateFactory, StateRegistry};
pub use traced::TracedState;

//=== State Key Trait =====================================================

/// Marker trait for state identifiers.
///
/// Keys name registry entries. Typically a game-specific enum, but plain
/// strings work as well.
pub trait StateKey: Clone + Eq + Hash + Debug + 'static {}

impl StateKey for &'static str {}
impl StateKey for String {}

//=== State Trait =========================================================

/// A self-contained mode of the application.
///
/// A state is built fresh by its registry factory each time the loop
/// enters it and dropped when the loop leaves it. It asks to leave by
/// making [`State::check_done`] return `true` and [`State::next_state`]
/// return the identifier of its successor.
///
/// Per frame the loop calls, in order: the event handlers (zero or more
/// times), [`State::update`] once, then [`State::render`] once.
///
/// # Minimal Implementation
///
/// ```rust
/// # use stateloop::prelude::*;
/// struct Title {
///     handoff: Handoff<&'static str>,
/// }
///
/// impl State<&'static str> for Title {
///     fn handle_key_event(&mut self, event: &KeyEvent) {
///         if event.pressed && event.key == KeyCode::Enter {
///             self.handoff.finish("play");
///         }
///     }
///     fn handle_mouse_event(&mut self, _event: &MouseEvent) {}
///     fn handle_joystick_event(&mut self, _event: &JoystickEvent) {}
///     fn update(&mut self, _dt: f32) {}
///     fn render(&self, _surface: &mut dyn Surface, _actual_fps: f32) {}
///     fn check_done(&self) -> bool {
///         self.handoff.is_done()
///     }
///     fn next_state(&self) -> Option<&'static str> {
///         self.handoff.next()
///     }
/// }
/// ```
pub trait State<K: StateKey> {
    /// Consumes one keyboard event.
    fn handle_key_event(&mut self, event: &KeyEvent);

    /// Consumes one mouse event.
    fn handle_mouse_event(&mut self, event: &MouseEvent);

    /// Consumes one joystick event.
    fn handle_joystick_event(&mut self, event: &JoystickEvent);

    /// Advances the simulation by `dt` seconds (never negative).
    fn update(&mut self, dt: f32);

    /// Draws the current frame. `actual_fps` is informational.
    fn render(&self, surface: &mut dyn Surface, actual_fps: f32);

    /// Whether this state wants the loop to move on.
    fn check_done(&self) -> bool;

    /// Identifier of the successor; only read once `check_done()` is true.
    fn next_state(&self) -> Option<K>;
}

//=== Handoff =============================================================

/// The `done` / `next` pair a state uses to request a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff<K: StateKey> {
    done: bool,
    next: Option<K>,
}

impl<K: StateKey> Handoff<K> {
    pub fn new() -> Self {
        Self {
            done: false,
            next: None,
        }
    }

    /// Marks the state finished with `next` as its successor.
    pub fn finish(&mut self, next: K) {
        self.done = true;
        self.next = Some(next);
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The successor, or `None` while not done.
    pub fn next(&self) -> Option<K> {
        if self.done {
            self.next.clone()
        } else {
            None
        }
    }
}

impl<K: StateKey> Default for Handoff<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handoff_starts_pending() {
        let handoff: Handoff<&'static str> = Handoff::new();
        assert!(!handoff.is_done());
        assert_eq!(handoff.next(), None);
    }

    #[test]
    fn handoff_finish_sets_next() {
        let mut handoff = Handoff::default();
        handoff.finish(String::from("Main"));
        assert!(handoff.is_done());
        assert_eq!(handoff.next().as_deref(), Some("Main"));
    }

    #[test]
    fn handoff_last_finish_wins() {
        let mut handoff = Handoff::new();
        handoff.finish("A");
        handoff.finish("B");
        assert_eq!(handoff.next(), Some("B"));
    }
}
