//=========================================================================
// Traced State
//=========================================================================
//
// Decorator that logs every call made on a state before delegating.
//
// Applied by the registry to each state it builds, so tracing covers
// every state uniformly without the states knowing about it. Return
// values and control flow are passed through untouched.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{log, Level};

//=== Internal Dependencies ===============================================

use super::{State, StateKey};
use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};
use crate::core::platform_bridge::Surface;

//=== TracedState =========================================================

/// Wraps a state and logs each call at a fixed level.
pub struct TracedState<K: StateKey> {
    key: K,
    inner: Box<dyn State<K>>,
    level: Level,
}

impl<K: StateKey> TracedState<K> {
    pub fn new(key: K, inner: Box<dyn State<K>>, level: Level) -> Self {
        Self { key, inner, level }
    }

    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: StateKey> State<K> for TracedState<K> {
    fn handle_key_event(&mut self, event: &KeyEvent) {
        log!(self.level, "State {:?}::handle_key_event({:?})", self.key, event);
        self.inner.handle_key_event(event);
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) {
        log!(self.level, "State {:?}::handle_mouse_event({:?})", self.key, event);
        self.inner.handle_mouse_event(event);
    }

    fn handle_joystick_event(&mut self, event: &JoystickEvent) {
        log!(self.level, "State {:?}::handle_joystick_event({:?})", self.key, event);
        self.inner.handle_joystick_event(event);
    }

    fn update(&mut self, dt: f32) {
        log!(self.level, "State {:?}::update(dt={:.4})", self.key, dt);
        self.inner.update(dt);
    }

    fn render(&self, surface: &mut dyn Surface, actual_fps: f32) {
        log!(self.level, "State {:?}::render(fps={:.1})", self.key, actual_fps);
        self.inner.render(surface, actual_fps);
    }

    fn check_done(&self) -> bool {
        let done = self.inner.check_done();
        log!(self.level, "State {:?}::check_done() -> {}", self.key, done);
        done
    }

    fn next_state(&self) -> Option<K> {
        let next = self.inner.next_state();
        log!(self.level, "State {:?}::next_state() -> {:?}", self.key, next);
        next
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
