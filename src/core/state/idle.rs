//=========================================================================
// Idle State
//=========================================================================
//
// Template state: every handler is a no-op and it never finishes.
// Copy it as the starting point for a real state.
//
//=========================================================================

use super::{Handoff, State, StateKey};
use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};
use crate::core::platform_bridge::Surface;

/// A state that does nothing and never asks to leave.
pub struct IdleState<K: StateKey> {
    handoff: Handoff<K>,
}

impl<K: StateKey> IdleState<K> {
    pub fn new() -> Self {
        Self {
            handoff: Handoff::new(),
        }
    }
}

impl<K: StateKey> Default for IdleState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateKey> State<K> for IdleState<K> {
    fn handle_key_event(&mut self, _event: &KeyEvent) {}

    fn handle_mouse_event(&mut self, _event: &MouseEvent) {}

    fn handle_joystick_event(&mut self, _event: &JoystickEvent) {}

    fn update(&mut self, _dt: f32) {}

    fn render(&self, _surface: &mut dyn Surface, _actual_fps: f32) {}

    fn check_done(&self) -> bool {
        self.handoff.is_done()
    }

    fn next_state(&self) -> Option<K> {
        self.handoff.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton, Modifiers};
    use crate::core::platform_bridge::HeadlessSurface;

    #[test]
    fn never_finishes() {
        let mut state: IdleState<&'static str> = IdleState::new();
        let mut surface = HeadlessSurface::new(4, 4);

        for _ in 0..10 {
            state.handle_key_event(&KeyEvent::pressed(KeyCode::Escape));
            state.handle_mouse_event(&MouseEvent::ButtonDown {
                button: MouseButton::Left,
                modifiers: Modifiers::NONE,
            });
            state.update(1.0 / 80.0);
            state.render(&mut surface, 80.0);
        }

        assert!(!state.check_done());
        assert_eq!(state.next_state(), None);
    }

    #[test]
    fn render_leaves_surface_untouched() {
        let state: IdleState<String> = IdleState::default();
        let mut surface = HeadlessSurface::new(2, 2);
        let before = surface.pixels().to_vec();

        state.render(&mut surface, 0.0);

        assert_eq!(surface.pixels(), before.as_slice());
    }
}
