//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into portable InputEvents.
//
// Architecture:
//   Winit WindowEvent → InputProcessor → InputEvent → event channel
//
// Stateful modifier tracking: caches modifier state from ModifiersChanged
// events and applies it to all subsequent key and mouse button events.
// Keys without a portable code (F13-F24, media keys) are filtered out.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent as WinitKeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent};

/// Pixel scroll deltas are reported in lines, at this many pixels each.
const PIXELS_PER_LINE: f32 = 20.0;

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit key event, or `None` for keys with no portable code.
    pub(crate) fn process_key_event(&self, key_event: &WinitKeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };

        self.key_input_event(code, key_event.state, key_event.repeat)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.current_modifiers;

        let event = match state {
            ElementState::Pressed => MouseEvent::ButtonDown { button, modifiers },
            ElementState::Released => MouseEvent::ButtonUp { button, modifiers },
        };
        event.into()
    }

    /// Cursor position in window space, no modifiers.
    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        MouseEvent::Moved { x, y }.into()
    }

    pub(crate) fn process_mouse_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(dx, dy) => (dx, dy),
            MouseScrollDelta::PixelDelta(position) => (
                position.x as f32 / PIXELS_PER_LINE,
                position.y as f32 / PIXELS_PER_LINE,
            ),
        };
        MouseEvent::Wheel { dx, dy }.into()
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(
        &self,
        code: WinitKeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let key = KeyCode::from(code);
        if key == KeyCode::Unidentified {
            return None;
        }

        let event = KeyEvent {
            key,
            pressed: state == ElementState::Pressed,
            repeat,
            modifiers: self.current_modifiers,
        };
        Some(event.into())
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps A-Z, 0-9, arrows, and common special keys. Everything else is
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Back, Forward and numbered buttons all become `Other`.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift { state.insert(ModifiersState::SHIFT); }
        if ctrl { state.insert(ModifiersState::CONTROL); }
        if alt { state.insert(ModifiersState::ALT); }
        state
    }

    fn expect_key(event: Option<InputEvent>) -> KeyEvent {
        match event {
            Some(InputEvent::Key(key)) => key,
            other => panic!("Expected key event, got {:?}", other),
        }
    }

    #[test]
    fn starts_with_no_modifiers() {
        let processor = InputProcessor::new();
        assert_eq!(processor.current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn update_modifiers_works() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, true));

        let mods = processor.current_modifiers();
        assert!(mods.shift && !mods.ctrl && mods.alt);
    }

    #[test]
    fn key_press_carries_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(false, true, false));

        let key = expect_key(processor.key_input_event(
            WinitKeyCode::KeyS,
            ElementState::Pressed,
            false,
        ));

        assert_eq!(key.key, KeyCode::KeyS);
        assert!(key.pressed);
        assert!(!key.repeat);
        assert_eq!(key.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn key_release_and_repeat() {
        let processor = InputProcessor::new();

        let released = expect_key(processor.key_input_event(
            WinitKeyCode::KeyA,
            ElementState::Released,
            false,
        ));
        let repeated = expect_key(processor.key_input_event(
            WinitKeyCode::KeyA,
            ElementState::Pressed,
            true,
        ));

        assert!(!released.pressed);
        assert!(repeated.pressed && repeated.repeat);
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert!(processor
            .key_input_event(WinitKeyCode::F13, ElementState::Pressed, false)
            .is_none());
    }

    #[test]
    fn mouse_button_has_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(false, false, true));

        let event = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);

        assert_eq!(
            event,
            InputEvent::Mouse(MouseEvent::ButtonDown {
                button: MouseButton::Left,
                modifiers: Modifiers::ALT,
            })
        );
    }

    #[test]
    fn mouse_move_correct() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_mouse_move(123.5, 456.75),
            InputEvent::Mouse(MouseEvent::Moved { x: 123.5, y: 456.75 })
        );
    }

    #[test]
    fn wheel_pixels_are_converted_to_lines() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Mouse(MouseEvent::Wheel { dx: 0.0, dy: 1.0 })
        );
        assert_eq!(
            processor.process_mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                40.0, -20.0
            ))),
            InputEvent::Mouse(MouseEvent::Wheel { dx: 2.0, dy: -1.0 })
        );
    }

    #[test]
    fn modifiers_persist_across_events() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, false));

        let mouse = processor.process_mouse_button(WinitMouseButton::Right, ElementState::Released);
        let key = expect_key(processor.key_input_event(
            WinitKeyCode::Space,
            ElementState::Pressed,
            false,
        ));

        match mouse {
            InputEvent::Mouse(MouseEvent::ButtonUp { modifiers, .. }) => assert!(modifiers.shift),
            other => panic!("Expected ButtonUp, got {:?}", other),
        }
        assert!(key.modifiers.shift);
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(WinitMouseButton::Other(9)), MouseButton::Other);
    }
}
