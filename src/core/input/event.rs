//=========================================================================
// Input Event Types
//
// Defines the engine-side representation of platform input events.
//
// This module abstracts away platform-specific input (Winit, gilrs)
// into a unified format the dispatcher can route by variant.
//
// Responsibilities:
// - Represent keyboard, mouse and joystick inputs in a portable way
// - Carry the quit request as an ordinary event
// - Give every event exactly one variant (quit, key, mouse, joystick,
//   or unidentified)
//
// Event Flow:
// ```text
// Platform Layer (Winit / gilrs)
//         ↓
//    InputEvent (this module)
//         ↓
//    EventDispatcher (routes by variant)
//         ↓
//    State::handle_*_event
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyA` is always the same physical key regardless of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished. On macOS, Command maps
/// to `ctrl` and Option to `alt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

//=== KeyEvent ============================================================

/// A single key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,

    /// `true` for press, `false` for release.
    pub pressed: bool,

    /// Set when the press was generated by OS key repeat.
    pub repeat: bool,

    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Fresh key press without modifiers.
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Key release without modifiers.
    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            pressed: false,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }
}

//=== MouseEvent ==========================================================

/// Mouse input. Coordinates are window space, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    ButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    ButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    Moved { x: f32, y: f32 },

    /// Scroll in lines (positive `dy` scrolls up).
    Wheel { dx: f32, dy: f32 },
}

//=== Joystick ============================================================

/// Gamepad button in the common dual-stick layout.
///
/// Face buttons are named by position (`South` is A on Xbox, Cross on
/// PlayStation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickButton {
    South,
    East,
    North,
    West,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    Mode,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Other,
}

/// Gamepad analog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickAxis {
    LeftStickX,
    LeftStickY,
    LeftZ,
    RightStickX,
    RightStickY,
    RightZ,
    DPadX,
    DPadY,
    Other,
}

/// What happened on a joystick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEventKind {
    ButtonDown(JoystickButton),
    ButtonUp(JoystickButton),

    /// Axis moved; `value` is normalized to `-1.0..=1.0`.
    Axis { axis: JoystickAxis, value: f32 },

    Connected,
    Disconnected,
}

/// Joystick input tagged with the device it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickEvent {
    /// Platform-assigned device index, stable while connected.
    pub id: usize,
    pub kind: JoystickEventKind,
}

//=== InputEvent ==========================================================

/// Input event as produced by the platform layer for one frame.
///
/// The variant is the event's routing category: the dispatcher matches on
/// it to pick the state handler.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window closed or the platform asked the application to exit.
    Quit,

    Key(KeyEvent),

    Mouse(MouseEvent),

    Joystick(JoystickEvent),

    /// Unrecognized or unsupported event. Dropped by the dispatcher.
    Unidentified,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl From<JoystickEvent> for InputEvent {
    fn from(event: JoystickEvent) -> Self {
        Self::Joystick(event)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_convert_into_their_variant() {
        assert_eq!(
            InputEvent::from(KeyEvent::pressed(KeyCode::KeyA)),
            InputEvent::Key(KeyEvent::pressed(KeyCode::KeyA))
        );
        assert_eq!(
            InputEvent::from(MouseEvent::Moved { x: 1.0, y: 2.0 }),
            InputEvent::Mouse(MouseEvent::Moved { x: 1.0, y: 2.0 })
        );

        let joystick = JoystickEvent {
            id: 0,
            kind: JoystickEventKind::Connected,
        };
        assert_eq!(InputEvent::from(joystick), InputEvent::Joystick(joystick));
    }

    #[test]
    fn key_event_constructors() {
        let down = KeyEvent::pressed(KeyCode::Space);
        assert!(down.pressed);
        assert!(!down.repeat);
        assert_eq!(down.modifiers, Modifiers::NONE);

        let up = KeyEvent::released(KeyCode::Space);
        assert!(!up.pressed);
        assert_ne!(down, up);
    }

    #[test]
    fn from_conversions_pick_matching_variant() {
        let key: InputEvent = KeyEvent::pressed(KeyCode::Enter).into();
        assert!(matches!(key, InputEvent::Key(_)));

        let mouse: InputEvent = MouseEvent::Wheel { dx: 0.0, dy: 1.0 }.into();
        assert!(matches!(mouse, InputEvent::Mouse(MouseEvent::Wheel { .. })));

        let stick: InputEvent = JoystickEvent {
            id: 3,
            kind: JoystickEventKind::ButtonDown(JoystickButton::South),
        }
        .into();
        assert!(matches!(stick, InputEvent::Joystick(JoystickEvent { id: 3, .. })));
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
        assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.alt);
        assert!(Modifiers::ALT.alt && !Modifiers::ALT.shift);
    }
}
