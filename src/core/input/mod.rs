//=========================================================================
// Input Types
//=========================================================================
//
// Platform-independent input events delivered to states.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{
    InputEvent, JoystickAxis, JoystickButton, JoystickEvent, JoystickEventKind,
    KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent,
};
