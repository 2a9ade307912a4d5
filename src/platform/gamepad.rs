//=========================================================================
// Gamepad Input
//=========================================================================
//
// Polls gilrs for gamepad events and converts them to JoystickEvents.
// Compiled only with the `gamepad` feature.
//
//=========================================================================

use gilrs::{Axis, Button, EventType, Gilrs};
use log::{info, warn};

use crate::core::input::{InputEvent, JoystickAxis, JoystickButton, JoystickEvent, JoystickEventKind};

pub(crate) struct GamepadPoller {
    gilrs: Gilrs,
}

impl GamepadPoller {
    /// Returns `None` (after logging) when no gamepad backend is available,
    /// so a missing backend never stops the game from starting.
    pub(crate) fn new() -> Option<Self> {
        match Gilrs::new() {
            Ok(gilrs) => {
                for (id, gamepad) in gilrs.gamepads() {
                    info!(target: "platform", "Gamepad {} connected: {}", usize::from(id), gamepad.name());
                }
                Some(Self { gilrs })
            }
            Err(e) => {
                warn!(target: "platform", "Gamepad support unavailable: {}", e);
                None
            }
        }
    }

    /// Appends every pending gamepad event to `out`, in arrival order.
    pub(crate) fn poll_into(&mut self, out: &mut Vec<InputEvent>) {
        while let Some(event) = self.gilrs.next_event() {
            if let Some(kind) = convert(event.event) {
                out.push(
                    JoystickEvent {
                        id: usize::from(event.id),
                        kind,
                    }
                    .into(),
                );
            }
        }
    }
}

/// Repeats, analog button changes and driver notifications are dropped.
fn convert(event: EventType) -> Option<JoystickEventKind> {
    match event {
        EventType::ButtonPressed(button, _) => Some(JoystickEventKind::ButtonDown(button.into())),
        EventType::ButtonReleased(button, _) => Some(JoystickEventKind::ButtonUp(button.into())),
        EventType::AxisChanged(axis, value, _) => Some(JoystickEventKind::Axis {
            axis: axis.into(),
            value,
        }),
        EventType::Connected => Some(JoystickEventKind::Connected),
        EventType::Disconnected => Some(JoystickEventKind::Disconnected),
        _ => None,
    }
}

impl From<Button> for JoystickButton {
    fn from(button: Button) -> Self {
        match button {
            Button::South => JoystickButton::South,
            Button::East => JoystickButton::East,
            Button::North => JoystickButton::North,
            Button::West => JoystickButton::West,
            Button::LeftTrigger => JoystickButton::LeftBumper,
            Button::RightTrigger => JoystickButton::RightBumper,
            Button::LeftTrigger2 => JoystickButton::LeftTrigger,
            Button::RightTrigger2 => JoystickButton::RightTrigger,
            Button::Select => JoystickButton::Select,
            Button::Start => JoystickButton::Start,
            Button::Mode => JoystickButton::Mode,
            Button::LeftThumb => JoystickButton::LeftStick,
            Button::RightThumb => JoystickButton::RightStick,
            Button::DPadUp => JoystickButton::DPadUp,
            Button::DPadDown => JoystickButton::DPadDown,
            Button::DPadLeft => JoystickButton::DPadLeft,
            Button::DPadRight => JoystickButton::DPadRight,
            _ => JoystickButton::Other,
        }
    }
}

impl From<Axis> for JoystickAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::LeftStickX => JoystickAxis::LeftStickX,
            Axis::LeftStickY => JoystickAxis::LeftStickY,
            Axis::LeftZ => JoystickAxis::LeftZ,
            Axis::RightStickX => JoystickAxis::RightStickX,
            Axis::RightStickY => JoystickAxis::RightStickY,
            Axis::RightZ => JoystickAxis::RightZ,
            Axis::DPadX => JoystickAxis::DPadX,
            Axis::DPadY => JoystickAxis::DPadY,
            _ => JoystickAxis::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_by_layout_position() {
        assert_eq!(JoystickButton::from(Button::South), JoystickButton::South);
        assert_eq!(JoystickButton::from(Button::LeftTrigger), JoystickButton::LeftBumper);
        assert_eq!(JoystickButton::from(Button::RightTrigger2), JoystickButton::RightTrigger);
        assert_eq!(JoystickButton::from(Button::C), JoystickButton::Other);
    }

    #[test]
    fn axes_map() {
        assert_eq!(JoystickAxis::from(Axis::RightStickY), JoystickAxis::RightStickY);
        assert_eq!(JoystickAxis::from(Axis::Unknown), JoystickAxis::Other);
    }

    #[test]
    fn connection_events_convert_and_notifications_drop() {
        assert_eq!(convert(EventType::Connected), Some(JoystickEventKind::Connected));
        assert_eq!(convert(EventType::Disconnected), Some(JoystickEventKind::Disconnected));
        assert_eq!(convert(EventType::Dropped), None);
    }
}
