//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS window and input) with the frame loop.
//
// Architecture:
// ```text
//  Loop thread (main):
//  ┌──────────────────────────────────────────┐
//  │  LoopController::frame()                 │
//  │   ↓ dispatch()                           │
//  │  Platform::poll_events()                 │
//  │   ├─ pump_app_events(timeout = 0)        │
//  │   │    ↓ WindowEvent                     │
//  │   │  InputProcessor ──> Sender<InputEvent>
//  │   ├─ GamepadPoller (feature "gamepad")   │
//  │   ↓                                      │
//  │  ChannelEventSource::poll_events()       │
//  └──────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pull, not push**: the Winit loop is pumped once per frame from the
//   frame loop itself, so input is collected exactly when the dispatcher
//   asks for it and everything stays on one thread
// - **Sticky modifiers**: modifier state persists across events until
//   explicitly changed (matches platform behavior)
// - **Quit is an event**: close requests and event loop exit are turned
//   into `InputEvent::Quit` and travel the same path as input
// - **Main thread requirement**: Winit mandates the main thread on macOS,
//   so `Platform` must be opened by the thread that runs the loop
//
//=========================================================================

//=== Submodules ==========================================================

mod display;
#[cfg(feature = "gamepad")]
mod gamepad;
mod input_processor;

pub(crate) use display::PixelsSurface;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::bootstrap::config::DisplayConfig;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{ChannelEventSource, EventSource};
#[cfg(feature = "gamepad")]
use gamepad::GamepadPoller;
use input_processor::InputProcessor;

/// Pumps allowed while waiting for the OS to hand us a window.
const WINDOW_OPEN_ATTEMPTS: u32 = 100;
const WINDOW_OPEN_POLL: Duration = Duration::from_millis(10);

//=== PlatformError =======================================================

/// Platform initialization errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[from] EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] OsError),

    #[error("window never became available")]
    WindowUnavailable,
}

//=== PlatformApp =========================================================

/// Winit application handler. Lives inside `Platform` and is handed to
/// the event loop on every pump.
struct PlatformApp {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    creation_error: Option<OsError>,
    input_processor: InputProcessor,
    event_sender: Sender<InputEvent>,
}

impl PlatformApp {
    fn new(attributes: WindowAttributes, event_sender: Sender<InputEvent>) -> Self {
        Self {
            attributes,
            window: None,
            creation_error: None,
            input_processor: InputProcessor::new(),
            event_sender,
        }
    }

    fn send(&self, event: InputEvent) {
        // The receiver lives in the same `Platform`, so this only fails
        // during teardown.
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform::input", "Event channel closed, dropping event");
        }
    }
}

impl ApplicationHandler for PlatformApp {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.creation_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(InputEvent::Quit);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.send(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.send(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.send(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_mouse_wheel(delta);
                self.send(event);
            }

            _ => {}
        }
    }
}

//=== Platform ============================================================

/// The OS window and the input it produces.
///
/// Not `Send`; must stay on the thread that opened it.
pub(crate) struct Platform {
    event_loop: EventLoop<()>,
    app: PlatformApp,
    events: ChannelEventSource,
    #[cfg(feature = "gamepad")]
    gamepads: Option<GamepadPoller>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the event loop and pumps it until the window exists.
    pub(crate) fn open(display: &DisplayConfig) -> Result<Self, PlatformError> {
        let mut event_loop = EventLoop::new()?;
        let (sender, events) = ChannelEventSource::channel();
        let mut app = PlatformApp::new(window_attributes(display), sender);

        for _ in 0..WINDOW_OPEN_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(WINDOW_OPEN_POLL), &mut app);

            if let Some(e) = app.creation_error.take() {
                return Err(PlatformError::WindowCreation(e));
            }
            if app.window.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                warn!(target: "platform", "Event loop exited ({}) before the window opened", code);
                return Err(PlatformError::WindowUnavailable);
            }
        }

        if app.window.is_none() {
            return Err(PlatformError::WindowUnavailable);
        }

        info!(target: "platform", "Platform subsystem initialized");
        Ok(Self {
            event_loop,
            app,
            events,
            #[cfg(feature = "gamepad")]
            gamepads: GamepadPoller::new(),
        })
    }

    //--- Accessors --------------------------------------------------------

    pub(crate) fn window(&self) -> Option<Arc<Window>> {
        self.app.window.clone()
    }
}

impl EventSource for Platform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app);

        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop exited with code {}", code);
            self.app.send(InputEvent::Quit);
        }

        #[allow(unused_mut)]
        let mut events = self.events.poll_events();

        #[cfg(feature = "gamepad")]
        {
            if let Some(gamepads) = self.gamepads.as_mut() {
                gamepads.poll_into(&mut events);
            }
        }

        events
    }
}

//=== Helpers =============================================================

/// Fixed-size, non-resizable window; borderless drops the decorations.
fn window_attributes(display: &DisplayConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(display.title.clone())
        .with_inner_size(LogicalSize::new(display.width, display.height))
        .with_resizable(false)
        .with_decorations(!display.borderless)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_attributes_follow_display_config() {
        let display = DisplayConfig {
            title: String::from("Demo"),
            width: 320,
            height: 240,
            borderless: true,
        };

        let attrs = window_attributes(&display);

        assert_eq!(attrs.title, "Demo");
        assert!(!attrs.resizable);
        assert!(!attrs.decorations);
        assert_eq!(
            attrs.inner_size,
            Some(LogicalSize::new(320, 240).into())
        );
    }

    #[test]
    fn decorated_by_default() {
        let attrs = window_attributes(&DisplayConfig::default());
        assert!(attrs.decorations);
        assert_eq!(attrs.title, "State Loop");
    }

    #[test]
    fn app_forwards_sent_events() {
        let (tx, mut source) = ChannelEventSource::channel();
        let app = PlatformApp::new(WindowAttributes::default(), tx);

        app.send(InputEvent::Quit);

        assert_eq!(source.poll_events(), vec![InputEvent::Quit]);
        assert!(app.window.is_none(), "Window should be created lazily");
    }

    #[test]
    fn platform_error_display_format() {
        assert_eq!(
            PlatformError::WindowUnavailable.to_string(),
            "window never became available"
        );
    }
}
