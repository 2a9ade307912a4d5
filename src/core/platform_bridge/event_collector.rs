//=========================================================================
// Event Collector
//=========================================================================
//
// Channel-backed event source.
//
// Architecture:
//   Sender<InputEvent> → Receiver → poll_events() → Vec<InputEvent>
//
// Each poll drains everything pending, so a frame sees all of its input
// (and any quit behind it) before update runs.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::debug;

//=== Internal Dependencies ===============================================

use super::EventSource;
use crate::core::input::InputEvent;

//=== ChannelEventSource ==================================================

/// Event source fed through a crossbeam channel.
///
/// Producers (the winit handler, a gamepad poller, a test) push
/// [`InputEvent`]s into the sender; the loop drains them once per frame.
/// Once every sender is dropped the source reports a single
/// [`InputEvent::Quit`].
pub struct ChannelEventSource {
    receiver: Receiver<InputEvent>,
    disconnected: bool,
}

impl ChannelEventSource {
    pub fn new(receiver: Receiver<InputEvent>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }

    /// Creates a source together with the sender that feeds it.
    pub fn channel() -> (Sender<InputEvent>, Self) {
        let (tx, rx) = unbounded();
        (tx, Self::new(rx))
    }

    /// Number of events waiting in the channel.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl EventSource for ChannelEventSource {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        debug!("Event channel disconnected, requesting quit");
                        self.disconnected = true;
                        events.push(InputEvent::Quit);
                    }
                    break;
                }
            }
        }

        events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
