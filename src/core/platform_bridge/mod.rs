//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit/pixels/gilrs) with the loop.
//
// This module defines the contract between platform implementations and
// the core, so a backend can be swapped (or replaced by the headless
// pieces below) without touching loop code.
//
// Components:
// - `interface`: `EventSource` and `Surface` traits, surface errors
// - `event_collector`: channel-backed event source
// - `headless`: in-memory surface
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod headless;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::ChannelEventSource;
pub use headless::HeadlessSurface;
pub use interface::{EventSource, Surface, SurfaceError};
