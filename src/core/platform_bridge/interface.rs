//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (event source, surface, errors).
//
// Defines the contract the loop needs from a platform backend:
// a queue of input events drained once per frame, and a surface that
// can be cleared, drawn into, and presented.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== EventSource =========================================================

/// Queue of platform input events.
///
/// Called once per frame by the dispatcher. Implementations return every
/// event that became available since the previous call, oldest first.
pub trait EventSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

//=== Surface =============================================================

/// Drawable frame handed to the current state each frame.
///
/// Pixel data is tightly packed RGBA8, row-major, `width * height * 4`
/// bytes. Nothing becomes visible until [`Surface::present`].
pub trait Surface {
    /// Returns `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Erases the whole frame to opaque black.
    fn clear(&mut self);

    /// Mutable access to the frame's pixels.
    fn frame_mut(&mut self) -> &mut [u8];

    /// Shows the current frame on screen.
    fn present(&mut self) -> Result<(), SurfaceError>;
}

//=== SurfaceError ========================================================

/// Failure while presenting a frame.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to present frame: {0}")]
    Present(String),
}
