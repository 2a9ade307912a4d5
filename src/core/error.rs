//=========================================================================
// Loop Errors
//=========================================================================
//
// Failures that stop the frame loop. All of them are fatal: the loop has
// no recovery policy, so they propagate to the caller of `run()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::SurfaceError;

//=== LoopError ===========================================================

#[derive(Debug, Error)]
pub enum LoopError {
    /// A transition (or the starting state) named an identifier that has
    /// no factory in the registry.
    #[error("state {0} is not registered")]
    UnknownState(String),

    /// A state reported `check_done()` without naming where to go next.
    #[error("state {0} finished without naming a next state")]
    MissingNextState(String),

    /// The dispatcher's target was dropped without being repointed.
    #[error("event dispatcher has no live target state")]
    DetachedDispatcher,

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
