//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `Liveness` is a reference-counted atomic and the keep-alive mode is
//! a plain bool.

use crate::liveness::Liveness;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Readiness flag written by the Discord worker.
    pub liveness: Liveness,

    /// Whether `GET /keep_alive` reports 200 unconditionally.
    pub keep_alive_always_ok: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup; the resulting state is provided to
    /// the Axum router for use in request handlers.
    pub fn new(liveness: Liveness, keep_alive_always_ok: bool) -> Self {
        Self {
            liveness,
            keep_alive_always_ok,
        }
    }
}
