//! Process-wide readiness flag shared between the Discord worker and the
//! health endpoints.
//!
//! The flag starts out false, is flipped to true once the gateway handshake
//! completes, and drops back to false if the worker dies with an
//! unrecoverable error. The Discord worker is the only writer; the health
//! handlers only ever read. There are no intermediate states.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the readiness flag.
///
/// Constructed once during startup and handed to both the bot worker and the
/// HTTP router state. Clones share the underlying atomic, so a write from the
/// worker task is immediately visible to request handlers.
#[derive(Clone, Debug, Default)]
pub struct Liveness {
    ready: Arc<AtomicBool>,
}

impl Liveness {
    /// Creates a new flag in the not-ready state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the gateway session is established.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    /// Records an unrecoverable worker failure.
    ///
    /// Once set, nothing flips the flag back within the process lifetime;
    /// the hosting platform is expected to restart the process.
    pub fn mark_failed(&self) {
        self.ready.store(false, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the initial state of a fresh flag.
    ///
    /// Expected: not ready
    #[test]
    fn starts_not_ready() {
        let liveness = Liveness::new();
        assert!(!liveness.is_ready());
    }

    /// Tests marking the flag ready after a successful handshake.
    ///
    /// Expected: ready
    #[test]
    fn mark_ready_sets_flag() {
        let liveness = Liveness::new();
        liveness.mark_ready();
        assert!(liveness.is_ready());
    }

    /// Tests that a failure recorded after readiness drops the flag again,
    /// so the health endpoints stop reporting stale success.
    ///
    /// Expected: not ready
    #[test]
    fn mark_failed_clears_flag() {
        let liveness = Liveness::new();
        liveness.mark_ready();
        liveness.mark_failed();
        assert!(!liveness.is_ready());
    }

    /// Tests that clones observe writes made through another handle.
    ///
    /// Expected: both handles report ready
    #[test]
    fn clones_share_state() {
        let liveness = Liveness::new();
        let reader = liveness.clone();
        liveness.mark_ready();
        assert!(reader.is_ready());
    }
}
