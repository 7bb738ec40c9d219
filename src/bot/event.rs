//! Typed view of the gateway lifecycle events the worker reacts to.
//!
//! The Serenity event handler translates its callbacks into `GatewayEvent`
//! values, and `apply` maps each event to a liveness transition. Command
//! dispatch never routes through here; this boundary only carries the
//! session lifecycle.

use crate::liveness::Liveness;

/// Lifecycle events surfaced by the gateway connection.
#[derive(Debug)]
pub enum GatewayEvent {
    /// Session established; carries the connected bot user's name.
    Ready { user_name: String },

    /// The client's run loop ended with an unrecoverable error.
    ConnectionFailed { reason: String },
}

/// Applies a gateway lifecycle event to the liveness flag.
pub fn apply(event: &GatewayEvent, liveness: &Liveness) {
    match event {
        GatewayEvent::Ready { user_name } => {
            tracing::info!("{} is connected to Discord", user_name);
            liveness.mark_ready();
        }
        GatewayEvent::ConnectionFailed { reason } => {
            tracing::error!("Discord gateway connection failed: {}", reason);
            liveness.mark_failed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the ready event raises the liveness flag.
    ///
    /// Expected: ready after the event
    #[test]
    fn ready_raises_flag() {
        let liveness = Liveness::new();

        apply(
            &GatewayEvent::Ready {
                user_name: "pulsebot".to_string(),
            },
            &liveness,
        );

        assert!(liveness.is_ready());
    }

    /// Tests that a connection failure before any handshake leaves the flag
    /// down, as for a rejected token.
    ///
    /// Expected: not ready
    #[test]
    fn failure_without_handshake_leaves_flag_down() {
        let liveness = Liveness::new();

        apply(
            &GatewayEvent::ConnectionFailed {
                reason: "Invalid token".to_string(),
            },
            &liveness,
        );

        assert!(!liveness.is_ready());
    }

    /// Tests that a failure after a successful handshake drops the flag, so
    /// no stale ready answers survive the worker's death.
    ///
    /// Expected: not ready after the failure
    #[test]
    fn failure_after_ready_drops_flag() {
        let liveness = Liveness::new();

        apply(
            &GatewayEvent::Ready {
                user_name: "pulsebot".to_string(),
            },
            &liveness,
        );
        apply(
            &GatewayEvent::ConnectionFailed {
                reason: "gateway closed".to_string(),
            },
            &liveness,
        );

        assert!(!liveness.is_ready());
    }
}
