//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once per connection after authentication and the
//! initial gateway handshake. It is the signal the health endpoints wait on.

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::event::{self, GatewayEvent};
use crate::liveness::Liveness;

/// Handles the ready event when the bot connects to Discord.
///
/// Publishes the bot's presence and raises the liveness flag so the health
/// endpoints start answering 200.
pub async fn handle_ready(ctx: Context, ready: Ready, liveness: &Liveness) {
    ctx.set_activity(Some(ActivityData::custom("keeping the lights on")));

    event::apply(
        &GatewayEvent::Ready {
            user_name: ready.user.name.to_string(),
        },
        liveness,
    );
}
