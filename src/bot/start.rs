use std::future::Future;

use serenity::all::{Client, Context, EventHandler, GatewayIntents, Ready};
use serenity::async_trait;

use crate::bot::event::{self, GatewayEvent};
use crate::bot::handler;
use crate::config::Config;
use crate::error::AppError;
use crate::liveness::Liveness;

/// Discord bot event handler.
struct Handler {
    liveness: Liveness,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord.
    async fn ready(&self, ctx: Context, ready: Ready) {
        handler::ready::handle_ready(ctx, ready, &self.liveness).await;
    }
}

/// Launches the Discord worker without blocking the caller.
///
/// With no token configured the worker never spawns: the configuration error
/// is logged once and the liveness flag stays down, so the health endpoints
/// keep reporting 503 for the life of the process.
///
/// The spawned worker is not supervised. If the run loop dies the flag is
/// dropped and the task exits; the hosting platform restarts the whole
/// process once the uptime monitor notices.
pub fn spawn_bot(config: &Config, liveness: Liveness) {
    let Some(token) = config.discord_bot_token.clone() else {
        tracing::error!(
            "Fatal configuration error: DISCORD_BOT_TOKEN is not set; the bot will not start"
        );
        return;
    };

    tokio::spawn(async move {
        let gateway = run_bot(token, liveness.clone());
        supervise(gateway, liveness).await;
    });
}

/// Runs the Discord client until it shuts down.
///
/// Blocks for the life of the gateway connection, so it must be called from
/// a spawned task. The ready handler raises the liveness flag once the
/// handshake completes; errors are left to the supervision wrapper.
async fn run_bot(token: String, liveness: Liveness) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { liveness })
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Awaits the gateway future and records its failure, if any.
///
/// Serenity's own error rendering already names authentication rejection
/// distinctly, so one terminal log line covers the whole error taxonomy.
async fn supervise<F>(gateway: F, liveness: Liveness)
where
    F: Future<Output = Result<(), AppError>>,
{
    if let Err(e) = gateway.await {
        event::apply(
            &GatewayEvent::ConnectionFailed {
                reason: e.to_string(),
            },
            &liveness,
        );
    }
}
