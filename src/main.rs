mod bot;
mod config;
mod controller;
mod error;
mod liveness;
mod router;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::liveness::Liveness;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let liveness = Liveness::new();

    // Start the Discord bot in a separate task; with no token configured this
    // logs the failure and leaves the flag down.
    bot::start::spawn_bot(&config, liveness.clone());

    let app = router::router().with_state(AppState::new(liveness, config.keep_alive_always_ok));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Health server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
