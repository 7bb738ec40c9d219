//! Error types for startup and the Discord worker.
//!
//! The `AppError` enum is the top-level error type. Configuration problems
//! surface from `Config::from_env`, Discord errors from the bot worker, and
//! I/O errors from binding or serving the HTTP listener. The health handlers
//! themselves are infallible; worker failures reach the outside world only as
//! the endpoints' 503 responses.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error from binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the AppError enum small, as serenity::Error is
/// very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
