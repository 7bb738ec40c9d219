//! Discord bot integration.
//!
//! The bot runs in a separate tokio task so it never blocks the health
//! server. Its only coupling to the rest of the process is the shared
//! liveness flag: the ready handler raises it, and the supervision wrapper in
//! `start` drops it again if the client's run loop dies.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `MESSAGE_CONTENT` - Read message content in guilds (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod event;
pub mod handler;
pub mod start;
