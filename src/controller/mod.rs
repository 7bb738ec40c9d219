//! HTTP request handlers.
//!
//! Only the health surface is exposed: the two routes polled by the external
//! uptime monitor. Handlers read shared state and never call into the Discord
//! worker.

pub mod health;
