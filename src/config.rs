use crate::error::{config::ConfigError, AppError};

/// Port the health server binds when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    /// Discord bot token.
    ///
    /// `None` when `DISCORD_BOT_TOKEN` is unset or blank. A missing token is
    /// not a startup error: the health server still runs and reports the bot
    /// as not ready, so the uptime monitor can see the broken deployment.
    pub discord_bot_token: Option<String>,

    /// Listening port for the health server.
    pub port: u16,

    /// When set, `GET /keep_alive` answers 200 regardless of readiness.
    pub keep_alive_always_ok: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            port: parse_port(std::env::var("PORT").ok())?,
            keep_alive_always_ok: std::env::var("KEEP_ALIVE_ALWAYS_OK")
                .map(|value| is_enabled(&value))
                .unwrap_or(false),
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), raw)),
        None => Ok(DEFAULT_PORT),
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "True" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the port fallback when `PORT` is unset.
    ///
    /// Expected: Ok with the default port
    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    /// Tests parsing an explicitly configured port.
    ///
    /// Expected: Ok with the configured value
    #[test]
    fn port_parses_configured_value() {
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
    }

    /// Tests rejection of a non-numeric port value.
    ///
    /// Expected: Err naming the PORT variable
    #[test]
    fn port_rejects_garbage() {
        let err = parse_port(Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    /// Tests the accepted spellings of the keep-alive override flag.
    ///
    /// Expected: truthy spellings enabled, everything else off
    #[test]
    fn keep_alive_flag_spellings() {
        assert!(is_enabled("1"));
        assert!(is_enabled("true"));
        assert!(is_enabled(" yes "));
        assert!(!is_enabled("0"));
        assert!(!is_enabled("false"));
        assert!(!is_enabled(""));
    }
}
