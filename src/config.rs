//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults that reproduce the
//! stock test server on port 10808.

use std::net::SocketAddr;

use crate::error::RelayError;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:10808";

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the WebSocket listener to.
    pub listen_addr: SocketAddr,

    /// Capacity of the dispatcher event channel.
    pub event_channel_capacity: usize,

    /// Whether to read operator commands from standard input.
    pub console_enabled: bool,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Config`] if `LISTEN_ADDR` is set but cannot be
    /// parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok();

        let raw_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = parse_listen_addr(&raw_addr)?;

        Ok(Self {
            listen_addr,
            event_channel_capacity: parse_env("EVENT_CHANNEL_CAPACITY", 1024),
            console_enabled: parse_env_bool("CONSOLE_ENABLED", true),
        })
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 10808)),
            event_channel_capacity: 1024,
            console_enabled: true,
        }
    }
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr, RelayError> {
    raw.trim()
        .parse()
        .map_err(|e| RelayError::Config(format!("LISTEN_ADDR {raw:?}: {e}")))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
