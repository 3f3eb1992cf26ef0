//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first if present.
//! Loading never fails: unparsable values are logged and replaced by their
//! defaults. CLI flags are applied on top by `main`.

use std::time::Duration;

use crate::consts::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROVIDER_TIMEOUT, default_user_agent};

pub const ENV_HOST: &str = "IRIS_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_PROVIDER_TIMEOUT: &str = "IRIS_PROVIDER_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "IRIS_USER_AGENT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub provider_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load from `.env` and the process environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring unreadable .env: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(p) if p != 0 => config.port = p,
                _ => tracing::warn!("invalid {ENV_PORT}={port:?}, using {}", config.port),
            }
        }

        if let Some(secs) = lookup(ENV_PROVIDER_TIMEOUT) {
            match secs.trim().parse::<u64>() {
                Ok(s) if s > 0 => config.provider_timeout = Duration::from_secs(s),
                _ => tracing::warn!(
                    "invalid {ENV_PROVIDER_TIMEOUT}={secs:?}, using {}s",
                    config.provider_timeout.as_secs()
                ),
            }
        }

        if let Some(ua) = lookup(ENV_USER_AGENT).filter(|u| !u.trim().is_empty()) {
            config.user_agent = ua;
        }

        config
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
