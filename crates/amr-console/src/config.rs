//! Broker configuration.
//!
//! Connection options come from CLI flags first, then environment
//! variables. A missing URL is not an error here; the console starts with
//! the feed disabled and a descriptive connection error instead.

#![allow(missing_docs)]

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConsoleError;

pub const ENV_URL: &str = "AMR_MQTT_URL";
pub const ENV_CLIENT_ID: &str = "AMR_MQTT_CLIENT_ID";
pub const ENV_USERNAME: &str = "AMR_MQTT_USERNAME";
pub const ENV_PASSWORD: &str = "AMR_MQTT_PASSWORD";

const DEFAULT_PORT: u16 = 1883;

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub url: Option<String>,
    pub client_id: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl BrokerConfig {
    /// Resolve the configuration from explicit values (CLI flags) with
    /// environment fallback.
    #[must_use]
    pub fn resolve(
        url: Option<String>,
        client_id: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            url: non_empty(url).or_else(|| env_var(ENV_URL)),
            client_id: non_empty(client_id)
                .or_else(|| env_var(ENV_CLIENT_ID))
                .unwrap_or_else(default_client_id),
            username: non_empty(username).or_else(|| env_var(ENV_USERNAME)),
            password: non_empty(password).or_else(|| env_var(ENV_PASSWORD)),
        }
    }
}

/// A resolved broker address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Parse `mqtt://host[:port]`, `tcp://host[:port]` or a bare
    /// `host[:port]`. The default port is 1883.
    pub fn parse(url: &str) -> Result<Self, ConsoleError> {
        let trimmed = url.trim();
        let rest = if let Some((scheme, rest)) = trimmed.split_once("://") {
            match scheme.to_ascii_lowercase().as_str() {
                "mqtt" | "tcp" => rest,
                other => {
                    return Err(ConsoleError::InvalidConfig(format!(
                        "unsupported broker scheme '{other}' in '{trimmed}' (expected mqtt:// or tcp://)"
                    )));
                }
            }
        } else {
            trimmed
        };
        let authority = rest.split('/').next().unwrap_or_default();
        if authority.is_empty() {
            return Err(ConsoleError::InvalidConfig(format!(
                "missing broker host in '{trimmed}'"
            )));
        }
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    ConsoleError::InvalidConfig(format!(
                        "invalid broker port '{port}' in '{trimmed}'"
                    ))
                })?;
                (host, port)
            }
            None => (authority, DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(ConsoleError::InvalidConfig(format!(
                "missing broker host in '{trimmed}'"
            )));
        }
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

/// Broker-unique client id with a random-looking suffix.
#[must_use]
pub fn default_client_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u128(nanos);
    format!("amr-console-{:06x}", hasher.finish() & 0x00ff_ffff)
}
