//! Server configuration loaded from the environment.

use std::path::Path;

use wrldlink_domain::ServerId;

const SERVER_ID_KEY: &str = "GAME_SERVER_ID";
const LOG_FILTER_KEY: &str = "GAME_SERVER_LOG";
const DEFAULT_LOG_FILTER: &str = "wrldlink_engine=info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("GAME_SERVER_ID=255 is reserved for offline characters")]
    ReservedServerId,
}

/// Settings a world-server process needs to coordinate presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server_id: ServerId,
    /// Default tracing filter; `RUST_LOG` overrides it.
    pub log_filter: String,
}

impl ServerConfig {
    pub fn new(server_id: ServerId) -> Self {
        Self {
            server_id,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Load from the process environment, after applying `.env.local` and `.env`
    /// from the working directory when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv(Path::new("."));
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(SERVER_ID_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(SERVER_ID_KEY))?;

        let value: u8 = raw.parse().map_err(|_| ConfigError::Invalid {
            key: SERVER_ID_KEY,
            value: raw.clone(),
        })?;
        let server_id = ServerId::new(value).map_err(|_| ConfigError::ReservedServerId)?;

        let log_filter = lookup(LOG_FILTER_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            server_id,
            log_filter,
        })
    }
}

fn load_dotenv(dir: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_server_id_and_default_filter() {
        let config = ServerConfig::from_lookup(lookup_from(&[("GAME_SERVER_ID", "3")]))
            .expect("valid config");

        assert_eq!(config.server_id.get(), 3);
        assert_eq!(config.log_filter, "wrldlink_engine=info");
    }

    #[test]
    fn honours_log_filter_override() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("GAME_SERVER_ID", " 12 "),
            ("GAME_SERVER_LOG", "wrldlink_engine=debug"),
        ]))
        .expect("valid config");

        assert_eq!(config.server_id.get(), 12);
        assert_eq!(config.log_filter, "wrldlink_engine=debug");
    }

    #[test]
    fn missing_server_id_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::Missing("GAME_SERVER_ID")));
    }

    #[test]
    fn non_numeric_server_id_is_invalid() {
        let result = ServerConfig::from_lookup(lookup_from(&[("GAME_SERVER_ID", "three")]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn out_of_range_server_id_is_invalid() {
        let result = ServerConfig::from_lookup(lookup_from(&[("GAME_SERVER_ID", "256")]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn offline_sentinel_cannot_be_a_server_id() {
        let result = ServerConfig::from_lookup(lookup_from(&[("GAME_SERVER_ID", "255")]));
        assert_eq!(result, Err(ConfigError::ReservedServerId));
    }
}
