use std::env;
use std::net::SocketAddr;

// ─────────────────────────────────────────────────────────────────────────────
// Service metadata
// ─────────────────────────────────────────────────────────────────────────────

pub const SERVICE_NAME: &str = "Marine Engine Diagnostic API";
pub const SERVICE_DESCRIPTION: &str = "Analysis of 2-stroke marine engine indicator diagrams";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_CONTACT_NAME: &str = "API Support";
pub const SERVICE_CONTACT_EMAIL: &str = "2468by4koff@gmail.com";
pub const SERVICE_LICENSE: &str = "MIT";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

pub const HOST_VAR: &str = "DIAG_HOST";
pub const PORT_VAR: &str = "DIAG_PORT";
pub const MAX_UPLOAD_VAR: &str = "DIAG_MAX_UPLOAD_BYTES";
pub const LOG_VAR: &str = "DIAG_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; unset or blank
    /// keys fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(HOST_VAR) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = parse_value(PORT_VAR, &port)?;
        }
        if let Some(limit) = get(MAX_UPLOAD_VAR) {
            config.max_upload_bytes = parse_value(MAX_UPLOAD_VAR, &limit)?;
        }
        if let Some(filter) = get(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 9090 "),
            (MAX_UPLOAD_VAR, "1024"),
            (LOG_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "  ")])).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: PORT_VAR, .. }));
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, "not a host")])).unwrap();
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
