//! Server configuration loaded from environment variables.
//!
//! All settings come from the process environment (or a `.env` file via
//! `dotenvy`):
//!
//! | Key          | Default   | Meaning                                 |
//! |--------------|-----------|-----------------------------------------|
//! | `HOST`       | `0.0.0.0` | Interface to bind                       |
//! | `PORT`       | `3000`    | TCP port                                |
//! | `MOCK_SEED`  | unset     | Seed for generated series and tx hashes |
//! | `LOG_FORMAT` | `text`    | `json` switches to JSON log lines       |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::net::{IpAddr, SocketAddr};

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    /// `HOST` is not an IP address.
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    /// `MOCK_SEED` is not an unsigned integer.
    #[error("MOCK_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`MockConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Fixed seed for the random source; entropy when `None`.
    pub seed: Option<u64>,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
}

impl MockConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first so a `.env` file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `HOST`, `PORT` or `MOCK_SEED` is set but
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `HOST`, `PORT` or `MOCK_SEED` is set but
    /// malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host: IpAddr = match var("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };
        let seed = var("MOCK_SEED")
            .map(|raw| raw.parse().map_err(|_| ConfigError::InvalidSeed(raw)))
            .transpose()?;
        let json_logs = var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            seed,
            json_logs,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<MockConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        MockConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let Ok(config) = load(&[]) else {
            panic!("empty environment is valid");
        };
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.seed, None);
        assert!(!config.json_logs);
    }

    #[test]
    fn overrides() {
        let Ok(config) = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MOCK_SEED", "42"),
            ("LOG_FORMAT", "JSON"),
        ]) else {
            panic!("valid overrides");
        };
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.seed, Some(42));
        assert!(config.json_logs);
    }

    #[test]
    fn blank_values_fall_back() {
        let Ok(config) = load(&[("PORT", "  "), ("MOCK_SEED", "")]) else {
            panic!("blank values are unset");
        };
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            load(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            load(&[("HOST", "localhost")]),
            Err(ConfigError::InvalidHost(_))
        ));
        assert!(matches!(
            load(&[("MOCK_SEED", "-1")]),
            Err(ConfigError::InvalidSeed(_))
        ));
    }
}
