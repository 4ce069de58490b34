//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads the path in `GENIUSHUB_CONFIG` when set, which must exist.
//! Otherwise looks for `geniushub.toml` in the working directory, which is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use geniushub_domain::connection::{Connection, ConnectionConfig};

/// Default configuration file name.
const DEFAULT_PATH: &str = "geniushub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Hub connection block.
    pub geniushub: ConnectionConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from file (if present) then apply environment
    /// overrides and validate the connection block.
    ///
    /// # Errors
    ///
    /// Returns an error if the file named by `GENIUSHUB_CONFIG` is missing,
    /// if a file exists but is unreadable or malformed, or if the connection
    /// block matches neither accepted shape.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("GENIUSHUB_CONFIG") {
            Ok(path) => Self::from_explicit_file(&path)?,
            Err(_) => Self::from_file(DEFAULT_PATH)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_explicit_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let hub = &mut self.geniushub;
        for (key, slot) in [
            ("GENIUSHUB_HOST", &mut hub.host),
            ("GENIUSHUB_USERNAME", &mut hub.username),
            ("GENIUSHUB_PASSWORD", &mut hub.password),
            ("GENIUSHUB_TOKEN", &mut hub.token),
        ] {
            if let Some(val) = lookup(key) {
                *slot = Some(val);
            }
        }
        if let Some(val) = lookup("GENIUSHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<Connection, ConfigError> {
        Ok(self.geniushub.validate()?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "geniushubd=info,geniushub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The `[geniushub]` block matches neither connection shape.
    #[error("invalid [geniushub] section: {0}")]
    Validation(#[from] geniushub_domain::error::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use geniushub_domain::error::ConfigError as ConnectionError;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "geniushubd=info,geniushub=info");
        assert!(config.geniushub.token.is_none());
        assert!(config.geniushub.host.is_none());
    }

    #[test]
    fn should_parse_token_config() {
        let toml = "
            [logging]
            filter = 'debug'

            [geniushub]
            token = 'abc'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert!(matches!(
            config.validate(),
            Ok(Connection::Token { token }) if token == "abc"
        ));
    }

    #[test]
    fn should_parse_host_config() {
        let toml = "
            [geniushub]
            host = '192.168.1.20'
            username = 'admin'
            password = 'secret'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(config.validate(), Ok(Connection::Host { .. })));
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let toml = "
            [geniushub]
            token = 'abc'
            scan_interval = 10

            [other_integration]
            enabled = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_both_shapes_together() {
        let toml = "
            [geniushub]
            token = 'abc'
            host = '192.168.1.20'
            username = 'admin'
            password = 'secret'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(ConnectionError::Conflicting))
        ));
    }

    #[test]
    fn should_reject_missing_connection() {
        assert!(matches!(
            Config::default().validate(),
            Err(ConfigError::Validation(ConnectionError::Missing))
        ));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.logging.filter, "geniushubd=info,geniushub=info");
    }

    #[test]
    fn should_fail_when_explicit_file_not_found() {
        let result = Config::from_explicit_file("nonexistent.toml");
        assert!(matches!(
            result,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_override_connection_from_environment() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("GENIUSHUB_TOKEN", "from-env")]));
        assert_eq!(config.geniushub.token.as_deref(), Some("from-env"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_prefer_rust_log_over_geniushub_log() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("GENIUSHUB_LOG", "warn"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_values_without_environment() {
        let mut config: Config = toml::from_str("[geniushub]\nhost = 'hub.local'").unwrap();
        config.apply_overrides(lookup_from(&[
            ("GENIUSHUB_USERNAME", "admin"),
            ("GENIUSHUB_PASSWORD", "secret"),
        ]));
        assert_eq!(config.geniushub.host.as_deref(), Some("hub.local"));
        assert!(matches!(config.validate(), Ok(Connection::Host { .. })));
    }
}
