// File: src/config.rs
// Purpose: Configuration parsing from signup.toml with environment overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;
use crate::rules::PhonePolicy;

pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Knobs of the registration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default)]
    pub phone_policy: PhonePolicy,

    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_password_min_length() -> usize {
    8
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            phone_policy: PhonePolicy::default(),
            password_min_length: default_password_min_length(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Load from `SIGNUP_CONFIG` (or `signup.toml`), then apply `SIGNUP_*` overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();

        let path = lookup("SIGNUP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load(path)?;
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply `SIGNUP_HOST`, `SIGNUP_PORT` and `SIGNUP_PHONE_POLICY` from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SIGNUP_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("SIGNUP_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(policy) = lookup("SIGNUP_PHONE_POLICY") {
            self.validation.phone_policy = policy.parse()?;
        }

        Ok(())
    }

    /// `host:port` to bind
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.validation.phone_policy, PhonePolicy::Numeric);
        assert_eq!(config.validation.password_min_length, 8);
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [server]
            port = 8080

            [validation]
            phone_policy = "international"
        "#;

        let config = AppConfig::parse(toml, Path::new("signup.toml")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.validation.phone_policy, PhonePolicy::International);
        assert_eq!(config.validation.password_min_length, 8);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let toml = r#"
            [validation]
            phone_policy = "e164"
        "#;

        let err = AppConfig::parse(toml, Path::new("signup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("/nonexistent/signup.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SIGNUP_HOST", "0.0.0.0"),
            ("SIGNUP_PORT", "9000"),
            ("SIGNUP_PHONE_POLICY", "international"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.address(), "0.0.0.0:9000");
        assert_eq!(config.validation.phone_policy, PhonePolicy::International);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(|key| (key == "SIGNUP_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }
}
