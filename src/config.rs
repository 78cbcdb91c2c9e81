//! Server configuration

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the listen address
pub const ADDR_ENV: &str = "RECORDSTORE_ADDR";

/// Environment variable overriding the log level
pub const LOG_ENV: &str = "RECORDSTORE_LOG";

/// Runtime configuration for the task server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub addr: String,

    /// Default tracing level when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: "127.0.0.1:8080".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON configuration; missing fields keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid configuration")
    }

    /// Read a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.addr = addr;
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.log_level = level;
        }
        self
    }

    /// Load from an optional file, then apply process environment overrides
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|name| std::env::var(name).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"addr": "0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_json() {
        assert!(Config::from_json("{addr").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(|name| match name {
            LOG_ENV => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_file_then_env_override() {
        let path = std::env::temp_dir().join(format!(
            "recordstore-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"addr": "0.0.0.0:1", "log_level": "warn"}"#).unwrap();

        let from_file = Config::from_file(&path).unwrap();
        assert_eq!(from_file.addr, "0.0.0.0:1");
        assert_eq!(from_file.log_level, "warn");

        let config = from_file.with_overrides(|name| match name {
            ADDR_ENV => Some("127.0.0.1:2".to_string()),
            _ => None,
        });
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.addr, "127.0.0.1:2");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("recordstore-config-does-not-exist.json");
        assert!(Config::from_file(&path).is_err());
        assert!(Config::load(Some(path.as_path())).is_err());
    }
}
