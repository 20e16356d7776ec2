//! Configuration loading for Hestia.
//! Reads hestia.toml from the current directory or path in HESTIA_CONFIG
//! env var. A missing file is not an error: the service runs on defaults,
//! matching how it behaves with no configuration at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,
}

fn default_model_path()  -> String { "linear_regression_model.json".to_string() }
fn default_scaler_path() -> String { "scaler.json".to_string() }

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self { model_path: default_model_path(), scaler_path: default_scaler_path() }
    }
}

impl Config {
    /// Load configuration from hestia.toml.
    /// Checks HESTIA_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("HESTIA_CONFIG").unwrap_or_else(|_| "hestia.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load configuration from an explicit path, defaulting when absent.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_entrypoint() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.artifacts.model_path, "linear_regression_model.json");
        assert_eq!(config.artifacts.scaler_path, "scaler.json");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("hestia.toml")).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hestia.toml");
        std::fs::write(&path, "[server]\nport = 9001\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.artifacts.scaler_path, "scaler.json");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hestia.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
