//! seriesctl configuration
//!
//! Merges `config/seriesctl.yaml` with `SERIESCTL_`-prefixed environment
//! variables. Every field has a default so the tool runs without a config
//! file.

use std::path::PathBuf;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the store files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Store selected when the interactive prompt is left blank
    #[serde(default = "default_store")]
    pub default_store: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_store() -> String {
    "series".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_store: default_store(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        let config = Figment::new()
            .merge(Yaml::file("config/seriesctl.yaml"))
            .merge(Env::prefixed("SERIESCTL_"))
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        Ok(config)
    }

    /// Resolve a store name to its database file path.
    pub fn store_path(&self, store: &str) -> PathBuf {
        self.data_dir.join(format!("{}.db", store))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_store, "series");
        assert_eq!(config.store_path("eba"), PathBuf::from("data/eba.db"));
    }
}
