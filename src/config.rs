//! Network configuration
//!
//! Loaded from YAML; every field is optional and falls back to its default.

use crate::algo::SpanProbe;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Analysis and history settings for a [`LogisticsNetwork`](crate::LogisticsNetwork)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Default `k` for the top central hubs query
    pub top_k: usize,
    /// Farthest-hub probe used by the most-distant-hubs query
    pub span_probe: SpanProbe,
    /// Save the pre-mutation state before every successful mutation.
    ///
    /// Each save clones the whole store, so building a network one call at a
    /// time costs O(n²); wrap bulk edits in `LogisticsNetwork::batch`.
    pub record_history: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            span_probe: SpanProbe::DepthFirst,
            record_history: true,
            log_level: "info".to_string(),
        }
    }
}

impl NetworkConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading network config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.span_probe, SpanProbe::DepthFirst);
        assert!(config.record_history);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = NetworkConfig::from_yaml_str("top_k: 3\nspan_probe: eccentricity\n").unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.span_probe, SpanProbe::Eccentricity);
        assert!(config.record_history);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = NetworkConfig::from_yaml_str("top_k: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "record_history: false").unwrap();
        writeln!(file, "log_level: debug").unwrap();

        let config = NetworkConfig::load(file.path()).unwrap();
        assert!(!config.record_history);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NetworkConfig::load(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = NetworkConfig {
            top_k: 2,
            span_probe: SpanProbe::Eccentricity,
            ..NetworkConfig::default()
        };
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(NetworkConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
