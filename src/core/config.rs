//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "aerocode";

/// Aerocode configuration with layered hierarchy
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the state file
    pub data_file: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/aerocode/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                match std::fs::read_to_string(&global_path) {
                    Ok(contents) => match serde_yml::from_str::<Config>(&contents) {
                        Ok(global) => config.merge(global),
                        Err(e) => {
                            tracing::warn!(path = %global_path.display(), error = %e, "ignoring malformed config")
                        }
                    },
                    Err(e) => {
                        tracing::warn!(path = %global_path.display(), error = %e, "ignoring unreadable config")
                    }
                }
            }
        }

        // 3. Environment variables
        config.merge(Self::from_env());

        config
    }

    fn from_env() -> Self {
        Config {
            data_file: std::env::var_os("AERO_DATA")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            default_format: std::env::var("AERO_FORMAT").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Default state file under the platform data directory
    pub fn default_data_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().join(format!("{}.json", APP_NAME)))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve the state file path; an explicit override wins
    pub fn data_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| self.data_file.clone())
            .or_else(Self::default_data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            data_file: Some(PathBuf::from("/a.json")),
            default_format: Some("tsv".to_string()),
        };
        base.merge(Config {
            data_file: Some(PathBuf::from("/b.json")),
            default_format: None,
        });

        assert_eq!(base.data_file, Some(PathBuf::from("/b.json")));
        assert_eq!(base.default_format.as_deref(), Some("tsv"));
    }

    #[test]
    fn test_explicit_data_path_wins() {
        let config = Config {
            data_file: Some(PathBuf::from("/from-config.json")),
            default_format: None,
        };
        assert_eq!(
            config.data_path(Some(PathBuf::from("/cli.json"))),
            Some(PathBuf::from("/cli.json"))
        );
        assert_eq!(config.data_path(None), Some(PathBuf::from("/from-config.json")));
    }

    #[test]
    fn test_config_yaml_parse() {
        let config: Config = serde_yml::from_str("data_file: /tmp/x.json\n").unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert!(config.default_format.is_none());
    }
}
