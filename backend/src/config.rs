//! # Tracker Configuration
//!
//! Runtime settings read from an optional YAML file. Every field has a
//! default, so a partial file (or no file at all) is fine.
//!
//! ```yaml
//! seed_on_start: true
//! default_avatar: "/placeholder.svg"
//! cascade_delete_chores: false
//! top_performer_threshold: 80
//! upcoming_limit: 5
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use shared::PLACEHOLDER_AVATAR;

use crate::domain::statistics::DEFAULT_TOP_PERFORMER_THRESHOLD;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "CHORE_TRACKER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Load the sample family and chores at startup
    pub seed_on_start: bool,
    /// Avatar given to newly created users
    pub default_avatar: String,
    /// Deleting a user also deletes the chores assigned to them
    pub cascade_delete_chores: bool,
    /// Minimum progress percentage that earns the top performer badge
    pub top_performer_threshold: u32,
    /// How many upcoming chores the dashboard shows
    pub upcoming_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_on_start: true,
            default_avatar: PLACEHOLDER_AVATAR.to_string(),
            cascade_delete_chores: false,
            top_performer_threshold: DEFAULT_TOP_PERFORMER_THRESHOLD,
            upcoming_limit: 5,
        }
    }
}

impl TrackerConfig {
    /// Load the config from `path`, falling back to defaults if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: TrackerConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Load the config named by `CHORE_TRACKER_CONFIG`, or the defaults when it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path),
            None => {
                debug!("{} not set, using default config", CONFIG_PATH_ENV);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let config = TrackerConfig::load(temp_dir.path().join("tracker.yaml")).expect("Failed to load config");

        assert_eq!(config, TrackerConfig::default());
        assert!(config.seed_on_start);
        assert_eq!(config.default_avatar, "/placeholder.svg");
        assert_eq!(config.top_performer_threshold, 80);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("tracker.yaml");
        fs::write(&path, "cascade_delete_chores: true\nupcoming_limit: 3\n").expect("Failed to write config");

        let config = TrackerConfig::load(&path).expect("Failed to load config");

        assert!(config.cascade_delete_chores);
        assert_eq!(config.upcoming_limit, 3);
        assert!(config.seed_on_start);
        assert_eq!(config.default_avatar, PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("tracker.yaml");
        fs::write(&path, "upcoming_limit: [not, a, number]\n").expect("Failed to write config");

        let error = TrackerConfig::load(&path).expect_err("config should not parse");
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = TrackerConfig {
            seed_on_start: false,
            default_avatar: "/avatars/default.png".to_string(),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&config).expect("Failed to serialize config");
        let parsed: TrackerConfig = serde_yaml::from_str(&yaml).expect("Failed to parse config");
        assert_eq!(parsed, config);
    }
}
