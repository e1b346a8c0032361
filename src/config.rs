//! Configuration loading and management
//!
//! Handles parsing of the optional `tl.toml` file in the data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::record::Priority;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Task defaults
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Override for the data directory (defaults to the platform data dir)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Task defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority assigned when `--priority` is not given
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
        }
    }
}

impl Config {
    /// Load configuration from a `tl.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `tl.toml` from the data directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join("tl.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parsed default priority.
    pub fn default_priority(&self) -> crate::error::Result<Priority> {
        self.tasks
            .default_priority
            .parse::<Priority>()
            .map_err(|_| {
                crate::error::Error::InvalidConfig(format!(
                    "tasks.default_priority '{}' (expected low|medium|high)",
                    self.tasks.default_priority
                ))
            })
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.default_priority()?;
        Ok(())
    }
}
