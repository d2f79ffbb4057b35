//! Configuration management for feedview

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Lower bound for the event poll interval
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewer profile shown in the sidebar
    pub profile: ProfileConfig,
    /// Feed source settings
    pub feed: FeedConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FeedError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| FeedError::from(e).with_context(format!("Invalid config {}", path.display())))?;

        // A relative feed path is relative to the config file
        if let (Some(feed), Some(dir)) = (config.feed.path.as_mut(), path.parent()) {
            if feed.is_relative() {
                *feed = dir.join(&*feed);
            }
        }

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, otherwise the
    /// platform config file is used when present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform configuration file location
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "feedview", "feedview")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Sidebar profile of the person viewing the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name
    pub name: String,
    /// Role or headline
    pub role: String,
    /// Avatar URL (displayed as text)
    pub avatar_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Felipe Dantas".to_string(),
            role: "Frontend Developer".to_string(),
            avatar_url: "https://github.com/feliperbdantas.png".to_string(),
        }
    }
}

/// Feed source configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed file to load instead of the built-in posts
    pub path: Option<PathBuf>,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the profile sidebar
    pub show_sidebar: bool,
    /// Color theme ("default" or "mono")
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl UiConfig {
    /// Event poll interval, never below [`MIN_TICK_RATE_MS`]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_sidebar: true,
            theme: "default".to_string(),
            tick_rate_ms: 250,
        }
    }
}
