//! Configuration file support for catpick.
//!
//! Configuration is loaded from `~/.config/catpick/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/catpick/config.toml
//! state_dir = "~/.catpick/state"
//! notifications = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory for the persisted widget state
    pub state_dir: Option<PathBuf>,

    /// Whether desktop notifications are enabled
    pub notifications: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        state_dir: Option<PathBuf>,
        notifications: Option<bool>,
    ) -> Self {
        if state_dir.is_some() {
            self.state_dir = state_dir;
        }
        if notifications.is_some() {
            self.notifications = notifications;
        }
        self
    }

    /// Get the state directory, falling back to environment variable or default.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .or_else(|| std::env::var("CATPICK_STATE_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".catpick/state")
            })
    }

    /// Whether desktop notifications are enabled.
    pub fn notifications(&self) -> bool {
        self.notifications.unwrap_or(true)
    }
}
