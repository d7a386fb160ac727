//! Environment and feature configuration.
//!
//! Configuration is read from `config.toml` in the Drift config directory.
//! These types cover the runtime configuration the action engine cares
//! about: the host environment and the feature switches.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Peer id of the service notifications account.
pub const SERVICE_NOTIFICATIONS_USER_ID: &str = "777000";

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host environment.
    #[serde(default)]
    pub environment: Environment,

    /// Feature switches.
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from the default path.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Host environment the client runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Host platform.
    #[serde(default)]
    pub platform: Platform,

    /// Whether the host can open a chat in a separate tab or window.
    #[serde(default = "default_true")]
    pub open_in_new_tab: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            open_in_new_tab: true,
        }
    }
}

/// Host platform. Decides the open-in-new-surface wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Desktop shell; chats open in a new window.
    Desktop,
    /// Browser; chats open in a new tab.
    #[default]
    Browser,
}

/// Feature switches for the action catalog.
///
/// The chat-list menu shipped in two historical variants: one with a snooze
/// entry, one with a done toggle. Both are expressed as switches here; the
/// done variant is the canonical default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Offer the snooze (notify me) entry in chat lists.
    #[serde(default)]
    pub snooze: bool,

    /// Offer the done/not-done toggle in chat lists.
    #[serde(default = "default_true")]
    pub done: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            snooze: false,
            done: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("drift"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
