//! Frontend configuration.
//!
//! Loaded from `keycalc/config.toml` under the user config directory; every
//! field has a default so the file is optional. Only presentation concerns
//! live here — the display's formatting policy is engine behavior and is not
//! configurable.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feedback: FeedbackConfig,
}

/// Press-feedback settings for the interactive keypad.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Ring the terminal bell on every key press.
    pub bell: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { bell: true }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keycalc")
            .join("config.toml")
    }

    /// Load the config file, or the defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.feedback.bell);
    }

    #[test]
    fn test_parse_from_toml() {
        let config: Config = toml::from_str("[feedback]\nbell = false\n").unwrap();
        assert!(!config.feedback.bell);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.feedback.bell);
    }
}
