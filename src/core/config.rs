//! Runtime configuration with documented defaults
//!
//! Loaded from a TOML file with `[playback]` and `[assets]` tables. Every
//! field has a default, so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{Result, SpriteError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub playback: PlaybackConfig,
    pub assets: AssetConfig,
}

/// Settings applied to every newly created animation player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Multiplier applied to elapsed time before it is accumulated.
    ///
    /// Must be positive. 2.0 plays twice as fast, 0.5 at half speed.
    pub default_speed: f64,

    /// Whether players re-enter their section at a boundary.
    ///
    /// When false, a player clamps on the last frame of a cycle and
    /// finishes instead of wrapping.
    pub looping: bool,

    /// Upper bound on frame steps taken by a single `update` call.
    ///
    /// A huge elapsed time (debugger pause, window drag) or an extreme
    /// speed would otherwise step through thousands of frames in one tick.
    /// Progress beyond the cap is discarded.
    pub max_steps_per_update: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            looping: true,
            max_steps_per_update: 1024,
        }
    }
}

/// Where assets are discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory scanned recursively for prefixed image files.
    pub asset_dir: PathBuf,

    /// Directory scanned recursively for definition files.
    pub data_dir: PathBuf,

    /// Extension of definition files (without the dot).
    pub data_extension: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            data_dir: PathBuf::from("data"),
            data_extension: "json".to_string(),
        }
    }
}

impl SpriteConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SpriteConfig = toml::from_str(content)?;
        config.validate().map_err(SpriteError::Configuration)?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.playback.validate()?;

        if self.assets.data_extension.is_empty() || self.assets.data_extension.starts_with('.') {
            return Err(format!(
                "data_extension ({:?}) must be a bare extension such as \"json\"",
                self.assets.data_extension
            ));
        }

        Ok(())
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.default_speed <= 0.0 || !self.default_speed.is_finite() {
            return Err(format!(
                "default_speed ({}) must be a positive number",
                self.default_speed
            ));
        }

        if self.max_steps_per_update == 0 {
            return Err("max_steps_per_update must be at least 1".into());
        }

        Ok(())
    }
}
