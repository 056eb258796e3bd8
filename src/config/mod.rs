// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[card]` - Swipe threshold, rotation, fling distance and animation tuning
//! - `[deck]` - Default deck file shown by the demo host
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set the `ICED_SWIPE_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_swipe::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.card.swipe_threshold = Some(120.0);
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::card::{
    AnimationDuration, DismissDistanceFactor, RotationDivisor, SpringDamping, SwipeSettings,
    SwipeThreshold,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSwipe";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SWIPE_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Swipe gesture and animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardConfig {
    /// Horizontal displacement beyond which a release dismisses the card.
    #[serde(default = "default_swipe_threshold", skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    /// Horizontal distance per degree of rotation while dragging.
    #[serde(default = "default_rotation_divisor", skip_serializing_if = "Option::is_none")]
    pub rotation_divisor: Option<f32>,

    /// Fling distance as a multiple of the threshold.
    #[serde(
        default = "default_dismiss_distance_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_distance_factor: Option<f32>,

    /// Release animation duration in milliseconds.
    #[serde(
        default = "default_animation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_ms: Option<u64>,

    /// Damping ratio of the release spring (0.1 to 1.0).
    #[serde(default = "default_spring_damping", skip_serializing_if = "Option::is_none")]
    pub spring_damping: Option<f32>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            rotation_divisor: default_rotation_divisor(),
            dismiss_distance_factor: default_dismiss_distance_factor(),
            animation_duration_ms: default_animation_duration_ms(),
            spring_damping: default_spring_damping(),
        }
    }
}

impl CardConfig {
    /// Validated swipe settings; missing values fall back to defaults and
    /// out-of-range values are clamped.
    #[must_use]
    pub fn swipe_settings(&self) -> SwipeSettings {
        SwipeSettings {
            threshold: self
                .swipe_threshold
                .map(SwipeThreshold::new)
                .unwrap_or_default(),
            rotation: self
                .rotation_divisor
                .map(RotationDivisor::new)
                .unwrap_or_default(),
            dismiss_factor: self
                .dismiss_distance_factor
                .map(DismissDistanceFactor::new)
                .unwrap_or_default(),
            duration: self
                .animation_duration_ms
                .map(AnimationDuration::from_millis)
                .unwrap_or_default(),
            damping: self
                .spring_damping
                .map(SpringDamping::new)
                .unwrap_or_default(),
        }
    }
}

/// Deck shown by the demo host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeckConfig {
    /// Deck file loaded when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Swipe gesture settings.
    #[serde(default)]
    pub card: CardConfig,

    /// Deck settings.
    #[serde(default)]
    pub deck: DeckConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_rotation_divisor() -> Option<f32> {
    Some(DEFAULT_ROTATION_DIVISOR)
}

fn default_dismiss_distance_factor() -> Option<f32> {
    Some(DEFAULT_DISMISS_DISTANCE_FACTOR)
}

fn default_animation_duration_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_DURATION_MS)
}

fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment
/// variable, then the platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from `base_dir`, or from the default directory
/// when `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to `base_dir`, or to the default directory when
/// `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no configuration directory available".into())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
