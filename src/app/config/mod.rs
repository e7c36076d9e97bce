// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Slideshow auto-play interval and swipe threshold
//! - `[hero]` - Typing effect speed
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::app::config::{self, Config};
//! use folio::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme preference. The toggle only ever writes "light" or "dark".
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Delay between automatic advances, in milliseconds.
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    /// Minimum horizontal travel of a touch gesture to count as a swipe.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

/// Hero banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Delay between typed characters, in milliseconds.
    #[serde(
        default = "default_typing_speed_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub typing_speed_ms: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: default_typing_speed_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub hero: HeroConfig,
}

impl Config {
    /// Auto-play interval, clamped to the supported range.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        let ms = self
            .gallery
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Swipe threshold in logical pixels, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.gallery
            .swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
            .clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }

    /// Typing speed, clamped to the supported range.
    #[must_use]
    pub fn typing_speed(&self) -> Duration {
        let ms = self
            .hero
            .typing_speed_ms
            .unwrap_or(DEFAULT_TYPING_SPEED_MS)
            .clamp(MIN_TYPING_SPEED_MS, MAX_TYPING_SPEED_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_typing_speed_ms() -> Option<u64> {
    Some(DEFAULT_TYPING_SPEED_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                autoplay_interval_ms: Some(3000),
                swipe_threshold_px: Some(80.0),
            },
            hero: HeroConfig {
                typing_speed_ms: Some(50),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_warning_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.general.language, None);
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(
            config.typing_speed(),
            Duration::from_millis(DEFAULT_TYPING_SPEED_MS)
        );
    }

    #[test]
    fn theme_mode_is_stored_as_single_string() {
        let config = Config {
            general: GeneralConfig {
                language: None,
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("theme_mode = \"dark\""));
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[gallery]\nautoplay_interval_ms = 2500")
            .expect("valid config");
        assert_eq!(config.autoplay_interval(), Duration::from_millis(2500));
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            gallery: GalleryConfig {
                autoplay_interval_ms: Some(10),
                swipe_threshold_px: Some(5000.0),
            },
            hero: HeroConfig {
                typing_speed_ms: Some(0),
            },
            ..Config::default()
        };
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.swipe_threshold(), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(
            config.typing_speed(),
            Duration::from_millis(MIN_TYPING_SPEED_MS)
        );
    }
}
