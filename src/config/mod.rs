// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded read-only
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme preference
//! - `[carousel]` - Testimonial rotation interval and autoplay
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `CLINIC_BROCHURE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! Flat config files (top-level keys, no sections) are migrated to the
//! sectioned format when loaded.
//!
//! # Examples
//!
//! ```no_run
//! use clinic_brochure::config;
//!
//! // Returns defaults plus an optional warning key if the file is unreadable
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("config warning: {key}");
//! }
//! println!("{:?}", config.carousel.rotation());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::controller::{RotationInterval, RotationSettings};
use crate::error::Result;
use crate::ui::theming::ThemePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Notification key used when the config file exists but cannot be used.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "bn").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Page theme (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_preference")]
    pub theme: ThemePreference,
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Seconds between automatic advances.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u32,

    /// Whether the carousel rotates on its own.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_ROTATION_INTERVAL_SECS,
            autoplay: true,
        }
    }
}

impl CarouselConfig {
    /// Rotation settings with the interval clamped to the supported range.
    #[must_use]
    pub fn rotation(&self) -> RotationSettings {
        RotationSettings {
            interval: RotationInterval::new(self.interval_secs),
            autoplay: self.autoplay,
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
    pub carousel: CarouselConfig,
}

// =============================================================================
// Legacy Config (for migration from flat format)
// =============================================================================

/// Flat configuration format without section tables.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_theme_preference")]
    theme: ThemePreference,
    #[serde(default = "default_interval_secs")]
    interval_secs: u32,
    #[serde(default = "default_autoplay")]
    autoplay: bool,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language,
                theme: legacy.theme,
            },
            carousel: CarouselConfig {
                interval_secs: legacy.interval_secs,
                autoplay: legacy.autoplay,
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_secs() -> u32 {
    DEFAULT_ROTATION_INTERVAL_SECS
}

fn default_autoplay() -> bool {
    true
}

fn deserialize_theme_preference<'de, D>(
    deserializer: D,
) -> std::result::Result<ThemePreference, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemePreference::parse(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid theme: {}", raw)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default configuration");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// A file without a `[general]` or `[carousel]` table is read as the legacy
/// flat format and migrated. Invalid values in a sectioned file are errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table = content.parse()?;

    if table.contains_key("general") || table.contains_key("carousel") {
        return Ok(table.try_into::<Config>()?);
    }

    let legacy: LegacyConfig = table.try_into()?;
    Ok(Config::from(legacy))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write settings");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme, ThemePreference::Light);
        assert_eq!(config.carousel.interval_secs, DEFAULT_ROTATION_INTERVAL_SECS);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            r#"
[general]
language = "bn"
theme = "dark"

[carousel]
interval_secs = 8
autoplay = false
"#,
        );

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("bn"));
        assert_eq!(config.general.theme, ThemePreference::Dark);
        assert_eq!(config.carousel.interval_secs, 8);
        assert!(!config.carousel.autoplay);
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[carousel]\ninterval_secs = 3\n");

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.carousel.interval_secs, 3);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn migrate_legacy_flat_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "language = \"en-US\"\ntheme = \"system\"\ninterval_secs = 10\n",
        );

        let config = load_from_path(&path).expect("failed to load legacy config");
        assert_eq!(config.general.language.as_deref(), Some("en-US"));
        assert_eq!(config.general.theme, ThemePreference::System);
        assert_eq!(config.carousel.interval_secs, 10);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "not = valid = toml");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_theme_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[general]\ntheme = \"sepia\"\n");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn invalid_sectioned_value_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[carousel]\ninterval_secs = \"five\"\n");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn invalid_sectioned_value_warns_on_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "[carousel]\ninterval_secs = \"five\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn commented_section_header_does_not_hide_legacy_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "# [general] moved to the top level\ntheme = \"dark\"\n",
        );

        let config = load_from_path(&path).expect("failed to load legacy config");
        assert_eq!(config.general.theme, ThemePreference::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "[general\nbroken");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn rotation_clamps_out_of_range_interval() {
        let carousel = CarouselConfig {
            interval_secs: 0,
            autoplay: true,
        };
        assert_eq!(
            carousel.rotation().interval.value(),
            MIN_ROTATION_INTERVAL_SECS
        );
    }
}
