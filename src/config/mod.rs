// SPDX-License-Identifier: MPL-2.0
//! This module handles the configuration, including loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toast]` - Default toast duration and progress bar
//! - `[modal]` - Which implicit triggers dismiss a modal
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FEEDBACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_feedback::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.default_duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::timing::ToastDuration;
use crate::error::{Error, Result};
use crate::modal::ModalBehavior;
use crate::toast::ToastDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "id").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme of the demo window.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast defaults applied when a toast leaves them unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Display time in milliseconds; `0` keeps toasts until closed.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Show a depleting progress bar.
    #[serde(
        default = "default_toast_show_progress",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_progress: Option<bool>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration_ms(),
            show_progress: default_toast_show_progress(),
        }
    }
}

/// Modal dismissal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModalConfig {
    #[serde(
        default = "default_dismiss_on_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_backdrop: Option<bool>,

    #[serde(
        default = "default_dismiss_on_escape",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_escape: Option<bool>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            dismiss_on_backdrop: default_dismiss_on_backdrop(),
            dismiss_on_escape: default_dismiss_on_escape(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub modal: ModalConfig,
}

impl Config {
    /// Toast defaults, with the duration capped at [`MAX_TOAST_DURATION_MS`].
    #[must_use]
    pub fn toast_defaults(&self) -> ToastDefaults {
        let millis = self
            .toast
            .default_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        ToastDefaults {
            duration: ToastDuration::from_millis(millis),
            show_progress: self
                .toast
                .show_progress
                .unwrap_or(DEFAULT_TOAST_SHOW_PROGRESS),
        }
    }

    #[must_use]
    pub fn modal_behavior(&self) -> ModalBehavior {
        ModalBehavior {
            dismiss_on_backdrop: self
                .modal
                .dismiss_on_backdrop
                .unwrap_or(DEFAULT_DISMISS_ON_BACKDROP),
            dismiss_on_escape: self
                .modal
                .dismiss_on_escape
                .unwrap_or(DEFAULT_DISMISS_ON_ESCAPE),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_toast_show_progress() -> Option<bool> {
    Some(DEFAULT_TOAST_SHOW_PROGRESS)
}

fn default_dismiss_on_backdrop() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_BACKDROP)
}

fn default_dismiss_on_escape() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_ESCAPE)
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings ignored");
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
    if let Some(path) = config_path_with_override(base_dir) {
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("id".to_string()),
                theme_mode: ThemeMode::Light,
            },
            toast: ToastConfig {
                default_duration_ms: Some(5000),
                show_progress: Some(true),
            },
            modal: ModalConfig {
                dismiss_on_backdrop: Some(false),
                dismiss_on_escape: Some(true),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast\nbroken")
            .expect("failed to write invalid toml");

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
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\ndefault_duration_ms = 0\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert!(loaded.toast_defaults().duration.is_persistent());
        assert_eq!(loaded.modal, ModalConfig::default());
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn toast_defaults_cap_duration() {
        let mut config = Config::default();
        config.toast.default_duration_ms = Some(u64::MAX);
        assert_eq!(
            config.toast_defaults().duration.as_millis(),
            MAX_TOAST_DURATION_MS
        );
    }

    #[test]
    fn default_config_matches_built_in_behavior() {
        let config = Config::default();
        assert_eq!(config.toast_defaults(), ToastDefaults::default());
        assert_eq!(config.modal_behavior(), ModalBehavior::default());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
