//! Configuration management for record-ring.
//!
//! One TOML file under the platform config directory holds the control
//! tuning, theme and harness behavior. Tuning is validated by the core
//! when the control is built, so loading never rejects a file outright.

use crate::{
    AppError, AppResult,
    config::{BehaviourConfig, ButtonConfig, ThemeConfig, parse_color},
};

use std::{fs, io::Write, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Record control tuning.
    #[serde(default)]
    pub button: ButtonConfig,
    /// Control colors.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Harness behavior settings.
    #[serde(default)]
    pub behaviour: BehaviourConfig,
}

impl Config {
    /// Load configuration from disk, writing a default file if none
    /// exists.
    ///
    /// Tuning values are NOT validated here; the core rejects an
    /// unusable configuration when the control is built, so a bad file
    /// can still be opened and corrected.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk.
    ///
    /// Writes to a temporary file first, then renames, so a crash
    /// mid-write cannot leave a corrupt file behind.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Resolve the file sections into the core control configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidColor`] for an unparseable theme entry.
    #[track_caller]
    pub fn control_config(&self) -> AppResult<record_ring_core::ButtonConfig> {
        Ok(record_ring_core::ButtonConfig {
            time_limit: self.button.time_limit,
            outer_ring_color: parse_color("outer_ring", &self.theme.outer_ring)?,
            center_disc_color: parse_color("center_disc", &self.theme.center_disc)?,
            progress_color: parse_color("progress", &self.theme.progress)?,
            background_color: parse_color("background", &self.theme.background)?,
            outer_ring_scale: self.button.outer_ring_scale,
            center_disc_scale: self.button.center_disc_scale,
            center_disc_recording_scale: self.button.center_disc_recording_scale,
            progress_width_scale: self.button.progress_width_scale,
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "record-ring", "Record-Ring").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
