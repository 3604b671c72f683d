// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget configuration, including loading and saving
//! host preferences to an `overlays.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_overlays::config::{self, Config};
//! use iced_overlays::ui::notifications::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toast_position = Some(Position::TopCenter);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::Position;
use crate::ui::sidebar::{PanelOptions, Side};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "overlays.toml";
const APP_NAME: &str = "IcedOverlays";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub toast_position: Option<Position>,
    #[serde(default)]
    pub sidebar_side: Option<Side>,
    #[serde(default)]
    pub sidebar_width: Option<f32>,
    #[serde(default)]
    pub sidebar_overlay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            toast_position: Some(Position::default()),
            sidebar_side: Some(Side::default()),
            sidebar_width: Some(DEFAULT_SIDEBAR_WIDTH),
            sidebar_overlay: Some(true),
        }
    }
}

/// Defaults applied to every toast that does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub duration: Duration,
    pub position: Position,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            position: Position::default(),
        }
    }
}

impl Config {
    /// Returns the toast defaults described by this configuration.
    #[must_use]
    pub fn toast_defaults(&self) -> ToastDefaults {
        let fallback = ToastDefaults::default();
        ToastDefaults {
            duration: self
                .toast_duration_ms
                .map_or(fallback.duration, Duration::from_millis),
            position: self.toast_position.unwrap_or(fallback.position),
        }
    }

    /// Builds panel options, clamping the width to the supported range.
    ///
    /// Non-finite widths fall back to the default.
    #[must_use]
    pub fn panel_options(&self) -> PanelOptions {
        let width = self
            .sidebar_width
            .filter(|width| width.is_finite())
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
            .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);

        PanelOptions::default()
            .side(self.sidebar_side.unwrap_or_default())
            .width(width)
            .overlay(self.sidebar_overlay.unwrap_or(true))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
