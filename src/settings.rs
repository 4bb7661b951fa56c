//! Game settings and preferences
//!
//! Process-wide settings read by every scene. Optionally loaded from a JSON
//! config file at startup; nothing is written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selectable pomodoro lengths (minutes), in cycling order
pub const POMODORO_OPTIONS: [u32; 7] = [1, 5, 15, 25, 30, 45, 60];
/// Selectable break lengths (minutes), in cycling order
pub const BREAK_OPTIONS: [u32; 4] = [1, 3, 5, 10];

/// Errors raised while reading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient loop volume (0.0 - 1.0)
    pub ambient_volume: f32,
    /// Mission length in minutes
    pub pomodoro_minutes: u32,
    /// Break length in minutes
    pub break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 0.7,
            ambient_volume: 0.5,
            pomodoro_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl Settings {
    /// Mission length in seconds
    pub fn pomodoro_seconds(&self) -> f32 {
        self.pomodoro_minutes as f32 * 60.0
    }

    /// Break length in seconds
    pub fn break_seconds(&self) -> f32 {
        self.break_minutes as f32 * 60.0
    }

    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_ambient_volume(&mut self, vol: f32) {
        self.ambient_volume = vol.clamp(0.0, 1.0);
    }

    /// Step the pomodoro length through `POMODORO_OPTIONS`, wrapping at both ends
    pub fn cycle_pomodoro(&mut self, direction: i32) {
        self.pomodoro_minutes = cycle_option(&POMODORO_OPTIONS, self.pomodoro_minutes, direction);
    }

    /// Step the break length through `BREAK_OPTIONS`, wrapping at both ends
    pub fn cycle_break(&mut self, direction: i32) {
        self.break_minutes = cycle_option(&BREAK_OPTIONS, self.break_minutes, direction);
    }

    /// Clamp volumes and snap unknown durations back to defaults
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(0.0..=1.0).contains(&self.sfx_volume) {
            log::warn!("sfx_volume {} out of range, clamping", self.sfx_volume);
            self.sfx_volume = clamp_volume(self.sfx_volume, defaults.sfx_volume);
        }
        if !(0.0..=1.0).contains(&self.ambient_volume) {
            log::warn!("ambient_volume {} out of range, clamping", self.ambient_volume);
            self.ambient_volume = clamp_volume(self.ambient_volume, defaults.ambient_volume);
        }
        if !POMODORO_OPTIONS.contains(&self.pomodoro_minutes) {
            log::warn!(
                "pomodoro_minutes {} not one of {:?}, using {}",
                self.pomodoro_minutes,
                POMODORO_OPTIONS,
                defaults.pomodoro_minutes
            );
            self.pomodoro_minutes = defaults.pomodoro_minutes;
        }
        if !BREAK_OPTIONS.contains(&self.break_minutes) {
            log::warn!(
                "break_minutes {} not one of {:?}, using {}",
                self.break_minutes,
                BREAK_OPTIONS,
                defaults.break_minutes
            );
            self.break_minutes = defaults.break_minutes;
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{}; using default settings", e);
                Self::default()
            }),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

fn clamp_volume(vol: f32, fallback: f32) -> f32 {
    if vol.is_nan() { fallback } else { vol.clamp(0.0, 1.0) }
}

/// Next value in `options` after `current`, wrapping. Unknown values start from index 0.
fn cycle_option(options: &[u32], current: u32, direction: i32) -> u32 {
    let len = options.len() as i32;
    let idx = options.iter().position(|&o| o == current).unwrap_or(0) as i32;
    options[(idx + direction).rem_euclid(len) as usize]
}
