//! Game settings and tuning
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ENEMY_SPEED, MAX_POWER};

/// Errors that can occur while loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    Io(std::io::Error),
    /// The file is not valid settings JSON
    Json(serde_json::Error),
    /// A value parsed but is out of range
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {e}"),
            SettingsError::Json(e) => write!(f, "JSON error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid setting: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Balance ===
    /// Peak of the charge oscillator
    pub max_power: f32,
    /// Enemy speed; enemies close 1/(400 * speed) of their gap per frame
    pub enemy_speed: f32,

    // === Run ===
    /// Fixed RNG seed; None picks one at startup
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Simulated frames per second
    pub frame_rate: u32,
    /// Frames to simulate before exiting
    pub frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_power: MAX_POWER,
            enemy_speed: ENEMY_SPEED,
            seed: None,
            frame_rate: 60,
            frames: 1200,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a settings file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.max_power.is_finite() || self.max_power <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "max_power must be positive, got {}",
                self.max_power
            )));
        }
        if !self.enemy_speed.is_finite() || self.enemy_speed <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "enemy_speed must be positive, got {}",
                self.enemy_speed
            )));
        }
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame_rate must be nonzero".into()));
        }
        Ok(())
    }

    /// Seconds per simulated frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }
}
