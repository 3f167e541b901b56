//! Session settings
//!
//! Loaded once before a session starts. Missing or unreadable files fall back
//! to defaults so the game always starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Configuration for one play-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    /// Play-area width (fixed for the session)
    pub width: f32,
    /// Play-area height (fixed for the session)
    pub height: f32,

    // === Rules ===
    /// Destroyed bricks needed to win
    pub win_score: u32,
    /// Lives at session start
    pub initial_lives: u32,
    /// Input-driven ball speed (units/s)
    pub player_speed: f32,
    /// Let the ball drift on its own velocity instead of sitting still
    /// between key presses
    pub ball_drifts: bool,

    // === Determinism ===
    /// Seed for the ghost's random walk
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            win_score: WIN_SCORE,
            initial_lives: INITIAL_LIVES,
            player_speed: PLAYER_VELOCITY,
            ball_drifts: false,

            seed: 0x5EED_0F_6405,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(SettingsError::Invalid {
                field: "width/height",
                reason: format!("play area must be positive, got {}x{}", self.width, self.height),
            });
        }
        if self.initial_lives == 0 {
            return Err(SettingsError::Invalid {
                field: "initial_lives",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.win_score == 0 {
            return Err(SettingsError::Invalid {
                field: "win_score",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.player_speed >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "player_speed",
                reason: format!("must be non-negative, got {}", self.player_speed),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let settings = Settings::default();
        assert_eq!(settings.win_score, 73);
        assert_eq!(settings.initial_lives, 3);
        assert!(!settings.ball_drifts);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1024.0, "seed": 7 }"#).unwrap();
        assert_eq!(settings.width, 1024.0);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.height, DEFAULT_HEIGHT);
        assert_eq!(settings.initial_lives, INITIAL_LIVES);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            ball_drifts: true,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "width": 0.0 }"#),
            Err(SettingsError::Invalid { field: "width/height", .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "initial_lives": 0 }"#),
            Err(SettingsError::Invalid { field: "initial_lives", .. })
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
