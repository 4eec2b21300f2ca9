//! Game settings
//!
//! Persisted as a JSON file; unknown or malformed content falls back to
//! defaults. The CLI can override any field for a single run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play-field width in pixels.
    pub width: i32,
    /// Play-field height in pixels.
    pub height: i32,
    /// Artifacts kept in play.
    pub artifact_count: usize,
    /// Session length in frames (the headless window's budget).
    pub frames: usize,
    /// Seed for spawning, setup, and the autopilot.
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            artifact_count: 40,
            frames: 600,
            seed: 42,
        }
    }
}

impl Settings {
    /// Load from a JSON file, defaulting when absent or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write back as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.width, DEFAULT_WIDTH);
        assert_eq!(settings.artifact_count, 40);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 9,
            frames: 12,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
