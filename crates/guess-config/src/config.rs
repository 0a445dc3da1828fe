use std::path::Path;

use anyhow::{Context, Result};
use guess_core::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::theme::Theme;

/// Default directory holding `start.wav`, `incorrect.wav`, `correct.wav`, `reset.wav`.
pub const DEFAULT_SOUND_DIR: &str = "sounds";

/// Application configuration (config.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AppConfig {
    /// Theme applied at startup.
    pub theme: Theme,
    /// Difficulty preselected in the selector.
    pub difficulty: Difficulty,
    pub sound_dir: String,
    pub sound_enabled: bool,
    /// Cue volume, 0.0..=1.0.
    pub volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            difficulty: Difficulty::Easy,
            sound_dir: DEFAULT_SOUND_DIR.to_string(),
            sound_enabled: true,
            volume: 1.0,
        }
    }
}

impl AppConfig {
    pub fn validate(&mut self) {
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        if self.sound_dir.trim().is_empty() {
            self.sound_dir = DEFAULT_SOUND_DIR.to_string();
        }
    }

    /// Read config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate();
        Ok(config)
    }

    /// Read config, or fall back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config not found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::read(path)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AppConfig::default();
        assert_eq!(c.theme, Theme::Default);
        assert_eq!(c.difficulty, Difficulty::Easy);
        assert_eq!(c.sound_dir, "sounds");
        assert!(c.sound_enabled);
        assert!((c.volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_clamps() {
        let mut c = AppConfig {
            volume: 3.5,
            sound_dir: "  ".to_string(),
            ..Default::default()
        };
        c.validate();
        assert!((c.volume - 1.0).abs() < f32::EPSILON);
        assert_eq!(c.sound_dir, DEFAULT_SOUND_DIR);

        c.volume = -1.0;
        c.validate();
        assert_eq!(c.volume, 0.0);

        c.volume = f32::NAN;
        c.validate();
        assert!((c.volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deserialize_from_empty() {
        let c: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, AppConfig::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(json.contains("\"soundDir\""));
        assert!(json.contains("\"soundEnabled\""));
        assert!(json.contains("\"theme\":\"default\""));
        assert!(json.contains("\"difficulty\":\"easy\""));
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            theme: Theme::Dark,
            difficulty: Difficulty::Hard,
            sound_dir: "assets/sfx".to_string(),
            sound_enabled: false,
            volume: 0.25,
        };
        config.write(&path).unwrap();

        let loaded = AppConfig::read(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_or_default_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_read_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"volume": 9.0, "theme": "light"}"#).unwrap();
        let config = AppConfig::read(&path).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert!((config.volume - 1.0).abs() < f32::EPSILON);
    }
}
