//! Runtime settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// How an enemy behaves after its position is reflected at the board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnemyWrap {
    /// Reflect, then advance one more step so it does not sit on the edge
    #[default]
    Restep,
    /// Reflect only
    Reflect,
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` lets the host pick one (e.g. from the clock)
    pub seed: Option<u64>,

    // === Timing ===
    /// Gameplay tick rate
    pub tick_rate_hz: f32,
    /// Player color churn rate
    pub color_rate_hz: f32,
    /// Largest time span a single tick may simulate (seconds)
    pub max_step: f32,

    // === Spawning ===
    /// Rejection-sampling budget for one enemy spawn
    pub max_spawn_attempts: u32,
    /// Edge behavior for enemies
    pub enemy_wrap: EnemyWrap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            tick_rate_hz: 60.0,
            color_rate_hz: 30.0,
            max_step: 0.1,

            max_spawn_attempts: 10_000,
            enemy_wrap: EnemyWrap::Restep,
        }
    }
}

impl Settings {
    /// Seconds between gameplay ticks
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Seconds between color updates
    pub fn color_interval(&self) -> f32 {
        1.0 / self.color_rate_hz
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        require_positive("tick_rate_hz", self.tick_rate_hz)?;
        require_positive("color_rate_hz", self.color_rate_hz)?;
        require_positive("max_step", self.max_step)?;
        if self.max_spawn_attempts == 0 {
            return Err(GameError::InvalidSettings(
                "max_spawn_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), GameError> {
    if value.is_nan() || value <= 0.0 {
        return Err(GameError::InvalidSettings(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.tick_interval() - 1.0 / 60.0).abs() < 1e-6);
        assert!((settings.color_interval() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "enemy_wrap": "Reflect" }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.enemy_wrap, EnemyWrap::Reflect);
        assert_eq!(settings.tick_rate_hz, 60.0);
        assert_eq!(settings.max_spawn_attempts, 10_000);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let err = Settings::from_json(r#"{ "tick_rate_hz": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let err = Settings::from_json(r#"{ "max_spawn_attempts": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, GameError::Json(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here/boom_zap.json");
        assert_eq!(settings.seed, None);
        assert_eq!(settings.enemy_wrap, EnemyWrap::Restep);
    }
}
