//! Simulation configuration
//!
//! Grid dimensions and the engine toggles, with an optional RON
//! loader for hosts that keep their settings in a file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors are the only recoverable error class in the
/// core; everything else is a precondition violation and panics.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("failed to parse simulation config: {0}")]
    Parse(String),
}

/// Startup settings for the grid and tick engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub paused: bool,
    /// Gates movement evaluation (Phase 1 physics).
    pub physics_enabled: bool,
    /// Gates reaction evaluation (Phase 1 features).
    pub features_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        // Classic board size
        Self {
            width: 50,
            height: 43,
            paused: false,
            physics_enabled: true,
            features_enabled: true,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Parse and validate a RON document.
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 43);
        assert!(config.physics_enabled);
        assert!(config.features_enabled);
        assert!(!config.paused);
    }

    #[test]
    fn test_zero_sized_grid_is_rejected() {
        let config = SimConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 0, .. })
        ));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = SimConfig {
            width: 8,
            height: 9,
            paused: true,
            ..Default::default()
        };
        let serialized = ron::to_string(&config).expect("serialize");
        let parsed = SimConfig::from_ron(&serialized).expect("parse");
        assert_eq!(parsed.width, 8);
        assert_eq!(parsed.height, 9);
        assert!(parsed.paused);
    }

    #[test]
    fn test_ron_defaults_apply() {
        let parsed = SimConfig::from_ron("(width: 12, height: 4)").expect("parse");
        assert_eq!(parsed.width, 12);
        assert_eq!(parsed.height, 4);
        assert!(parsed.physics_enabled);
    }

    #[test]
    fn test_ron_garbage_is_a_parse_error() {
        assert!(matches!(
            SimConfig::from_ron("not ron at all"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_ron_zero_grid_is_rejected() {
        assert!(SimConfig::from_ron("(width: 0, height: 4)").is_err());
    }
}
