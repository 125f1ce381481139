//! Configuration loading and validation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use vivetrack_core::{DeviceClass, PoseCorrection};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub units: UnitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Device class to resolve
    #[serde(default = "default_class")]
    pub class: DeviceClass,
    /// 0-based ordinal among same-class devices
    #[serde(default)]
    pub ordinal: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            class: default_class(),
            ordinal: 0,
        }
    }
}

fn default_class() -> DeviceClass {
    DeviceClass::Tracker
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Scale from runtime meters to working units
    #[serde(default = "default_meters_to_units")]
    pub meters_to_units: f64,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            meters_to_units: default_meters_to_units(),
        }
    }
}

fn default_meters_to_units() -> f64 {
    1.0
}

impl Config {
    pub fn correction(&self) -> PoseCorrection {
        PoseCorrection::new(self.units.meters_to_units)
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tracking.class, DeviceClass::Tracker);
        assert_eq!(config.tracking.ordinal, 0);
        assert_eq!(config.units.meters_to_units, 1.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[units]\nmeters_to_units = 1000.0\n").unwrap();
        assert_eq!(config.units.meters_to_units, 1000.0);
        assert_eq!(config.tracking.class, DeviceClass::Tracker);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/vivetrack.toml")).unwrap();
        assert_eq!(config.tracking.ordinal, 0);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tracking]\nclass = \"controller\"\nordinal = 1").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.tracking.class, DeviceClass::Controller);
        assert_eq!(config.tracking.ordinal, 1);
    }
}
