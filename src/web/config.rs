use serde::Deserialize;
use thiserror::Error;

use crate::geodesy::GeoPoint;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid station coordinates: {0}")]
    InvalidStation(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: Option<StationConfig>,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub sounding: SoundingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoundingConfig {
    /// Default for requests that don't say whether the track uses the
    /// legacy (coarse) telemetry cadence.
    #[serde(default)]
    pub legacy_format: bool,
}

/// Receiver location, used as the default look-angle origin.
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub name: Option<String>,
    pub coordinates: String,
    #[serde(default)]
    pub altitude_m: f64,
}

impl StationConfig {
    pub fn position(&self) -> Result<GeoPoint, ConfigError> {
        GeoPoint::from_coordinates(&self.coordinates, Some(self.altitude_m))
            .ok_or_else(|| ConfigError::InvalidStation(self.coordinates.clone()))
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        if let Some(station) = &config.station {
            station.position()?;
        }
        Ok(config)
    }

    pub fn station_position(&self) -> Option<GeoPoint> {
        self.station.as_ref().and_then(|s| s.position().ok())
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};
    use crate::geodesy::GeoPoint;

    #[test]
    fn full_config() {
        let config = Config::from_yaml(
            r#"
station:
  name: VK5ARG
  coordinates: "-35.08081,138.5585"
  altitude_m: 140.0
web:
  bind: 127.0.0.1:9000
sounding:
  legacy_format: true
"#,
        )
        .unwrap();

        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert!(config.sounding.legacy_format);
        assert_eq!(
            config.station_position(),
            Some(GeoPoint::new(-35.08081, 138.5585, 140.0))
        );
    }

    #[test]
    fn defaults() {
        let config = Config::from_yaml("station: null\n").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert!(!config.sounding.legacy_format);
        assert_eq!(config.station_position(), None);
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_yaml(include_str!("../../config.example.yaml")).unwrap();
        assert!(config.station_position().is_some());
    }

    #[test]
    fn invalid_station() {
        let result = Config::from_yaml("station:\n  coordinates: somewhere\n");
        assert!(matches!(result, Err(ConfigError::InvalidStation(_))));
    }
}
