use std::fs;
use std::path::{Path, PathBuf};

use super::{FlightRecord, TrackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Json,
    Yaml,
}

impl TrackFormat {
    pub fn from_path(path: &Path) -> Result<Self, TrackError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(TrackFormat::Json),
            Some("yaml") | Some("yml") => Ok(TrackFormat::Yaml),
            _ => Err(TrackError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads a flight track exported as a JSON array or YAML sequence of
/// telemetry samples.
pub struct TrackLoader {
    path: PathBuf,
}

impl TrackLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the track, ordered by timestamp
    pub fn load(&self) -> Result<Vec<FlightRecord>, TrackError> {
        let format = TrackFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        let track = parse_track(&content, format)?;
        log::info!(
            "Loaded {} samples from {}",
            track.len(),
            self.path.display()
        );
        Ok(track)
    }
}

pub fn parse_track(content: &str, format: TrackFormat) -> Result<Vec<FlightRecord>, TrackError> {
    let mut track: Vec<FlightRecord> = match format {
        TrackFormat::Json => serde_json::from_str(content)?,
        TrackFormat::Yaml => serde_yaml::from_str(content)?,
    };
    order_track(&mut track);
    Ok(track)
}

/// Orders samples by timestamp. Stable, so duplicate timestamps keep their
/// feed order.
pub fn order_track(track: &mut [FlightRecord]) {
    track.sort_by_key(|record| record.timestamp);
}

#[cfg(test)]
mod test {
    use super::{parse_track, TrackFormat, TrackLoader};
    use crate::sounding::TrackError;
    use rstest::rstest;
    use std::path::{Path, PathBuf};

    const JSON_TRACK: &str = r#"[
        {"datetime": "2021-05-21T23:27:34Z", "lat": -34.9704, "lon": 138.5366, "alt": 3605.1, "temp": -5.2},
        {"datetime": "2021-05-21T23:27:32Z", "lat": -34.9705, "lon": 138.5365, "alt": 3595.3, "temp": -5.1, "humidity": 69},
        {"datetime": "2021-05-21T23:27:33Z", "lat": -34.9705, "lon": 138.5366, "alt": 3600.2, "pressure": 652.4}
    ]"#;

    const YAML_TRACK: &str = r#"
- timestamp: 2021-05-21T23:27:32Z
  latitude_deg: -34.9705
  longitude_deg: 138.5365
  altitude_m: 3595.3
  temperature_c: -5.1
- timestamp: 2021-05-21T23:27:33Z
  latitude_deg: -34.9705
  longitude_deg: 138.5366
  altitude_m: 3600.2
"#;

    #[rstest]
    #[case("flight.json", Some(TrackFormat::Json))]
    #[case("flight.yaml", Some(TrackFormat::Yaml))]
    #[case("flight.yml", Some(TrackFormat::Yaml))]
    #[case("flight.csv", None)]
    #[case("flight", None)]
    fn format_from_extension(#[case] path: &str, #[case] expected: Option<TrackFormat>) {
        assert_eq!(TrackFormat::from_path(Path::new(path)).ok(), expected);
    }

    #[test]
    fn json_track_sorted_by_time() {
        let track = parse_track(JSON_TRACK, TrackFormat::Json).unwrap();
        let altitudes: Vec<_> = track.iter().map(|r| r.altitude_m).collect();

        assert_eq!(altitudes, vec![3595.3, 3600.2, 3605.1]);
        assert_eq!(track[0].relative_humidity_pct, Some(69.0));
        assert_eq!(track[1].pressure_hpa, Some(652.4));
        assert_eq!(track[1].temperature_c, None);
    }

    #[test]
    fn yaml_track() {
        let track = parse_track(YAML_TRACK, TrackFormat::Yaml).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].temperature_c, Some(-5.1));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_track("[{\"lat\": 1.0}]", TrackFormat::Json),
            Err(TrackError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("track-{}.json", std::process::id()));
        std::fs::write(&path, JSON_TRACK).unwrap();

        let track = TrackLoader::new(path.clone()).load();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(track.unwrap().len(), 3);
    }

    #[test]
    fn missing_file() {
        let loader = TrackLoader::new(PathBuf::from("/nonexistent/track.json"));
        assert!(matches!(loader.load(), Err(TrackError::FileRead(_))));
    }
}
