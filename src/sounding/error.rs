use strum_macros::IntoStaticStr;
use thiserror::Error;

/// Reasons a flight track cannot produce a sounding.
#[derive(Debug, Clone, PartialEq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SoundingError {
    #[error("insufficient data for skew-t plot ({len} samples)")]
    InsufficientData { len: usize },
    #[error("insufficient data for skew-t plot (only descent data available)")]
    DescentOnly,
    #[error("insufficient data for skew-t plot (only data above 15 km available, first sample at {altitude_m} m)")]
    HighAltitudeOnly { altitude_m: f64 },
    #[error("no usable temperature data in ascent")]
    NoUsableSoundings,
}

impl SoundingError {
    /// Stable snake_case identifier, e.g. `descent_only`.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("invalid JSON track: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML track: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported track format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod test {
    use super::SoundingError;
    use rstest::rstest;

    #[rstest]
    #[case(SoundingError::InsufficientData { len: 3 }, "insufficient_data")]
    #[case(SoundingError::DescentOnly, "descent_only")]
    #[case(SoundingError::HighAltitudeOnly { altitude_m: 16000.0 }, "high_altitude_only")]
    #[case(SoundingError::NoUsableSoundings, "no_usable_soundings")]
    fn reason_codes(#[case] error: SoundingError, #[case] reason: &str) {
        assert_eq!(error.reason(), reason);
    }
}
