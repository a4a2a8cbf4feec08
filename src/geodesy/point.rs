use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A geodetic position: degrees for latitude/longitude, meters above the
/// reference sphere for altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, ToSchema)]
pub struct GeoPoint {
    #[serde(alias = "lat")]
    pub latitude_deg: f64,
    #[serde(alias = "lon")]
    pub longitude_deg: f64,
    #[serde(alias = "alt", default)]
    pub altitude_m: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Parses a `"lat,lon"` string, as found in station configs and
    /// telemetry `position` fields.
    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let lat: f64 = parts[0].parse().ok()?;
        let lon: f64 = parts[1].parse().ok()?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(Self::new(lat, lon, altitude_m.unwrap_or(0.0)))
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
