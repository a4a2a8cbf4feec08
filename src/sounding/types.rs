use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geodesy::GeoPoint;

/// One telemetry sample of a flight track.
///
/// Field aliases match the radiosonde telemetry feed (`datetime`, `lat`,
/// `temp`, ...), so raw feed exports deserialize directly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FlightRecord {
    #[serde(alias = "datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "lat")]
    pub latitude_deg: f64,
    #[serde(alias = "lon")]
    pub longitude_deg: f64,
    #[serde(alias = "alt")]
    pub altitude_m: f64,
    #[serde(alias = "temp", default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(alias = "humidity", default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity_pct: Option<f64>,
    #[serde(alias = "pressure", default, skip_serializing_if = "Option::is_none")]
    pub pressure_hpa: Option<f64>,
}

impl FlightRecord {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_deg, self.longitude_deg, self.altitude_m)
    }
}

/// A single level of a skew-T profile.
///
/// Serialized with the short keys the skew-T renderer reads.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SoundingRecord {
    #[serde(rename = "press")]
    pub pressure_hpa: f64,
    #[serde(rename = "hght")]
    pub height_m: f64,
    #[serde(rename = "temp")]
    pub temperature_c: f64,
    /// `-999.0` when humidity is unknown.
    #[serde(rename = "dwpt")]
    pub dewpoint_c: f64,
    #[serde(rename = "wdir")]
    pub wind_direction_deg: f64,
    #[serde(rename = "wspd")]
    pub wind_speed_mps: f64,
}
