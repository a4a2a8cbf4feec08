//! Shared test fixtures.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::sounding::FlightRecord;

/// Launch site used by synthetic tracks.
pub const LAUNCH_LAT_DEG: f64 = -34.97;
pub const LAUNCH_LON_DEG: f64 = 138.53;
pub const LAUNCH_ALT_M: f64 = 100.0;

/// Ascent rate of synthetic tracks [m/s].
pub const ASCENT_RATE_M_S: f64 = 5.0;
/// Eastward drift of synthetic tracks [deg/s].
pub const DRIFT_LON_DEG_S: f64 = 1e-4;

pub fn launch_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 21, 23, 0, 0).unwrap()
}

/// Balloon ascending at a constant rate with 1 °C / 100 m lapse rate, 50 %
/// humidity, one sample per second and a steady eastward drift.
pub fn synthetic_ascent(len: usize) -> Vec<FlightRecord> {
    (0..len)
        .map(|i| {
            let altitude_m = LAUNCH_ALT_M + ASCENT_RATE_M_S * i as f64;
            FlightRecord {
                timestamp: launch_time() + Duration::seconds(i as i64),
                latitude_deg: LAUNCH_LAT_DEG,
                longitude_deg: LAUNCH_LON_DEG + DRIFT_LON_DEG_S * i as f64,
                altitude_m,
                temperature_c: Some(20.0 - altitude_m / 100.0),
                relative_humidity_pct: Some(50.0),
                pressure_hpa: None,
            }
        })
        .collect()
}
