use chrono::{DateTime, Utc};

use super::dewpoint::{dewpoint, DEWPOINT_MISSING};
use super::{FlightRecord, SoundingError, SoundingRecord};
use crate::atmosphere::pressure_at_altitude;
use crate::geodesy::look_angle;

/// Sample stride for current telemetry (roughly one level every 25 s).
pub const DECIMATION: usize = 25;
/// Sample stride for legacy tracks, which already arrive at a coarse cadence.
pub const LEGACY_DECIMATION: usize = 1;

const MIN_TRACK_LEN: usize = 50;
const MAX_START_ALTITUDE_M: f64 = 15_000.0;
const MIN_TEMPERATURE_C: f64 = -270.0;
const MIN_PRESSURE_HPA: f64 = 100.0;

/// Builds skew-T soundings from the ascent part of `track`.
///
/// Walks samples `1..burst_index` with a stride of [DECIMATION] (or
/// [LEGACY_DECIMATION]). Samples with a non-positive time step or without a
/// plausible temperature are skipped by advancing a single sample, so the
/// stride resumes from the next valid one. Wind is derived from the motion
/// relative to the immediately preceding sample. Traversal stops at the first
/// level above 100 hPa.
pub fn build_soundings(
    track: &[FlightRecord],
    burst_index: usize,
    legacy_format: bool,
) -> Result<Vec<SoundingRecord>, SoundingError> {
    if track.len() < MIN_TRACK_LEN {
        return Err(SoundingError::InsufficientData { len: track.len() });
    }
    if burst_index == 0 {
        return Err(SoundingError::DescentOnly);
    }
    if track[0].altitude_m > MAX_START_ALTITUDE_M {
        return Err(SoundingError::HighAltitudeOnly {
            altitude_m: track[0].altitude_m,
        });
    }

    let step = if legacy_format {
        LEGACY_DECIMATION
    } else {
        DECIMATION
    };
    let end = burst_index.min(track.len());

    let mut soundings = Vec::new();
    let mut skipped = 0;
    let mut idx = 1;

    while idx < end {
        let current = &track[idx];
        let previous = &track[idx - 1];

        let time_delta_s = seconds_between(previous.timestamp, current.timestamp);
        if time_delta_s <= 0.0 {
            log::debug!("Sample {}: non-increasing timestamp, skipping", idx);
            skipped += 1;
            idx += 1;
            continue;
        }

        let temperature_c = match current.temperature_c {
            Some(t) if t > MIN_TEMPERATURE_C => t,
            _ => {
                log::debug!("Sample {}: no usable temperature, skipping", idx);
                skipped += 1;
                idx += 1;
                continue;
            }
        };

        let dewpoint_c = current
            .relative_humidity_pct
            .and_then(|rh| dewpoint(temperature_c, rh))
            .unwrap_or(DEWPOINT_MISSING);

        // Wind blows from the reciprocal of the direction of travel.
        let movement = look_angle(&previous.position(), &current.position());
        let wind_direction_deg = (movement.azimuth_deg + 180.0) % 360.0;
        let wind_speed_mps = movement.great_circle_distance_m / time_delta_s;

        let pressure_hpa = current
            .pressure_hpa
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| pressure_at_altitude(current.altitude_m));
        if pressure_hpa < MIN_PRESSURE_HPA {
            log::debug!(
                "Sample {}: pressure {:.1} hPa below {} hPa, stopping",
                idx,
                pressure_hpa,
                MIN_PRESSURE_HPA
            );
            break;
        }

        soundings.push(SoundingRecord {
            pressure_hpa,
            height_m: current.altitude_m,
            temperature_c,
            dewpoint_c,
            wind_direction_deg,
            wind_speed_mps,
        });

        idx += step;
    }

    if soundings.is_empty() {
        return Err(SoundingError::NoUsableSoundings);
    }

    log::info!(
        "Built {} sounding levels from {} samples (burst at {}, {} skipped)",
        soundings.len(),
        track.len(),
        burst_index,
        skipped
    );

    Ok(soundings)
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}
